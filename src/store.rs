use serde::Serialize;

/// One record in the roster: a display name and an email address.
///
/// Contacts are immutable after construction; the store hands out shared
/// references only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    name: String,
    email: String,
}

impl Contact {
    /// Creates a contact from its two fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Display name shown in the list rows.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address shown in the detail pane.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Fixed, ordered collection of contacts.
///
/// The sequence never changes for the lifetime of the program, so the position
/// of a contact doubles as its selection identity.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Creates a store over the given contacts, preserving their order.
    #[must_use]
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Returns every contact in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    /// Returns the contact at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    /// Number of contacts held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the store holds no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
