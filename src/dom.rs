use crate::error::WebError;

/// Capability set the view code requires from the hosting document model.
///
/// Handles are opaque: the view code stores and compares them but never looks
/// inside. The browser implementation backs them with `web-sys` objects; the
/// test implementation backs them with an in-memory tree. Keeping the seam this
/// narrow is what lets the list-detail controller run outside a browser.
pub trait Dom {
    /// Handle to an element in the facade's object model.
    type Element: Clone + 'static;
    /// Handle to a registered event listener.
    ///
    /// The handle owns the callback. It must be handed back through
    /// [`Dom::release_listener`]; silently dropping it leaks the callback on
    /// the JavaScript side of the boundary.
    type Listener: 'static;

    /// Creates a detached element with the given tag name.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying document rejects the tag.
    fn create_element(&self, tag: &str) -> Result<Self::Element, WebError>;

    /// Replaces the text content of `element`.
    fn set_text(&self, element: &Self::Element, text: &str);

    /// Sets an attribute on `element`.
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute name is not accepted.
    fn set_attribute(
        &self,
        element: &Self::Element,
        name: &str,
        value: &str,
    ) -> Result<(), WebError>;

    /// Replaces the class list of `element` with exactly `classes`.
    fn set_classes(&self, element: &Self::Element, classes: &[&str]);

    /// Appends `child` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the insertion is rejected.
    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<(), WebError>;

    /// Removes every child of `element`. Listeners registered on removed
    /// children stay alive until released.
    fn remove_children(&self, element: &Self::Element);

    /// Registers `callback` for `event` on `element` and returns the owning
    /// handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the registration is rejected.
    fn add_listener(
        &self,
        element: &Self::Element,
        event: &str,
        callback: Box<dyn FnMut()>,
    ) -> Result<Self::Listener, WebError>;

    /// Detaches the listener and drops its callback.
    fn release_listener(&self, listener: Self::Listener);

    /// Looks up an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}
