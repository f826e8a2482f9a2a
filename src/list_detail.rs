//! Master-detail view over a [`ContactStore`].
//!
//! The controller owns every handle it creates. A render is always a full
//! rebuild: the previous batch of listeners is released as one group before
//! any new row is created, so the number of live listener handles never
//! exceeds the row count of the most recent render.
//!
//! Lifecycle: `Uninitialized → Rendered(selected = None) → Rendered(selected = i)`,
//! looping on further clicks. `render` returns to a freshly built state and
//! keeps a still-valid selection; `select` only swaps classes and repaints the
//! detail pane.

use crate::dom::Dom;
use crate::error::WebError;
use crate::store::ContactStore;

use core::fmt;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Two-pane list-plus-detail controller, generic over the DOM facade.
pub struct ListDetail<D: Dom> {
    inner: Rc<RefCell<Inner<D>>>,
}

struct Inner<D: Dom> {
    dom: D,
    store: ContactStore,
    state: ViewState<D>,
}

struct ViewState<D: Dom> {
    selected: Option<usize>,
    rows: Vec<D::Element>,
    detail: Option<D::Element>,
    listeners: Vec<D::Listener>,
}

impl<D: Dom> ViewState<D> {
    const fn new() -> Self {
        Self {
            selected: None,
            rows: Vec::new(),
            detail: None,
            listeners: Vec::new(),
        }
    }
}

impl<D: Dom + 'static> ListDetail<D> {
    /// Creates a controller over `store`. Nothing is rendered until
    /// [`ListDetail::render`] is called.
    pub fn new(dom: D, store: ContactStore) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                dom,
                store,
                state: ViewState::new(),
            })),
        }
    }

    /// Rebuilds the whole view under `container`.
    ///
    /// Releases the previous render's listener batch, clears `container`,
    /// builds the list pane with one clickable row per contact and an empty
    /// detail pane, then re-applies a still-valid prior selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the facade rejects an element operation.
    pub fn render(&self, container: &D::Element) -> Result<(), WebError> {
        let mut inner = self.inner.borrow_mut();
        inner.release_handles();
        inner.dom.remove_children(container);

        let list_pane = inner.dom.create_element("div")?;
        inner.dom.set_classes(&list_pane, &["list-pane"]);
        inner.dom.append_child(container, &list_pane)?;

        let detail_pane = inner.dom.create_element("div")?;
        inner.dom.set_classes(&detail_pane, &["detail-pane"]);
        inner.dom.append_child(container, &detail_pane)?;

        {
            let Inner { dom, store, state } = &mut *inner;
            for (index, contact) in store.all().iter().enumerate() {
                let row = dom.create_element("div")?;
                dom.set_classes(&row, &["list-item"]);
                dom.set_text(&row, contact.name());

                // Each row gets its own (weak handle, index) pair; nothing is
                // captured by reference.
                let view = Rc::downgrade(&self.inner);
                let listener = dom.add_listener(
                    &row,
                    "click",
                    Box::new(move || Self::dispatch_click(&view, index)),
                )?;

                dom.append_child(&list_pane, &row)?;
                state.rows.push(row);
                state.listeners.push(listener);
            }
            state.detail = Some(detail_pane);
        }

        debug_assert_eq!(inner.state.rows.len(), inner.store.len());

        match inner.state.selected {
            Some(index) if index < inner.store.len() => inner.apply_selection(index)?,
            _ => inner.state.selected = None,
        }
        Ok(())
    }

    /// Selects the row at `index`, as a row click would.
    ///
    /// Exactly one row ends up carrying the `selected` class and the detail
    /// pane is fully replaced with the contact's fields. The list structure is
    /// not rebuilt.
    ///
    /// # Errors
    ///
    /// Returns an error if the facade rejects an element operation.
    ///
    /// # Panics
    ///
    /// Debug builds assert that `index` is within the store; click handlers
    /// are only ever registered with valid indices.
    pub fn select(&self, index: usize) -> Result<(), WebError> {
        self.inner.borrow_mut().apply_selection(index)
    }

    /// Releases every held listener handle and drops all element handles.
    ///
    /// The rendered nodes are left in place; only the controller's ownership
    /// of them ends. Used before a full re-render so handles never leak.
    pub fn clear(&self) {
        self.inner.borrow_mut().release_handles();
    }

    /// Currently selected index, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.inner.borrow().state.selected
    }

    /// Number of rows produced by the most recent render.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.inner.borrow().state.rows.len()
    }

    /// Number of listener handles currently held.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().state.listeners.len()
    }

    fn dispatch_click(view: &Weak<RefCell<Inner<D>>>, index: usize) {
        let Some(inner) = view.upgrade() else {
            return;
        };
        let result = inner.borrow_mut().apply_selection(index);
        if let Err(err) = result {
            tracing::error!(%err, index, "failed to apply row selection");
        }
    }
}

impl<D: Dom> Inner<D> {
    /// Releases the listener batch as one group and drops all handles. The
    /// selection survives so a following render can restore it.
    fn release_handles(&mut self) {
        for listener in self.state.listeners.drain(..) {
            self.dom.release_listener(listener);
        }
        self.state.rows.clear();
        self.state.detail = None;
    }

    fn apply_selection(&mut self, index: usize) -> Result<(), WebError> {
        debug_assert!(index < self.store.len(), "selection index out of range");

        let Inner { dom, store, state } = self;
        let Some(contact) = store.get(index) else {
            tracing::warn!(index, "ignoring selection outside the store");
            return Ok(());
        };

        state.selected = Some(index);
        for (position, row) in state.rows.iter().enumerate() {
            if position == index {
                dom.set_classes(row, &["list-item", "selected"]);
            } else {
                dom.set_classes(row, &["list-item"]);
            }
        }

        if let Some(detail) = &state.detail {
            dom.remove_children(detail);
            for (label, value) in [("Name", contact.name()), ("Email", contact.email())] {
                let field = dom.create_element("div")?;
                dom.set_classes(&field, &["field"]);
                let caption = dom.create_element("label")?;
                dom.set_text(&caption, label);
                let text = dom.create_element("span")?;
                dom.set_classes(&text, &["value"]);
                dom.set_text(&text, value);
                dom.append_child(&field, &caption)?;
                dom.append_child(&field, &text)?;
                dom.append_child(detail, &field)?;
            }
        }
        Ok(())
    }
}

impl<D: Dom> fmt::Debug for ListDetail<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ListDetail")
            .field("contacts", &inner.store.len())
            .field("selected", &inner.state.selected)
            .field("rows", &inner.state.rows.len())
            .finish_non_exhaustive()
    }
}
