use crate::dom::Dom;
use crate::error::WebError;

use core::fmt;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use web_sys::{Document, Element, EventTarget, Window};

const STYLE_ELEMENT_ID: &str = "roster-web-styles";

/// [`Dom`] implementation backed by the browser document via `web-sys`.
#[derive(Debug, Clone)]
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    /// Binds to the global window's document.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::DomUnavailable`] outside of a browser environment.
    pub fn new() -> Result<Self, WebError> {
        let window: Window = web_sys::window().ok_or(WebError::DomUnavailable)?;
        let document: Document = window.document().ok_or(WebError::DomUnavailable)?;
        Ok(Self { document })
    }

    /// Returns the owning document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Resolves the element the host page set aside for the application.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::RootNotFound`] when no element carries `id`.
    pub fn mount_point(&self, id: &str) -> Result<Element, WebError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| WebError::RootNotFound(id.to_string()))
    }

    /// Injects the bundled stylesheet once per document.
    ///
    /// # Errors
    ///
    /// Returns an error if the style element cannot be created or inserted.
    pub fn inject_stylesheet(&self) -> Result<(), WebError> {
        if self.document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
            return Ok(());
        }

        let style = self.document.create_element("style")?;
        style.set_id(STYLE_ELEMENT_ID);
        style.set_inner_html(include_str!("../styles/default.css"));

        if let Some(head) = self.document.head() {
            head.append_child(&style)?;
        } else if let Some(body) = self.document.body() {
            body.append_child(&style)?;
        } else {
            return Err(WebError::DomUnavailable);
        }

        Ok(())
    }

    /// Registers an event-carrying callback on `element`.
    ///
    /// This is the browser-only superset of [`Dom::add_listener`] for glue
    /// code that needs the raw [`web_sys::Event`] (e.g. to prevent default
    /// navigation). The returned handle owns the closure.
    ///
    /// # Errors
    ///
    /// Returns an error if the registration is rejected.
    pub fn add_event_listener(
        &self,
        element: &Element,
        event: &str,
        callback: Box<dyn FnMut(web_sys::Event)>,
    ) -> Result<BrowserListener, WebError> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(callback);
        element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(BrowserListener {
            target: EventTarget::from(element.clone()),
            event: event.to_string(),
            closure,
        })
    }
}

impl Dom for BrowserDom {
    type Element = Element;
    type Listener = BrowserListener;

    fn create_element(&self, tag: &str) -> Result<Element, WebError> {
        Ok(self.document.create_element(tag)?)
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<(), WebError> {
        element.set_attribute(name, value)?;
        Ok(())
    }

    fn set_classes(&self, element: &Element, classes: &[&str]) {
        element.set_class_name(&classes.join(" "));
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), WebError> {
        parent.append_child(child)?;
        Ok(())
    }

    fn remove_children(&self, element: &Element) {
        while let Some(child) = element.first_child() {
            if element.remove_child(&child).is_err() {
                break;
            }
        }
    }

    fn add_listener(
        &self,
        element: &Element,
        event: &str,
        mut callback: Box<dyn FnMut()>,
    ) -> Result<BrowserListener, WebError> {
        self.add_event_listener(element, event, Box::new(move |_event| callback()))
    }

    fn release_listener(&self, listener: BrowserListener) {
        listener.release();
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

/// Owning handle for a registered browser event listener.
///
/// Holds the target, the event name, and the `wasm-bindgen` closure so the
/// callback can be detached again. Dropping the handle without calling
/// [`BrowserListener::release`] invalidates the JavaScript side of the closure
/// while it is still attached, so handles must always travel back through the
/// facade.
pub struct BrowserListener {
    target: EventTarget,
    event: String,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl BrowserListener {
    fn release(self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(&self.event, self.closure.as_ref().unchecked_ref());
    }
}

impl fmt::Debug for BrowserListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserListener")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}
