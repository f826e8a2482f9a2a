//! Welcome page: headings, a pair of history-pushing links, and a login form.
//!
//! Page construction and listener lifecycle go through the [`Dom`] facade so
//! both are testable; only the anchor click body is browser glue over
//! `web-sys`, because it needs the raw event (prevent default navigation) and
//! the history API, neither of which the facade exposes.

use crate::browser::BrowserDom;
use crate::dom::Dom;
use crate::error::WebError;

use core::fmt;

use wasm_bindgen::JsValue;
use web_sys::{Element, History};

/// A mounted welcome page owning its anchor listener handles.
pub struct WelcomePage<D: Dom> {
    dom: D,
    listeners: Vec<D::Listener>,
}

impl<D: Dom + Clone> WelcomePage<D> {
    /// Builds the page under `container` and registers one listener per
    /// anchor via `attach`. The page owns the returned handles and releases
    /// them as a unit on [`WelcomePage::release`].
    ///
    /// # Errors
    ///
    /// Returns an error if the facade rejects an element operation or a
    /// listener registration.
    pub fn mount_with<F>(dom: &D, container: &D::Element, mut attach: F) -> Result<Self, WebError>
    where
        F: FnMut(&D, &D::Element) -> Result<D::Listener, WebError>,
    {
        let layout = build(dom, container)?;

        let mut listeners = Vec::with_capacity(layout.anchors.len());
        for anchor in &layout.anchors {
            listeners.push(attach(dom, anchor)?);
        }

        Ok(Self {
            dom: dom.clone(),
            listeners,
        })
    }

    /// Detaches every anchor handler and consumes the page.
    pub fn release(mut self) {
        for listener in self.listeners.drain(..) {
            self.dom.release_listener(listener);
        }
    }
}

impl WelcomePage<BrowserDom> {
    /// Builds the page under `container` and wires the browser anchor
    /// handlers.
    ///
    /// Each anchor click logs its `href` to the console, pushes it onto the
    /// browser history, and suppresses the default navigation.
    ///
    /// # Errors
    ///
    /// Returns an error if the DOM rejects an element operation or the
    /// history API is unavailable.
    pub fn mount(dom: &BrowserDom, container: &Element) -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::DomUnavailable)?;
        let history: History = window.history()?;

        Self::mount_with(dom, container, |dom, anchor| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            tracing::debug!(%href, "wiring welcome anchor");

            let history = history.clone();
            let target = anchor.clone();
            dom.add_event_listener(
                anchor,
                "click",
                Box::new(move |event| {
                    let href = target.get_attribute("href").unwrap_or_default();
                    web_sys::console::log_1(&format!("anchor clicked: {href}").into());
                    if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(&href))
                    {
                        tracing::error!(?err, "failed to push history state");
                    }
                    event.prevent_default();
                    event.stop_propagation();
                }),
            )
        })
    }
}

impl<D: Dom> fmt::Debug for WelcomePage<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WelcomePage")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

struct WelcomeLayout<D: Dom> {
    anchors: Vec<D::Element>,
}

fn build<D: Dom>(dom: &D, container: &D::Element) -> Result<WelcomeLayout<D>, WebError> {
    heading(dom, container, "Welcome to the roster demo")?;
    heading(dom, container, "Rendered entirely from WebAssembly")?;
    line_break(dom, container)?;
    line_break(dom, container)?;

    let first = link(dom, container, "Link 1", "address1")?;
    line_break(dom, container)?;
    let second = link(dom, container, "Link 2", "address2")?;
    line_break(dom, container)?;

    login_form(dom, container)?;

    Ok(WelcomeLayout {
        anchors: vec![first, second],
    })
}

fn heading<D: Dom>(dom: &D, parent: &D::Element, text: &str) -> Result<D::Element, WebError> {
    let heading = dom.create_element("h1")?;
    dom.set_text(&heading, text);
    dom.append_child(parent, &heading)?;
    Ok(heading)
}

fn line_break<D: Dom>(dom: &D, parent: &D::Element) -> Result<D::Element, WebError> {
    let br = dom.create_element("br")?;
    dom.append_child(parent, &br)?;
    Ok(br)
}

fn link<D: Dom>(
    dom: &D,
    parent: &D::Element,
    text: &str,
    href: &str,
) -> Result<D::Element, WebError> {
    let anchor = dom.create_element("a")?;
    dom.set_text(&anchor, text);
    dom.set_attribute(&anchor, "href", href)?;
    dom.append_child(parent, &anchor)?;
    Ok(anchor)
}

fn login_form<D: Dom>(dom: &D, parent: &D::Element) -> Result<D::Element, WebError> {
    let form = dom.create_element("form")?;

    labelled_input(dom, &form, "Name:", "text")?;
    labelled_input(dom, &form, "Password:", "password")?;

    let submit = dom.create_element("input")?;
    dom.set_attribute(&submit, "type", "submit")?;
    dom.append_child(&form, &submit)?;

    dom.append_child(parent, &form)?;
    Ok(form)
}

fn labelled_input<D: Dom>(
    dom: &D,
    form: &D::Element,
    caption: &str,
    input_type: &str,
) -> Result<(), WebError> {
    let label = dom.create_element("label")?;
    dom.set_text(&label, caption);
    dom.append_child(form, &label)?;

    let input = dom.create_element("input")?;
    dom.set_attribute(&input, "type", input_type)?;
    dom.append_child(form, &input)?;
    Ok(())
}
