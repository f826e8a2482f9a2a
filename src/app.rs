use crate::browser::BrowserDom;
use crate::dom::Dom;
use crate::error::WebError;
use crate::list_detail::ListDetail;
use crate::store::{Contact, ContactStore};
use crate::welcome::WelcomePage;

use wasm_bindgen::prelude::*;

use web_sys::Element;

/// Element id the host page sets aside for the application.
pub const DEFAULT_MOUNT_ID: &str = "body-component";

/// Builder for [`WebApp`].
#[derive(Debug, Default, Clone)]
pub struct WebAppBuilder {
    root_id: Option<String>,
    inject_default_styles: bool,
}

impl WebAppBuilder {
    /// Creates a new builder with default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root_id: None,
            inject_default_styles: true,
        }
    }

    /// Sets the DOM element identifier that should host the application.
    #[must_use]
    pub fn with_root_id(mut self, id: impl Into<String>) -> Self {
        self.root_id = Some(id.into());
        self
    }

    /// Controls whether the bundled stylesheet is injected on startup.
    #[must_use]
    pub const fn inject_default_styles(mut self, inject: bool) -> Self {
        self.inject_default_styles = inject;
        self
    }

    /// Finalises the builder and creates a [`WebApp`].
    ///
    /// # Errors
    ///
    /// Returns an error if the DOM is unavailable or the mount element cannot
    /// be found.
    pub fn build(self) -> Result<WebApp, WebError> {
        WebApp::new_with_options(self)
    }
}

/// Entry point for running the demo inside the browser.
///
/// Holds the mount element and at most one mounted page at a time. Nothing
/// blocks after mounting: the exported methods return to the host event loop,
/// which keeps the module alive for click dispatch.
#[wasm_bindgen]
#[derive(Debug)]
pub struct WebApp {
    dom: BrowserDom,
    mount: Element,
    welcome: Option<WelcomePage<BrowserDom>>,
    contacts: Option<ListDetail<BrowserDom>>,
}

impl WebApp {
    fn new_with_options(builder: WebAppBuilder) -> Result<Self, WebError> {
        let dom = BrowserDom::new()?;
        if builder.inject_default_styles {
            dom.inject_stylesheet()?;
        }
        let mount = dom.mount_point(builder.root_id.as_deref().unwrap_or(DEFAULT_MOUNT_ID))?;

        // The startup lines go straight to the console; tracing events stay
        // silent in the browser unless the host installs a subscriber.
        if let Some(window) = web_sys::window()
            && let Ok(href) = window.location().href()
        {
            web_sys::console::log_1(&format!("starting roster demo at {href}").into());
        }

        Ok(Self {
            dom,
            mount,
            welcome: None,
            contacts: None,
        })
    }

    /// Tears down whichever page is mounted, releasing its listener handles
    /// before the nodes go away.
    fn reset_mount(&mut self) {
        if let Some(page) = self.welcome.take() {
            page.release();
        }
        if let Some(view) = self.contacts.take() {
            view.clear();
        }
        self.dom.remove_children(&self.mount);
    }
}

#[wasm_bindgen]
impl WebApp {
    /// Creates a new [`WebApp`] using the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the DOM mount element cannot be found.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebApp, WebError> {
        Self::new_with_options(WebAppBuilder::new())
    }

    /// Mounts the welcome page, replacing any currently mounted page.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be built.
    pub fn mount_welcome(&mut self) -> Result<(), WebError> {
        self.reset_mount();
        self.welcome = Some(WelcomePage::mount(&self.dom, &self.mount)?);
        Ok(())
    }

    /// Mounts the contact list demo and performs the initial render.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn mount_contacts(&mut self) -> Result<(), WebError> {
        self.reset_mount();

        let store = sample_contacts();
        if let Ok(json) = serde_json::to_string(store.all()) {
            web_sys::console::log_1(&format!("seeded contact store: {json}").into());
        }

        let view = ListDetail::new(self.dom.clone(), store);
        view.render(&self.mount)?;
        self.contacts = Some(view);
        Ok(())
    }
}

/// Installs the panic hook as soon as the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn sample_contacts() -> ContactStore {
    ContactStore::new(vec![
        Contact::new("Jim", "jim@example.com"),
        Contact::new("Fiona", "fiona@example.com"),
        Contact::new("Alice Chen", "alice@example.com"),
        Contact::new("Bob Smith", "bob@example.com"),
    ])
}
