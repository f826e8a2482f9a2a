#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Browser demo application built on a narrow DOM facade.
//!
//! The crate renders two pages from a WebAssembly module: a welcome page
//! (headings, history-pushing links, a login form) and a master-detail
//! contact roster. All element and listener access flows through the [`Dom`]
//! trait; [`BrowserDom`] backs it with `web-sys` in the browser, and the test
//! suite substitutes an in-memory tree so the view logic runs anywhere.
//!
//! The host page supplies a mount element (id `body-component` by default)
//! and drives the exported [`WebApp`] methods; after mounting, the module
//! simply returns to the browser event loop.

mod app;
mod browser;
mod dom;
mod error;
mod list_detail;
mod store;
#[cfg(test)]
mod testing;
mod welcome;

pub use app::{DEFAULT_MOUNT_ID, WebApp, WebAppBuilder};
pub use browser::{BrowserDom, BrowserListener};
pub use dom::Dom;
pub use error::WebError;
pub use list_detail::ListDetail;
pub use store::{Contact, ContactStore};
pub use welcome::WelcomePage;
