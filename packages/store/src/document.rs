//! # `document.cookie` jar: browser-side session storage
//!
//! [`DocumentCookieJar`] is the [`CookieJar`] used on the **web platform**. It
//! reads and assigns `document.cookie` through `web-sys`, so the browser
//! applies its own cookie rules (path scoping, replacement by name).
//!
//! A page without a document (e.g. a worker) behaves like an empty jar. A
//! rejected assignment leaves the jar unchanged and is reported on the
//! console.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::session::CookieJar;

/// CookieJar over the current page's `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookieJar;

impl DocumentCookieJar {
    pub fn new() -> Self {
        Self
    }

    fn html_document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }
}

impl CookieJar for DocumentCookieJar {
    fn cookie_string(&self) -> Option<String> {
        let cookies = Self::html_document()?.cookie().ok()?;
        if cookies.is_empty() {
            return None;
        }
        Some(cookies)
    }

    fn write_cookie(&self, assignment: &str) {
        let Some(document) = Self::html_document() else {
            return;
        };
        if let Err(e) = document.set_cookie(assignment) {
            web_sys::console::warn_2(&"Failed to set cookie:".into(), &e);
        }
    }
}
