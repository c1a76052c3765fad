//! Thin wrappers over `window.location` and `window.alert`.
//!
//! On native targets there is no browser; reads return nothing and actions are
//! logged instead.

use crate::controller::Outcome;

/// Path of the loaded page, e.g. `/index.html`.
pub fn pathname() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(pathname) = web_sys::window().and_then(|w| w.location().pathname().ok()) {
            return pathname;
        }
    }
    "/".to_string()
}

/// Full URL of the loaded page, including the query string.
pub fn href() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().href().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Full-page navigation to `url`, relative to the current page.
pub fn navigate(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_err() {
                web_sys::console::warn_1(&format!("Navigation to {url} failed").into());
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("Navigate to {url}");
    }
}

/// Blocking alert.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                web_sys::console::warn_2(&format!("Alert failed: {message}").into(), &e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("Alert: {message}");
    }
}

/// Carry out the browser side of an outcome. Re-filtering is view state and
/// is left to the caller.
pub fn follow(outcome: &Outcome) {
    match outcome {
        Outcome::Navigate(url) => navigate(url),
        Outcome::Alert(message) => alert(message),
        Outcome::Refilter(_) => {}
    }
}
