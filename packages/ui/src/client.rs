//! Shared controller constructor and context for all pages.
//!
//! The controller is built once per page load with a platform-appropriate
//! [`store::CookieJar`]:
//! - **Web** (WASM + `web` feature): `document.cookie` via [`store::DocumentCookieJar`]
//! - **Native**: an in-memory jar via [`store::MemoryCookieJar`]

use api::ApiClient;
use dioxus::prelude::*;
use store::{ClientConfig, Session};

use crate::controller::PageController;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformJar = store::DocumentCookieJar;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformJar = store::MemoryCookieJar;

/// The controller type every page works with.
pub type AppController = PageController<PlatformJar, ApiClient>;

/// Create a controller talking to the API configured in `config`.
pub fn make_controller(config: ClientConfig) -> AppController {
    let api = ApiClient::new(config.api.base_url.clone());
    PageController::new(Session::new(PlatformJar::default()), api, config)
}

/// Get the page controller provided by [`ClientProvider`].
pub fn use_controller() -> AppController {
    use_context::<AppController>()
}

/// Provider component that builds the controller from the bundled
/// `hbnb.toml` text. Wrap every page with this component.
#[component]
pub fn ClientProvider(config_file: &'static str, children: Element) -> Element {
    use_context_provider(|| {
        let config = ClientConfig::load(config_file).unwrap_or_else(|e| {
            tracing::error!("Invalid {}, using defaults: {e}", ClientConfig::filename());
            ClientConfig::default()
        });
        tracing::debug!("Using API at {}", config.api.base_url);
        make_controller(config)
    });

    rsx! {
        {children}
    }
}
