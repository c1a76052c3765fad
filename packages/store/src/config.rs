//! # Client configuration: `hbnb.toml`
//!
//! Describes where the client finds the places API and how its pages are
//! named. The web binary bundles its `hbnb.toml` at build time and hands the
//! text to [`ClientConfig::load`]. Every field has a production default, so an
//! empty file is equivalent to the default configuration.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:5000/api/v1"
//!
//! [pages]
//! listing = "index.html"
//! detail = "place.html"
//! login = "login.html"
//!
//! [filter]
//! thresholds = [10, 50, 100]
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config, parsed from the bundled file plus the compile-time override. |
//! | [`ApiConfig`] | Base URL of the remote API, without a trailing slash. |
//! | [`PagesConfig`] | File names of the listing, detail and login pages used for navigation. |
//! | [`FilterConfig`] | Price thresholds offered by the listing page's filter, besides `All`. |

use serde::Deserialize;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api/v1";

/// Top-level configuration stored in `hbnb.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pages: PagesConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Remote API configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Page names used for full-page navigation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PagesConfig {
    #[serde(default = "default_listing_page")]
    pub listing: String,
    #[serde(default = "default_detail_page")]
    pub detail: String,
    #[serde(default = "default_login_page")]
    pub login: String,
}

/// Price filter configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<u32>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_listing_page() -> String {
    "index.html".to_string()
}

fn default_detail_page() -> String {
    "place.html".to_string()
}

fn default_login_page() -> String {
    "login.html".to_string()
}

fn default_thresholds() -> Vec<u32> {
    vec![10, 50, 100]
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            listing: default_listing_page(),
            detail: default_detail_page(),
            login: default_login_page(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            thresholds: default_thresholds(),
        }
    }
}

impl ClientConfig {
    /// The configuration the client runs with: the bundled `hbnb.toml` text,
    /// then the `HBNB_API_BASE_URL` value baked in at compile time, if any. A
    /// browser bundle has no runtime environment to read from.
    pub fn load(file: &str) -> Result<Self, toml::de::Error> {
        let config = Self::from_toml(file)?;
        Ok(config.with_base_url_override(option_env!("HBNB_API_BASE_URL")))
    }

    /// Builder method to set the API base URL. Trailing slashes are dropped.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Replace the base URL when `base_url` is set and not blank.
    pub fn with_base_url_override(self, base_url: Option<&str>) -> Self {
        match base_url {
            Some(base_url) if !base_url.trim().is_empty() => self.with_base_url(base_url),
            _ => self,
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "hbnb.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(s)?;
        let base_url = config.api.base_url.clone();
        Ok(config.with_base_url(&base_url))
    }
}
