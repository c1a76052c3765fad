pub mod config;
pub mod cookie;
pub mod session;

mod memory;
pub use memory::MemoryCookieJar;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod document;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use document::DocumentCookieJar;

pub use config::ClientConfig;
pub use session::{CookieJar, Session, TOKEN_COOKIE};
