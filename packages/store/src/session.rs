//! # Session: the authentication token kept in a cookie
//!
//! [`Session`] owns the single piece of state the client persists: the bearer
//! token returned by a successful login, stored as the cookie named
//! [`TOKEN_COOKIE`]. It never expires the token itself; the cookie lives until
//! the browser session ends.
//!
//! All access goes through the [`CookieJar`] trait so the same logic runs
//! against `document.cookie` in the browser ([`crate::DocumentCookieJar`]) and
//! an in-process jar in tests and native builds ([`crate::MemoryCookieJar`]).

use crate::cookie;

/// Name of the cookie holding the access token.
pub const TOKEN_COOKIE: &str = "token";

/// Read/write access to a cookie string with `document.cookie` semantics.
pub trait CookieJar {
    /// The full cookie string, or `None` when no cookie storage is available.
    fn cookie_string(&self) -> Option<String>;

    /// Apply a cookie assignment such as `"token=abc; path=/"`.
    fn write_cookie(&self, assignment: &str);
}

/// The user's session, backed by a [`CookieJar`].
#[derive(Clone, Debug, Default)]
pub struct Session<J: CookieJar> {
    jar: J,
}

impl<J: CookieJar> Session<J> {
    pub fn new(jar: J) -> Self {
        Self { jar }
    }

    /// The stored access token, if any. An empty `token` cookie counts as no
    /// token.
    pub fn get_token(&self) -> Option<String> {
        let cookies = self.jar.cookie_string()?;
        cookie::find(&cookies, TOKEN_COOKIE)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }

    /// Store `token` as a session cookie, replacing any previous value.
    pub fn set_token(&self, token: &str) {
        self.jar
            .write_cookie(&cookie::session_cookie(TOKEN_COOKIE, token));
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    pub fn jar(&self) -> &J {
        &self.jar
    }
}
