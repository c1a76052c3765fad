use std::sync::{Arc, Mutex, PoisonError};

use crate::cookie;
use crate::session::CookieJar;

/// In-memory CookieJar for testing and native builds.
///
/// Behaves like `document.cookie`: assignments replace the pair with the same
/// name (attributes are dropped), and reads join pairs with `"; "` in the
/// order they were first set.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookieJar {
    pairs: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the jar from a cookie string in the read format.
    pub fn with_cookies(cookies: &str) -> Self {
        let pairs = cookie::parse_pairs(cookies)
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self {
            pairs: Arc::new(Mutex::new(pairs)),
        }
    }
}

impl CookieJar for MemoryCookieJar {
    fn cookie_string(&self) -> Option<String> {
        let pairs = self.pairs.lock().unwrap_or_else(PoisonError::into_inner);
        if pairs.is_empty() {
            return None;
        }
        let joined = pairs
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(cookie::PAIR_SEPARATOR);
        Some(joined)
    }

    fn write_cookie(&self, assignment: &str) {
        let (name, value) = cookie::assignment_pair(assignment);
        let mut pairs = self.pairs.lock().unwrap_or_else(PoisonError::into_inner);
        match pairs.iter_mut().find(|(existing, _)| existing == name) {
            Some(pair) => pair.1 = value.to_string(),
            None => pairs.push((name.to_string(), value.to_string())),
        }
    }
}
