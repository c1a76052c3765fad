//! # Cookie string handling
//!
//! Helpers for the two cookie formats the client deals with:
//!
//! - the **read** format exposed by `document.cookie`: `name=value` pairs joined
//!   by the literal `"; "` separator, with no attributes;
//! - the **write** format accepted by `document.cookie = ...`: a single
//!   `name=value` pair followed by `; `-separated attributes such as `path=/`.
//!
//! Parsing is deliberately lenient. A pair without `=` is a name with an empty
//! value, and empty segments are skipped, so a malformed cookie string never
//! fails a lookup.

/// Separator between pairs in the `document.cookie` read format.
pub const PAIR_SEPARATOR: &str = "; ";

/// Split a single `name=value` pair on its first `=`.
///
/// Values may themselves contain `=`, so everything after the first one is kept.
pub fn split_pair(pair: &str) -> (&str, &str) {
    match pair.split_once('=') {
        Some((name, value)) => (name, value),
        None => (pair, ""),
    }
}

/// Iterate over the `(name, value)` pairs of a cookie string.
pub fn parse_pairs(cookies: &str) -> impl Iterator<Item = (&str, &str)> {
    cookies
        .split(PAIR_SEPARATOR)
        .filter(|pair| !pair.is_empty())
        .map(split_pair)
}

/// Look up the value of the cookie named `name`.
///
/// Returns the first match, mirroring how browsers order duplicate names.
pub fn find<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    parse_pairs(cookies)
        .find(|(pair_name, _)| *pair_name == name)
        .map(|(_, value)| value)
}

/// Build a session cookie assignment scoped to path `/`.
///
/// No `Expires`/`Max-Age` is set, so the cookie lives for the browser session.
pub fn session_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; path=/")
}

/// Extract the `name=value` pair from a cookie assignment, dropping attributes.
pub fn assignment_pair(assignment: &str) -> (&str, &str) {
    let pair = assignment.split(';').next().unwrap_or_default().trim();
    split_pair(pair)
}
