//! URL resolution
//!
//! Relative-to-absolute resolution per the WHATWG URL standard. Failure is a
//! value (`None`), never an error.

use url::Url;

/// Resolve `relative` against `base`.
///
/// An absolute `relative` resolves on its own even when `base` is not a URL.
/// Returns `None` when neither path yields a URL.
pub fn resolve(base: &str, relative: &str) -> Option<Url> {
    let relative = relative.trim();
    match Url::parse(base.trim()) {
        Ok(base) => base.join(relative).ok(),
        Err(_) => Url::parse(relative).ok(),
    }
}

/// String form of [`resolve`]
pub fn resolve_url(base: &str, relative: &str) -> Option<String> {
    resolve(base, relative).map(String::from)
}
