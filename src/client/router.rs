//! # Client Router
//!
//! Maps a URL path to a page. A single route exists; there is no fallback or
//! redirect, so anything but `/bible` resolves to nothing.

/// Path of the Bible page
pub const BIBLE_PATH: &str = "/bible";

/// The pages the client can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Bible,
}

/// Resolve a path to its route, if any
pub fn resolve(path: &str) -> Option<Route> {
    if path == BIBLE_PATH {
        Some(Route::Bible)
    } else {
        None
    }
}
