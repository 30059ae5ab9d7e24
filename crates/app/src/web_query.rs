//! Parameter seeding from the browser URL.
//!
//! Usage: `index.html?low=12&st=4&ip=true`

#![cfg(target_arch = "wasm32")]

/// The page's query string (`?low=12&...`), if there is a window and a location.
pub fn page_query() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    if search.trim_start_matches('?').is_empty() {
        None
    } else {
        Some(search)
    }
}
