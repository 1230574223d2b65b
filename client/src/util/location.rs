//! Browser location-hash access.
//!
//! Navigation is hash-based: writing the hash fires `hashchange`, which `App`
//! resolves against the navigation table. Native builds no-op.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// Current `location.hash`, including the leading `#` when present.
pub fn current_hash() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Navigate by setting `location.hash` to `path`.
pub fn set_hash(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_hash(path).is_err() {
                leptos::logging::warn!("failed to navigate to #{path}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}
