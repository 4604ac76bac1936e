//! Color-scheme persistence and application.
//!
//! Reads the user's preference from `localStorage` under a per-page key
//! and applies a `data-theme` attribute to the `<html>` element. Toggle
//! writes back to `localStorage` and updates that attribute. Requires a
//! browser environment; SSR paths safely no-op so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Storage key for the metro-map page.
pub const METRO_THEME_KEY: &str = "metro-map-theme";

/// Storage key for the news page.
pub const NEWS_THEME_KEY: &str = "news-theme";

/// Read the color-scheme preference stored under `storage_key`.
///
/// Returns `true` (dark) when `"dark"` was stored, `false` when `"light"`
/// was stored, and otherwise falls back to the system color-scheme
/// preference.
pub fn read_preference(storage_key: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return false,
        };

        // A stored value wins over the system preference.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(storage_key) {
                return value == "dark";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = storage_key;
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", scheme_value(dark));
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Toggle the scheme and persist `"light"`/`"dark"` under `storage_key`.
pub fn toggle(storage_key: &str, current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(storage_key, scheme_value(next));
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = storage_key;
    }
    next
}

/// The string form persisted to storage and mirrored onto `data-theme`.
#[must_use]
pub fn scheme_value(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}
