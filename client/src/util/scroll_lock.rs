//! Page scroll locking while an overlay is open.
//!
//! Writes the `overflow` style of `<body>`. Requires a browser environment;
//! SSR paths no-op.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// `overflow` value for `<body>`. The empty string removes the inline
/// style so the stylesheet value applies again.
#[must_use]
pub fn overflow_value(locked: bool) -> &'static str {
    if locked { "hidden" } else { "" }
}

/// Write `value` to the inline `overflow` style of `<body>`.
pub fn set_overflow(value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}
