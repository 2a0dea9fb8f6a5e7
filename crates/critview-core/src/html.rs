//! HTML escaping for rendered fragments.
//!
//! Every server-supplied value interpolated into a fragment goes through
//! [`escape`]; anchor-HTML strings are grouping keys as well as markup, so
//! escaping must happen before grouping to keep the keys stable.

/// Escape a string for interpolation into HTML text or attribute values.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
