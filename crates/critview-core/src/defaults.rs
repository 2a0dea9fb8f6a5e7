//! Centralized default constants for critview.
//!
//! **This module is the single source of truth** for shared default values.
//! The client and panel crates reference these constants instead of defining
//! their own magic numbers.

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// Default portal base URL for the criteria endpoint.
pub const BASE_URL: &str = "http://localhost:8000";

/// Per-request timeout for criteria and help-content fetches (seconds).
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Threshold above which a fetch is logged as slow (milliseconds).
pub const SLOW_FETCH_MS: u64 = 5000;

// =============================================================================
// CSRF
// =============================================================================

/// Cookie name carrying the anti-forgery token on the portal.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Request header the criteria endpoint checks for the anti-forgery token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

// =============================================================================
// ENVIRONMENT OVERRIDES
// =============================================================================

/// Env var overriding [`BASE_URL`].
pub const ENV_BASE_URL: &str = "CRITVIEW_BASE_URL";

/// Env var overriding [`FETCH_TIMEOUT_SECS`].
pub const ENV_FETCH_TIMEOUT_SECS: &str = "CRITVIEW_FETCH_TIMEOUT_SECS";

/// Env var holding a `Cookie`-header-formatted string to source the
/// anti-forgery token from (demo binary).
pub const ENV_CSRF_COOKIE: &str = "CRITVIEW_CSRF_COOKIE";
