//! Structured logging schema and field name constants for critview.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized field names across
//! every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Render failed and the page shows the error notice |
//! | WARN  | Recoverable issue (slow fetch, help row missing, retryable popover load) |
//! | INFO  | Client initialization, render completions |
//! | DEBUG | Decision points (inline vs table), fetch durations |
//! | TRACE | Per-hit and per-note iteration |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "client", "panel"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "criteria", "details", "popover"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "fetch_criteria", "render_criteria_details", "pointer_enter"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Feature identifier being rendered.
pub const FEATURE_ID: &str = "feature_id";

/// CSS-safe section key derived from a hit type.
pub const SECTION_KEY: &str = "section_key";

/// Element id of a help-popover target.
pub const ELEMENT_ID: &str = "element_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of hits returned by the criteria endpoint.
pub const HIT_COUNT: &str = "hit_count";

/// Number of distinct feature-link groups for a hit.
pub const GROUP_COUNT: &str = "group_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

/// Slow operation threshold exceeded.
pub const SLOW: &str = "slow";
