//! Normalization rules for element ids and section keys.
//!
//! The page contract keys every container off strings derived from the
//! feature id and the hit type. Both derivations are deterministic and
//! idempotent, so repeated normalization can never drift away from the ids
//! the skeleton was built with.

/// Prefix of help-popover target element ids.
pub const HELP_PREFIX: &str = "criteria_row_help_";

/// Element-id-safe form of a feature id: every `.` becomes `_`.
pub fn element_feature_id(feature_id: &str) -> String {
    feature_id.replace('.', "_")
}

/// CSS-safe section key for a hit type: lowercase, every whitespace run
/// (including leading/trailing runs) collapsed to a single `_`.
pub fn section_key(doc_type: &str) -> String {
    let lower = doc_type.to_lowercase();
    let mut key = String::with_capacity(lower.len());
    let mut in_whitespace = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                key.push('_');
                in_whitespace = true;
            }
        } else {
            key.push(c);
            in_whitespace = false;
        }
    }
    key
}

/// Id of the loading/summary container for a feature.
pub fn loading_container_id(feature_id: &str) -> String {
    format!("criteria-{}", element_feature_id(feature_id))
}

/// Id of the details-table container for a feature.
pub fn table_container_id(feature_id: &str) -> String {
    format!("table-criteria-{}", element_feature_id(feature_id))
}

/// Id of the loading indicator for a feature.
pub fn spinner_id(feature_id: &str) -> String {
    format!("criteria-spinner-{}", element_feature_id(feature_id))
}

/// Id of the criteria row for a section key.
pub fn criteria_row_id(key: &str) -> String {
    format!("criteria_row_{}", key)
}

/// Id of the collapsible details container for a section key.
pub fn details_id(key: &str) -> String {
    format!("criteria_details_{}", key)
}

/// Id of the DETAILS toggle button for a section key.
pub fn details_button_id(key: &str) -> String {
    format!("criteria_details_button_{}", key)
}

/// Row id targeted by a help-popover element, derived by stripping the
/// [`HELP_PREFIX`] from the element's own id. `None` when the id does not
/// follow the convention.
pub fn help_row_id(element_id: &str) -> Option<&str> {
    element_id.strip_prefix(HELP_PREFIX)
}
