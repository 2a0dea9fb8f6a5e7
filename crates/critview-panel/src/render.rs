//! Fragment builders for the criteria panel.
//!
//! Pure string-to-string transforms; the [`crate::details`] orchestration
//! decides where each fragment lands. Server-supplied values are escaped at
//! interpolation, before anchor strings are used as grouping keys.

use critview_core::html::escape;
use critview_core::normalize;
use critview_core::NoteEntry;

/// Anchor-HTML string for a note entry:
/// `<a href="/{link_id_type}/{fid}/">{fname}</a>`, with the annotation
/// ` ({linkdata}:{linkvalue})` appended when both fields are present and
/// non-empty.
pub fn feature_anchor(link_id_type: &str, entry: &NoteEntry) -> String {
    let mut anchor = format!(
        r#"<a href="/{}/{}/">{}</a>"#,
        escape(link_id_type),
        escape(&entry.fid),
        escape(&entry.fname)
    );
    if let Some((data, value)) = entry.fnotes.as_ref().and_then(|n| n.annotation()) {
        anchor.push_str(&format!(" ({}:{})", escape(data), escape(value)));
    }
    anchor
}

/// Feature links grouped with the disease codes that reference them.
///
/// Keys are exact anchor-HTML strings, kept in first-insertion order. A
/// repeated (link, code) pair is skipped, so a badge never appears twice
/// for one link; distinct codes accumulate in append order, which is sorted
/// order because callers iterate sorted disease tags.
#[derive(Debug, Default)]
pub struct FeatureLinkGroups {
    groups: Vec<(String, Vec<String>)>,
}

impl FeatureLinkGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `code` references `link`.
    pub fn insert(&mut self, link: &str, code: &str) {
        match self.groups.iter_mut().find(|(l, _)| l == link) {
            Some((_, codes)) => {
                if !codes.iter().any(|c| c == code) {
                    codes.push(code.to_string());
                }
            }
            None => {
                self.groups
                    .push((link.to_string(), vec![code.to_string()]));
            }
        }
    }

    /// Number of distinct feature links.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The sole link when exactly one group exists; drives the inline
    /// rendering path.
    pub fn single(&self) -> Option<&str> {
        match self.groups.as_slice() {
            [(link, _)] => Some(link),
            _ => None,
        }
    }

    /// Groups in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(link, codes)| (link.as_str(), codes.as_slice()))
    }
}

/// One disease badge. The code doubles as a CSS class so the portal
/// stylesheet can color badges per disease.
pub fn disease_badge(code: &str) -> String {
    let code = escape(code);
    format!(
        r#"<a class="btn btn-default btn-disease {}">{}</a>"#,
        code, code
    )
}

/// Badge bar for a list of disease codes, in the order given.
pub fn disease_bar(codes: &[String]) -> String {
    let badges: String = codes.iter().map(|code| disease_badge(code)).collect();
    format!(r#"<div class="disease-bar">{}</div>"#, badges)
}

/// Two-column details table: one row per feature-link group, anchor on the
/// left, the group's badge bar on the right.
pub fn details_table(groups: &FeatureLinkGroups) -> String {
    let mut rows = String::new();
    for (link, codes) in groups.iter() {
        rows.push_str("<tr>");
        rows.push_str(&format!(r#"<td width="150px">{}</td>"#, link));
        rows.push_str(&format!("<td>{}</td>", disease_bar(codes)));
        rows.push_str("</tr>");
    }
    format!(
        r#"<table class="table-striped table-bordered">{}</table>"#,
        rows
    )
}

/// DETAILS toggle button wired to the collapsible container for a section.
pub fn details_button(key: &str) -> String {
    format!(
        r##"<button class="btn btn-sm btn-default" id="{}" data-toggle="collapse" data-target="#{}">DETAILS</button>"##,
        normalize::details_button_id(key),
        normalize::details_id(key)
    )
}

/// Collapsible container wrapping a details table.
pub fn collapse_container(key: &str, table: &str) -> String {
    format!(
        r#"<div id="{}" class="collapse col-md-9 col-md-offset-3">{}</div>"#,
        normalize::details_id(key),
        table
    )
}

/// Loading indicator markup.
pub fn spinner(spinner_id: &str) -> String {
    format!(
        r#"<i id="{}" class="fa fa-spinner fa-spin"></i>"#,
        spinner_id
    )
}

/// Notice shown in the loading container when the endpoint returns no hits.
pub fn no_results_notice() -> String {
    r#"<p style="padding:10px">No results found</p>"#.to_string()
}

/// Notice shown in the loading container when a render fails.
pub fn error_notice() -> String {
    r#"<p class="criteria-error" style="padding:10px">Criteria details are unavailable</p>"#
        .to_string()
}
