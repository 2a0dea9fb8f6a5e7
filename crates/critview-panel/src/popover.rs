//! Lazy help popovers for criteria rows.
//!
//! Each rendered criteria row can carry a help element
//! (`criteria_row_help_<key>`) whose popover content lives in another
//! page's markup, fetched at most once per element. The per-element
//! lifecycle is an explicit state machine held in a side table keyed by
//! element id:
//!
//! ```text
//! Unloaded -> Loading -> Ready
//!                        Ready -> Ready   (show/hide only, no refetch)
//! ```
//!
//! There is no transition back to Unloaded once Ready — content is cached
//! for the element's lifetime. A failed load returns the element to
//! Unloaded so a later hover can retry.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, warn};

use critview_client::CriteriaFetch;
use critview_core::normalize;
use critview_core::{Error, Result};

/// A help element to wire: its own id plus the URL its content is loaded
/// from.
#[derive(Debug, Clone)]
pub struct HelpTarget {
    /// Element id, following the `criteria_row_help_<key>` convention.
    pub element_id: String,
    /// Content URL (the element's `poload` attribute).
    pub poload_url: String,
}

/// Popover title and body, built from the scraped help row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopoverContent {
    /// First-column cell, wrapped to avoid line-wrapping.
    pub title: String,
    /// Second-column cell, rendered as HTML.
    pub content: String,
}

#[derive(Debug, Clone)]
enum PopoverState {
    Unloaded,
    Loading,
    Ready(PopoverContent),
}

/// Side table of help popovers, keyed by element id.
pub struct HelpPopovers {
    fetcher: Arc<dyn CriteriaFetch>,
    targets: HashMap<String, String>,
    states: HashMap<String, PopoverState>,
    visible: HashSet<String>,
}

impl HelpPopovers {
    pub fn new(fetcher: Arc<dyn CriteriaFetch>) -> Self {
        Self {
            fetcher,
            targets: HashMap::new(),
            states: HashMap::new(),
            visible: HashSet::new(),
        }
    }

    /// Wire a set of help elements. Each starts Unloaded.
    pub fn attach(&mut self, targets: impl IntoIterator<Item = HelpTarget>) {
        for target in targets {
            self.states
                .insert(target.element_id.clone(), PopoverState::Unloaded);
            self.targets.insert(target.element_id, target.poload_url);
        }
    }

    /// Whether an element's content has been loaded.
    pub fn is_ready(&self, element_id: &str) -> bool {
        matches!(self.states.get(element_id), Some(PopoverState::Ready(_)))
    }

    /// Whether an element's popover is currently shown.
    pub fn is_visible(&self, element_id: &str) -> bool {
        self.visible.contains(element_id)
    }

    /// Pointer entered a help element: load content on first hover, then
    /// show the popover. Later hovers reuse the cached content without a
    /// round trip.
    pub async fn pointer_enter(&mut self, element_id: &str) -> Result<PopoverContent> {
        let state = self
            .states
            .get(element_id)
            .ok_or_else(|| Error::MissingContainer(element_id.to_string()))?;

        if let PopoverState::Ready(content) = state {
            let content = content.clone();
            self.visible.insert(element_id.to_string());
            return Ok(content);
        }

        let row_id = normalize::help_row_id(element_id)
            .ok_or_else(|| {
                Error::InvalidInput(format!("not a help element id: {}", element_id))
            })?
            .to_string();
        let url = self
            .targets
            .get(element_id)
            .cloned()
            .ok_or_else(|| Error::MissingContainer(element_id.to_string()))?;

        self.states
            .insert(element_id.to_string(), PopoverState::Loading);

        let markup = match self.fetcher.fetch_help(&url).await {
            Ok(markup) => markup,
            Err(err) => {
                warn!(element_id, error = %err, "Help content fetch failed");
                self.states
                    .insert(element_id.to_string(), PopoverState::Unloaded);
                return Err(err);
            }
        };

        let (title, body) = match extract_row_cells(&markup, &row_id) {
            Some(cells) => cells,
            None => {
                warn!(element_id, row_id = %row_id, "Help row not found in markup");
                self.states
                    .insert(element_id.to_string(), PopoverState::Unloaded);
                return Err(Error::MalformedResponse(format!(
                    "no help row with id {}",
                    row_id
                )));
            }
        };

        let content = PopoverContent {
            title: format!(r#"<span style="white-space:nowrap">{}</span>"#, title),
            content: body,
        };
        debug!(element_id, row_id = %row_id, "Help popover loaded");
        self.states.insert(
            element_id.to_string(),
            PopoverState::Ready(content.clone()),
        );
        self.visible.insert(element_id.to_string());
        Ok(content)
    }

    /// Pointer left a help element: hide the popover, keep the content.
    pub fn pointer_leave(&mut self, element_id: &str) {
        self.visible.remove(element_id);
    }
}

/// Extract the first two cell contents of the table row with the given id
/// from raw markup. Accepts either quote style around the id attribute.
pub fn extract_row_cells(markup: &str, row_id: &str) -> Option<(String, String)> {
    let double_quoted = format!(r#"id="{}""#, row_id);
    let single_quoted = format!("id='{}'", row_id);

    let mut search = 0;
    let row_start = loop {
        let open = markup[search..].find("<tr")? + search;
        let tag_end = markup[open..].find('>')? + open;
        let tag = &markup[open..tag_end];
        if tag.contains(&double_quoted) || tag.contains(&single_quoted) {
            break tag_end + 1;
        }
        search = tag_end + 1;
    };

    let row_end = markup[row_start..]
        .find("</tr>")
        .map(|i| row_start + i)
        .unwrap_or(markup.len());
    let cells = row_cells(&markup[row_start..row_end]);
    match cells.as_slice() {
        [first, second, ..] => Some((first.clone(), second.clone())),
        _ => None,
    }
}

fn row_cells(row: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0;
    while let Some(open) = row[pos..].find("<td") {
        let open = pos + open;
        let Some(tag_end) = row[open..].find('>') else {
            break;
        };
        let start = open + tag_end + 1;
        let Some(close) = row[start..].find("</td>") else {
            break;
        };
        cells.push(row[start..start + close].trim().to_string());
        pos = start + close + "</td>".len();
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELP_PAGE: &str = r#"
        <table class="table">
          <tr id="other_row"><td>Other</td><td>Other help</td></tr>
          <tr id="cand_gene" class="info">
            <td>Candidate gene</td>
            <td>Genes in <b>LD</b> with the index marker.</td>
          </tr>
        </table>
    "#;

    #[test]
    fn test_extract_row_cells_matches_row_id() {
        let (title, content) = extract_row_cells(HELP_PAGE, "cand_gene").unwrap();
        assert_eq!(title, "Candidate gene");
        assert_eq!(content, "Genes in <b>LD</b> with the index marker.");
    }

    #[test]
    fn test_extract_row_cells_skips_other_rows() {
        let (title, _) = extract_row_cells(HELP_PAGE, "other_row").unwrap();
        assert_eq!(title, "Other");
    }

    #[test]
    fn test_extract_row_cells_missing_row() {
        assert!(extract_row_cells(HELP_PAGE, "absent_row").is_none());
    }

    #[test]
    fn test_extract_row_cells_single_quoted_id() {
        let markup = "<tr id='k'><td>a</td><td>b</td></tr>";
        assert_eq!(
            extract_row_cells(markup, "k"),
            Some(("a".to_string(), "b".to_string()))
        );
    }

    #[test]
    fn test_extract_row_cells_requires_two_cells() {
        let markup = r#"<tr id="k"><td>only one</td></tr>"#;
        assert!(extract_row_cells(markup, "k").is_none());
    }

    #[test]
    fn test_row_cells_handles_attributes() {
        let cells = row_cells(r#"<td class="c1">a</td><td width="10">b</td>"#);
        assert_eq!(cells, vec!["a".to_string(), "b".to_string()]);
    }
}
