//! Data model for the criteria search payload.
//!
//! The criteria endpoint returns an Elasticsearch-shaped envelope: a list of
//! hits plus two lookup tables (`meta_info`, `link_info`) keyed by index and
//! hit type, and the aggregate set of disease tags across all hits. Each
//! hit's `_source` carries its own `disease_tags` list alongside one key per
//! disease code whose value is the note entries linking that code to
//! underlying feature records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level payload returned by the criteria endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching hits, in server order.
    #[serde(default)]
    pub hits: Vec<Hit>,

    /// Description strings keyed by index, then hit type.
    #[serde(default)]
    pub meta_info: HashMap<String, HashMap<String, String>>,

    /// Link-path segments keyed by index, then hit type.
    #[serde(default)]
    pub link_info: HashMap<String, HashMap<String, String>>,

    /// Disease codes aggregated across all hits.
    #[serde(default)]
    pub agg_disease_tags: Vec<String>,
}

impl SearchResponse {
    /// Human-readable criteria description for a hit, from `meta_info`.
    pub fn criteria_desc(&self, hit: &Hit) -> Option<&str> {
        self.meta_info
            .get(&hit.index)?
            .get(&hit.doc_type)
            .map(String::as_str)
    }

    /// Link-path segment for a hit's feature anchors, from `link_info`.
    pub fn link_id_type(&self, hit: &Hit) -> Option<&str> {
        self.link_info
            .get(&hit.index)?
            .get(&hit.doc_type)
            .map(String::as_str)
    }

    /// Aggregate disease tags in lexicographic order, for display.
    pub fn sorted_agg_disease_tags(&self) -> Vec<String> {
        let mut tags = self.agg_disease_tags.clone();
        tags.sort();
        tags
    }
}

/// One search result record describing a feature's criteria linkage to
/// disease tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    /// Source index name.
    #[serde(rename = "_index")]
    pub index: String,

    /// Hit type; lowercased and normalized it selects the criteria section.
    #[serde(rename = "_type")]
    pub doc_type: String,

    /// Hit document body.
    #[serde(rename = "_source")]
    pub source: HitSource,
}

/// Body of a hit: the disease-tag list plus one note-entry list per code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitSource {
    /// Disease codes this hit references.
    #[serde(default)]
    pub disease_tags: Vec<String>,

    /// Note entries keyed by disease code. Captures the per-code keys the
    /// endpoint places beside `disease_tags`.
    #[serde(flatten)]
    pub notes: HashMap<String, Vec<NoteEntry>>,
}

impl HitSource {
    /// Disease tags in lexicographic order. The sorted order drives both
    /// note lookup and grouping, so it must be deterministic.
    pub fn sorted_disease_tags(&self) -> Vec<String> {
        let mut tags = self.disease_tags.clone();
        tags.sort();
        tags
    }

    /// Note entries for a disease code. A code listed in `disease_tags`
    /// with no matching key resolves to the empty list.
    pub fn notes_for(&self, code: &str) -> &[NoteEntry] {
        self.notes.get(code).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// One linkage from a disease code to an underlying feature record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteEntry {
    /// Feature id, used to build the anchor href.
    pub fid: String,

    /// Display label for the anchor.
    pub fname: String,

    /// Optional annotation rendered parenthetically after the anchor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fnotes: Option<FeatureNotes>,
}

/// Annotation fields attached to a note entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureNotes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkdata: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkvalue: Option<String>,
}

impl FeatureNotes {
    /// The `(linkdata, linkvalue)` pair, only when both are present and
    /// non-empty. Either field missing or empty suppresses the
    /// parenthetical.
    pub fn annotation(&self) -> Option<(&str, &str)> {
        match (self.linkdata.as_deref(), self.linkvalue.as_deref()) {
            (Some(data), Some(value)) if !data.is_empty() && !value.is_empty() => {
                Some((data, value))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> SearchResponse {
        serde_json::from_value(serde_json::json!({
            "hits": [{
                "_index": "idx1",
                "_type": "Type A",
                "_source": {
                    "disease_tags": ["D2", "D1"],
                    "D1": [{"fid": "1", "fname": "F1"}],
                    "D2": [{"fid": "1", "fname": "F1"}]
                }
            }],
            "meta_info": {"idx1": {"Type A": "criteria description"}},
            "link_info": {"idx1": {"Type A": "gene"}},
            "agg_disease_tags": ["D2", "D1"]
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_search_response() {
        let response = sample_response();
        assert_eq!(response.hits.len(), 1);

        let hit = &response.hits[0];
        assert_eq!(hit.index, "idx1");
        assert_eq!(hit.doc_type, "Type A");
        assert_eq!(hit.source.disease_tags, vec!["D2", "D1"]);
        assert_eq!(hit.source.notes_for("D1").len(), 1);
        assert_eq!(hit.source.notes_for("D1")[0].fid, "1");
        assert_eq!(hit.source.notes_for("D2")[0].fname, "F1");
    }

    #[test]
    fn test_meta_and_link_lookup() {
        let response = sample_response();
        let hit = &response.hits[0];
        assert_eq!(response.criteria_desc(hit), Some("criteria description"));
        assert_eq!(response.link_id_type(hit), Some("gene"));
    }

    #[test]
    fn test_lookup_missing_entry() {
        let response = sample_response();
        let hit = Hit {
            index: "idx2".to_string(),
            doc_type: "Type A".to_string(),
            source: HitSource {
                disease_tags: vec![],
                notes: HashMap::new(),
            },
        };
        assert_eq!(response.criteria_desc(&hit), None);
        assert_eq!(response.link_id_type(&hit), None);
    }

    #[test]
    fn test_sorted_disease_tags() {
        let response = sample_response();
        let sorted = response.hits[0].source.sorted_disease_tags();
        assert_eq!(sorted, vec!["D1", "D2"]);
        // Input order is untouched
        assert_eq!(response.hits[0].source.disease_tags, vec!["D2", "D1"]);
    }

    #[test]
    fn test_sorted_agg_disease_tags() {
        let response = sample_response();
        assert_eq!(response.sorted_agg_disease_tags(), vec!["D1", "D2"]);
    }

    #[test]
    fn test_notes_for_unknown_code_is_empty() {
        let response = sample_response();
        assert!(response.hits[0].source.notes_for("D9").is_empty());
    }

    #[test]
    fn test_empty_response_defaults() {
        let response: SearchResponse = serde_json::from_str(r#"{"hits": []}"#).unwrap();
        assert!(response.hits.is_empty());
        assert!(response.meta_info.is_empty());
        assert!(response.agg_disease_tags.is_empty());
    }

    #[test]
    fn test_annotation_requires_both_fields() {
        let both = FeatureNotes {
            linkdata: Some("X".to_string()),
            linkvalue: Some("Y".to_string()),
        };
        assert_eq!(both.annotation(), Some(("X", "Y")));

        let missing_value = FeatureNotes {
            linkdata: Some("X".to_string()),
            linkvalue: None,
        };
        assert_eq!(missing_value.annotation(), None);

        let empty_data = FeatureNotes {
            linkdata: Some(String::new()),
            linkvalue: Some("Y".to_string()),
        };
        assert_eq!(empty_data.annotation(), None);
    }

    #[test]
    fn test_note_entry_without_fnotes() {
        let entry: NoteEntry =
            serde_json::from_str(r#"{"fid": "7", "fname": "PTPN22"}"#).unwrap();
        assert!(entry.fnotes.is_none());
    }
}
