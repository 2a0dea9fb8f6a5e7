//! Fetch-group-insert orchestration for a feature's criteria details.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, instrument, trace, warn};

use critview_client::CriteriaFetch;
use critview_core::defaults;
use critview_core::normalize;
use critview_core::{Error, Hit, Result, SearchResponse};

use crate::document::Document;
use crate::render;
use crate::render::FeatureLinkGroups;

/// Renders criteria details into a page document.
pub struct CriteriaPanel {
    fetcher: Arc<dyn CriteriaFetch>,
}

impl CriteriaPanel {
    pub fn new(fetcher: Arc<dyn CriteriaFetch>) -> Self {
        Self { fetcher }
    }

    /// Fetch criteria hits for a feature and render them into `document`.
    ///
    /// Shows a loading indicator before the details table while the fetch
    /// is in flight and removes it once fragments have landed. Zero hits
    /// replace the loading container with a no-results notice; a failure
    /// replaces it with an error notice, removes the indicator, and
    /// returns the classified error.
    #[instrument(skip(self, document), fields(subsystem = "panel", component = "details", op = "render_criteria_details"))]
    pub async fn render_criteria_details(
        &self,
        document: &mut Document,
        feature_id: &str,
    ) -> Result<()> {
        if feature_id.trim().is_empty() {
            return Err(Error::InvalidInput("empty feature id".to_string()));
        }

        let start = Instant::now();

        // Contract containers must exist before any mutation
        let loading = document.get(&normalize::loading_container_id(feature_id))?;
        let table = document.get(&normalize::table_container_id(feature_id))?;

        let spinner_id = normalize::spinner_id(feature_id);
        document.insert_before(table, spinner_id.clone(), render::spinner(&spinner_id));

        let response = match self.fetcher.fetch_criteria(feature_id).await {
            Ok(response) => response,
            Err(err) => {
                error!(feature_id, error = %err, "Criteria fetch failed");
                document.replace_children(loading, render::error_notice());
                document.remove(&spinner_id);
                return Err(err);
            }
        };

        if response.hits.is_empty() {
            document.replace_children(loading, render::no_results_notice());
            document.remove(&spinner_id);
            debug!(feature_id, hit_count = 0, "No criteria hits");
            return Ok(());
        }

        for hit in &response.hits {
            if let Err(err) = render_hit(document, &response, hit) {
                error!(feature_id, error = %err, "Criteria render failed");
                document.replace_children(loading, render::error_notice());
                document.remove(&spinner_id);
                return Err(err);
            }
        }

        // Aggregate disease bar in the summary container
        let agg_tags = response.sorted_agg_disease_tags();
        if !agg_tags.is_empty() {
            document.replace_children(loading, render::disease_bar(&agg_tags));
        }

        document.remove(&spinner_id);

        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            feature_id,
            hit_count = response.hits.len(),
            duration_ms = elapsed,
            "Criteria details rendered"
        );
        if elapsed > defaults::SLOW_FETCH_MS {
            warn!(
                feature_id,
                duration_ms = elapsed,
                slow = true,
                "Slow criteria render"
            );
        }
        Ok(())
    }
}

/// Group one hit's note entries by anchor-HTML string and insert the
/// resulting fragments into the hit's section.
fn render_hit(document: &mut Document, response: &SearchResponse, hit: &Hit) -> Result<()> {
    let link_id_type = response.link_id_type(hit).ok_or_else(|| {
        Error::MalformedResponse(format!(
            "no link_info entry for {}/{}",
            hit.index, hit.doc_type
        ))
    })?;
    let criteria_desc = response.criteria_desc(hit).ok_or_else(|| {
        Error::MalformedResponse(format!(
            "no meta_info entry for {}/{}",
            hit.index, hit.doc_type
        ))
    })?;

    let key = normalize::section_key(&hit.doc_type);
    let section = document.section(&key)?;

    let mut groups = FeatureLinkGroups::new();
    for code in &hit.source.sorted_disease_tags() {
        for entry in hit.source.notes_for(code) {
            trace!(section_key = %key, code = %code, fid = %entry.fid, "Grouping note entry");
            groups.insert(&render::feature_anchor(link_id_type, entry), code);
        }
    }

    debug!(
        section_key = %key,
        criteria_desc,
        group_count = groups.len(),
        "Rendering criteria section"
    );

    if let Some(link) = groups.single() {
        // One distinct feature link: inline, no table, no button
        document.append_html(section, link);
    } else if !groups.is_empty() {
        document.append_html(section, render::details_button(&key));
        let row = document.get(&normalize::criteria_row_id(&key))?;
        let container = render::collapse_container(&key, &render::details_table(&groups));
        document.insert_after(row, normalize::details_id(&key), container);
    }
    // A hit whose codes carry no note entries renders nothing

    Ok(())
}
