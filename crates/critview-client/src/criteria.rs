//! Reqwest implementation of the criteria and help-content fetches.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use critview_core::defaults;
use critview_core::{Error, Result, SearchResponse};

use crate::csrf::CsrfTokenProvider;

/// Fetch seam the panel depends on. Implementations cover the criteria
/// search POST and the lazy help-content GET; both are independent
/// suspension points.
#[async_trait]
pub trait CriteriaFetch: Send + Sync {
    /// Fetch criteria search hits for a feature.
    async fn fetch_criteria(&self, feature_id: &str) -> Result<SearchResponse>;

    /// Fetch raw help markup from a per-element `poload` URL.
    async fn fetch_help(&self, url: &str) -> Result<String>;
}

/// Request body for the criteria endpoint.
#[derive(Serialize)]
struct CriteriaQuery<'a> {
    feature_id: &'a str,
}

/// HTTP client for a portal's criteria endpoint.
pub struct CriteriaClient {
    client: Client,
    base_url: String,
    app_namespace: String,
    csrf: Arc<dyn CsrfTokenProvider>,
    timeout_secs: u64,
}

impl CriteriaClient {
    /// Create a client with explicit configuration.
    ///
    /// The fetch timeout defaults to [`defaults::FETCH_TIMEOUT_SECS`] and
    /// can be overridden via `CRITVIEW_FETCH_TIMEOUT_SECS`.
    pub fn with_config(
        base_url: impl Into<String>,
        app_namespace: impl Into<String>,
        csrf: Arc<dyn CsrfTokenProvider>,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let app_namespace = app_namespace.into();
        if app_namespace.is_empty() {
            return Err(Error::InvalidInput("empty app namespace".to_string()));
        }

        let timeout_secs = std::env::var(defaults::ENV_FETCH_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults::FETCH_TIMEOUT_SECS);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Initializing criteria client: url={}, app={}",
            base_url, app_namespace
        );

        Ok(Self {
            client,
            base_url,
            app_namespace,
            csrf,
            timeout_secs,
        })
    }

    /// Create a client from environment variables, falling back to the
    /// defaults in [`critview_core::defaults`].
    pub fn from_env(
        app_namespace: impl Into<String>,
        csrf: Arc<dyn CsrfTokenProvider>,
    ) -> Result<Self> {
        let base_url = std::env::var(defaults::ENV_BASE_URL)
            .unwrap_or_else(|_| defaults::BASE_URL.to_string());
        Self::with_config(base_url, app_namespace, csrf)
    }

    /// Endpoint URL: `{base}/{app_namespace}/criteria/`.
    fn criteria_url(&self) -> String {
        format!(
            "{}/{}/criteria/",
            self.base_url.trim_end_matches('/'),
            self.app_namespace
        )
    }
}

#[async_trait]
impl CriteriaFetch for CriteriaClient {
    #[instrument(skip(self), fields(subsystem = "client", component = "criteria", op = "fetch_criteria"))]
    async fn fetch_criteria(&self, feature_id: &str) -> Result<SearchResponse> {
        if feature_id.is_empty() {
            return Err(Error::InvalidInput("empty feature id".to_string()));
        }

        let start = Instant::now();

        let mut request = self
            .client
            .post(self.criteria_url())
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&CriteriaQuery { feature_id });

        if let Some(token) = self.csrf.token() {
            request = request.header(defaults::CSRF_HEADER, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Network(format!(
                "Criteria endpoint returned {}: {}",
                status, body
            )));
        }

        let result: SearchResponse = response
            .json()
            .await
            .map_err(|e| Error::MalformedResponse(format!("Failed to parse response: {}", e)))?;

        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            hit_count = result.hits.len(),
            duration_ms = elapsed,
            "Criteria fetch complete"
        );
        if elapsed > defaults::SLOW_FETCH_MS {
            warn!(
                duration_ms = elapsed,
                feature_id, slow = true,
                "Slow criteria fetch"
            );
        }
        Ok(result)
    }

    #[instrument(skip(self), fields(subsystem = "client", component = "criteria", op = "fetch_help"))]
    async fn fetch_help(&self, url: &str) -> Result<String> {
        let start = Instant::now();

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.timeout_secs))
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Error::Network(format!(
                "Help endpoint returned {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response body: {}", e)))?;

        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            response_len = body.len(),
            duration_ms = elapsed,
            "Help fetch complete"
        );
        Ok(body)
    }
}
