//! # critview-client
//!
//! Outbound HTTP for critview.
//!
//! This crate provides:
//! - The [`CriteriaFetch`] trait the panel depends on (dependency injection
//!   instead of ambient globals)
//! - [`CriteriaClient`], the reqwest implementation covering the criteria
//!   POST and the help-content GET
//! - CSRF token sourcing via [`CsrfTokenProvider`]
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use critview_client::{CookieCsrf, CriteriaClient, CriteriaFetch};
//!
//! #[tokio::main]
//! async fn main() {
//!     let csrf = Arc::new(CookieCsrf::new("csrftoken=abc123"));
//!     let client = CriteriaClient::from_env("gene", csrf).unwrap();
//!     let response = client.fetch_criteria("ENSG00000134242").await.unwrap();
//!     println!("{} hits", response.hits.len());
//! }
//! ```

pub mod criteria;
pub mod csrf;

// Re-export core types
pub use critview_core::*;

pub use criteria::{CriteriaClient, CriteriaFetch};
pub use csrf::{CookieCsrf, CsrfTokenProvider, NoCsrf, StaticCsrf};
