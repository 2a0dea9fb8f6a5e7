//! # critview-core
//!
//! Core types, errors, and normalization rules for the critview criteria
//! renderer.
//!
//! This crate provides the data model for the criteria search payload, the
//! error taxonomy shared by the client and panel crates, and the string
//! normalization rules that derive element ids and section keys from
//! feature identifiers and hit types.

pub mod defaults;
pub mod error;
pub mod html;
pub mod logging;
pub mod models;
pub mod normalize;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{FeatureNotes, Hit, HitSource, NoteEntry, SearchResponse};
pub use normalize::{element_feature_id, section_key};
