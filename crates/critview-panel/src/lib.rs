//! # critview-panel
//!
//! Criteria detail-panel rendering.
//!
//! This crate provides:
//! - [`Document`], the in-memory page model with a typed registry of
//!   section containers
//! - Pure fragment builders in [`render`]
//! - [`CriteriaPanel`], the fetch-group-insert orchestration for a feature
//! - [`HelpPopovers`], the per-element lazy help popover state machine
//!
//! The panel takes its HTTP dependency as an `Arc<dyn CriteriaFetch>`, so
//! tests and tools can swap the transport without touching the rendering
//! rules.

pub mod details;
pub mod document;
pub mod popover;
pub mod render;

// Re-export core types
pub use critview_core::*;

pub use details::CriteriaPanel;
pub use document::{Document, NodeId};
pub use popover::{HelpPopovers, HelpTarget, PopoverContent};
pub use render::FeatureLinkGroups;
