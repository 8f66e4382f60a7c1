//! Roadmap Services
//!
//! This module contains the business logic of the roadmap pipeline:
//!
//! - `RoadmapService` - loading, degrade policies, and chapter view assembly
//! - `edges` - pure edge synthesis from parent pointers
//! - `partition` - chapter-scoped node/edge filtering and navigation
//! - `interaction` - interpretation of widget click events
//!
//! Services coordinate between the store layer and the canvas widget,
//! owning every normalization and degrade decision so nothing malformed or
//! missing ever reaches the UI shell as an error.

pub mod edges;
pub mod error;
pub mod interaction;
pub mod partition;
pub mod roadmap_service;

pub use edges::synthesize_edges;
pub use error::RoadmapServiceError;
pub use interaction::NodeActivation;
pub use partition::{partition, partition_edges, partition_nodes, previous_chapter};
pub use roadmap_service::{
    ChapterView, RoadmapService, FALLBACK_CHAPTER_TITLE, UNAVAILABLE_CHAPTER_TITLE,
};
