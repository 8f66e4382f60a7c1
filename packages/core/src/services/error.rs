//! Service Layer Error Types
//!
//! Store failures are absorbed inside the loader (logged, degraded to empty
//! collections), so the service surface errors only for conditions the
//! caller must act on: no roadmaps to select at all, or a load that was
//! superseded by a newer one.

use thiserror::Error;

/// Roadmap service operation errors
#[derive(Error, Debug)]
pub enum RoadmapServiceError {
    /// No roadmaps are available to select a default from
    #[error("no roadmaps available")]
    NoRoadmaps,

    /// A newer load was initiated before this one resolved; the result
    /// must be discarded
    #[error("load superseded by a newer request (generation {generation})")]
    Superseded { generation: u64 },
}

impl RoadmapServiceError {
    /// Whether this error marks a stale load the caller should silently drop.
    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded { .. })
    }
}
