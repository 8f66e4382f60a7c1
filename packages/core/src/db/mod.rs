//! Store Layer
//!
//! This module handles all backend data access for the roadmap pipeline:
//!
//! - [`RoadmapStore`] - trait abstraction over the three read operations
//! - [`RestStore`] - implementation against the hosted PostgREST endpoint
//! - [`MemoryStore`] - in-memory implementation for tests and local work
//!
//! # Architecture
//!
//! Services receive a single injected `Arc<dyn RoadmapStore>` instead of
//! constructing clients ad hoc per call. All three collections are read-only
//! from this crate; writes happen in administrative tooling elsewhere.

mod config;
mod error;
mod memory_store;
mod rest_store;
mod roadmap_store;

pub use config::{StoreConfig, ENV_API_KEY, ENV_API_URL, ENV_DEFAULT_ROADMAP};
pub use error::StoreError;
pub use memory_store::MemoryStore;
pub use rest_store::RestStore;
pub use roadmap_store::RoadmapStore;
