//! RoadmapStore Trait - Store Abstraction Layer
//!
//! This module defines the `RoadmapStore` trait that abstracts the three
//! read operations the roadmap pipeline needs. The trait enables multiple
//! backend implementations (hosted REST endpoint, in-memory fixtures)
//! without changing business logic in `RoadmapService`.
//!
//! # Design Decisions
//!
//! 1. **Async-First**: all methods are async to support the network backend
//! 2. **Read-Only**: the roadmap pipeline never mutates or persists records;
//!    the trait deliberately has no write methods
//! 3. **Raw Records**: implementations return stored shapes (`NodeRecord`),
//!    not renderable ones; normalization belongs to the service layer
//! 4. **Ordering Contract**: each method documents the ordering the backend
//!    applies, and in-memory implementations must match it
//!
//! # Examples
//!
//! ```
//! use codepath_core::db::{MemoryStore, RoadmapStore};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store: Arc<dyn RoadmapStore> = Arc::new(MemoryStore::new());
//! let roadmaps = store.fetch_roadmaps().await.unwrap();
//! assert!(roadmaps.is_empty());
//! # }
//! ```

use async_trait::async_trait;

use crate::db::error::StoreError;
use crate::models::{Chapter, NodeRecord, Roadmap};

/// Abstraction over the backend's three roadmap read operations.
///
/// Implementations must be `Send + Sync` so futures holding a store can move
/// between runtime threads.
#[async_trait]
pub trait RoadmapStore: Send + Sync {
    /// Fetch every roadmap, ordered by title.
    async fn fetch_roadmaps(&self) -> Result<Vec<Roadmap>, StoreError>;

    /// Fetch the chapters of one roadmap, ordered by `num_id`.
    async fn fetch_chapters(&self, roadmap_id: &str) -> Result<Vec<Chapter>, StoreError>;

    /// Fetch the raw node rows of one roadmap, ordered by chapter.
    async fn fetch_nodes(&self, roadmap_id: &str) -> Result<Vec<NodeRecord>, StoreError>;
}
