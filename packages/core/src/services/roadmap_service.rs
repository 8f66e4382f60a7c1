//! Roadmap Service - loading and chapter view assembly
//!
//! The service owns every degrade decision in the pipeline:
//!
//! - A failed collection query is caught at this boundary, logged, and
//!   becomes an empty collection for that entity kind only; nodes without
//!   chapters (or vice versa) still render
//! - An empty chapter list is replaced by exactly one synthesized
//!   placeholder chapter so chapter partitioning has something to match
//! - A requested ordinal with no matching chapter titles the view with the
//!   literal `"Unavailable"` rather than silently substituting another
//!   chapter
//!
//! # Stale loads
//!
//! There is no request cancellation; instead every `load_chapter_view` call
//! claims a load generation at initiation and re-checks it after its fetches
//! resolve. A call that is no longer the newest initiated load returns
//! [`RoadmapServiceError::Superseded`], so the last *initiated* request
//! wins, never the last *resolved* one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::db::RoadmapStore;
use crate::models::{Chapter, FlowEdge, FlowNode, Roadmap};
use crate::services::edges::synthesize_edges;
use crate::services::error::RoadmapServiceError;
use crate::services::partition::{partition, previous_chapter};

/// Title shown when the requested chapter ordinal has no matching chapter.
pub const UNAVAILABLE_CHAPTER_TITLE: &str = "Unavailable";

/// Title of the placeholder chapter synthesized for a roadmap with no
/// chapter records.
pub const FALLBACK_CHAPTER_TITLE: &str = "Chapter 1: Introduction";

/// Everything the roadmap screen needs to render one chapter.
#[derive(Debug, Clone, Serialize)]
pub struct ChapterView {
    pub roadmap_id: String,
    /// The displayed chapter ordinal.
    pub chapter: i64,
    /// Matched chapter title, or [`UNAVAILABLE_CHAPTER_TITLE`].
    pub title: String,
    /// Nodes visible in this chapter, in backend order.
    pub nodes: Vec<FlowNode>,
    /// Edges whose endpoints are both visible.
    pub edges: Vec<FlowEdge>,
    /// The roadmap's full chapter list (for navigation UI).
    pub chapters: Vec<Chapter>,
    /// Whether a "previous chapter" control applies.
    pub has_previous: bool,
}

/// Loader and view assembler over an injected [`RoadmapStore`].
pub struct RoadmapService {
    store: Arc<dyn RoadmapStore>,
    default_roadmap_id: Option<String>,
    load_generation: AtomicU64,
}

impl RoadmapService {
    /// Create a service over a store.
    pub fn new(store: Arc<dyn RoadmapStore>) -> Self {
        Self {
            store,
            default_roadmap_id: None,
            load_generation: AtomicU64::new(0),
        }
    }

    /// Prefer this roadmap id when selecting a default.
    pub fn with_default_roadmap(mut self, roadmap_id: impl Into<String>) -> Self {
        self.default_roadmap_id = Some(roadmap_id.into());
        self
    }

    /// Load all roadmaps, ordered by title.
    ///
    /// A query failure is logged and degrades to an empty list.
    pub async fn load_roadmaps(&self) -> Vec<Roadmap> {
        match self.store.fetch_roadmaps().await {
            Ok(roadmaps) => roadmaps,
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch roadmaps");
                Vec::new()
            }
        }
    }

    /// Pick the roadmap the UI should preselect.
    ///
    /// The configured default wins when present in the list; otherwise the
    /// first roadmap by title order.
    pub fn default_roadmap<'a>(&self, roadmaps: &'a [Roadmap]) -> Option<&'a Roadmap> {
        self.default_roadmap_id
            .as_deref()
            .and_then(|id| roadmaps.iter().find(|r| r.id == id))
            .or_else(|| roadmaps.first())
    }

    /// Load and transform all nodes of a roadmap.
    ///
    /// A query failure is logged and degrades to an empty list; the chapter
    /// query is unaffected.
    pub async fn load_nodes(&self, roadmap_id: &str) -> Vec<FlowNode> {
        match self.store.fetch_nodes(roadmap_id).await {
            Ok(records) => records.into_iter().map(FlowNode::from_record).collect(),
            Err(e) => {
                tracing::error!(roadmap_id, error = %e, "failed to fetch nodes");
                Vec::new()
            }
        }
    }

    /// Load the chapters of a roadmap.
    ///
    /// A query failure degrades to an empty list; an empty list (from
    /// failure or genuinely chapterless data) is then replaced by one
    /// synthesized placeholder chapter with ordinal 1 so partitioning still
    /// has something to match against. The placeholder is logged at warning
    /// level; it is a degrade policy, not silent fabrication.
    pub async fn load_chapters(&self, roadmap_id: &str) -> Vec<Chapter> {
        let chapters = match self.store.fetch_chapters(roadmap_id).await {
            Ok(chapters) => chapters,
            Err(e) => {
                tracing::error!(roadmap_id, error = %e, "failed to fetch chapters");
                Vec::new()
            }
        };

        if chapters.is_empty() {
            tracing::warn!(roadmap_id, "no chapters found; synthesizing placeholder chapter 1");
            return vec![Chapter {
                id: Uuid::new_v4().to_string(),
                title: FALLBACK_CHAPTER_TITLE.to_string(),
                roadmap_id: roadmap_id.to_string(),
                num_id: 1,
            }];
        }

        chapters
    }

    /// Title of the chapter with the given ordinal.
    ///
    /// No match yields the literal [`UNAVAILABLE_CHAPTER_TITLE`]; falling
    /// back to the first chapter would silently show the wrong content,
    /// which is worse than an explicit gap.
    pub fn chapter_title(chapters: &[Chapter], ordinal: i64) -> String {
        chapters
            .iter()
            .find(|c| c.num_id == ordinal)
            .map(|c| c.title.clone())
            .unwrap_or_else(|| {
                tracing::warn!(ordinal, "no chapter matches requested ordinal");
                UNAVAILABLE_CHAPTER_TITLE.to_string()
            })
    }

    /// Load everything the roadmap screen needs for one chapter.
    ///
    /// Runs the full pipeline: fetch nodes and chapters (independently
    /// degradable), synthesize edges from parent pointers, partition to the
    /// requested chapter, and resolve the chapter title.
    ///
    /// Returns [`RoadmapServiceError::Superseded`] when a newer load was
    /// initiated while this one was in flight; the caller drops that result.
    pub async fn load_chapter_view(
        &self,
        roadmap_id: &str,
        chapter: i64,
    ) -> Result<ChapterView, RoadmapServiceError> {
        let generation = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let all_nodes = self.load_nodes(roadmap_id).await;
        let chapters = self.load_chapters(roadmap_id).await;

        if self.load_generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(roadmap_id, chapter, generation, "dropping superseded load");
            return Err(RoadmapServiceError::Superseded { generation });
        }

        let all_edges = synthesize_edges(&all_nodes);
        let (nodes, edges) = partition(&all_nodes, &all_edges, chapter);
        let title = Self::chapter_title(&chapters, chapter);

        tracing::debug!(
            roadmap_id,
            chapter,
            node_count = nodes.len(),
            edge_count = edges.len(),
            "assembled chapter view"
        );

        Ok(ChapterView {
            roadmap_id: roadmap_id.to_string(),
            chapter,
            title,
            nodes,
            edges,
            chapters,
            has_previous: previous_chapter(chapter).is_some(),
        })
    }

    /// Load a chapter view for the default roadmap.
    ///
    /// Fails with [`RoadmapServiceError::NoRoadmaps`] when the roadmap list
    /// is empty (or could not be fetched).
    pub async fn load_default_view(
        &self,
        chapter: i64,
    ) -> Result<ChapterView, RoadmapServiceError> {
        let roadmaps = self.load_roadmaps().await;
        let roadmap = self
            .default_roadmap(&roadmaps)
            .ok_or(RoadmapServiceError::NoRoadmaps)?;
        let roadmap_id = roadmap.id.clone();
        self.load_chapter_view(&roadmap_id, chapter).await
    }
}
