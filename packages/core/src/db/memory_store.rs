//! MemoryStore - in-memory RoadmapStore implementation
//!
//! Holds fixture records behind an `RwLock` and answers the three read
//! operations with the same filter and ordering semantics the hosted backend
//! applies. Used by service tests and local development; it is not a cache
//! of the real backend.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::db::error::StoreError;
use crate::db::roadmap_store::RoadmapStore;
use crate::models::{Chapter, NodeRecord, Roadmap};

#[derive(Default)]
struct Records {
    roadmaps: Vec<Roadmap>,
    chapters: Vec<Chapter>,
    nodes: Vec<NodeRecord>,
}

/// In-memory RoadmapStore for tests and local development.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Records>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a roadmap record.
    pub fn insert_roadmap(&self, roadmap: Roadmap) {
        self.records
            .write()
            .expect("memory store lock poisoned")
            .roadmaps
            .push(roadmap);
    }

    /// Add a chapter record.
    pub fn insert_chapter(&self, chapter: Chapter) {
        self.records
            .write()
            .expect("memory store lock poisoned")
            .chapters
            .push(chapter);
    }

    /// Add a raw node record.
    pub fn insert_node(&self, node: NodeRecord) {
        self.records
            .write()
            .expect("memory store lock poisoned")
            .nodes
            .push(node);
    }
}

#[async_trait]
impl RoadmapStore for MemoryStore {
    async fn fetch_roadmaps(&self) -> Result<Vec<Roadmap>, StoreError> {
        let records = self.records.read().expect("memory store lock poisoned");
        let mut roadmaps = records.roadmaps.clone();
        roadmaps.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(roadmaps)
    }

    async fn fetch_chapters(&self, roadmap_id: &str) -> Result<Vec<Chapter>, StoreError> {
        let records = self.records.read().expect("memory store lock poisoned");
        let mut chapters: Vec<Chapter> = records
            .chapters
            .iter()
            .filter(|c| c.roadmap_id == roadmap_id)
            .cloned()
            .collect();
        chapters.sort_by_key(|c| c.num_id);
        Ok(chapters)
    }

    async fn fetch_nodes(&self, roadmap_id: &str) -> Result<Vec<NodeRecord>, StoreError> {
        let records = self.records.read().expect("memory store lock poisoned");
        let mut nodes: Vec<NodeRecord> = records
            .nodes
            .iter()
            .filter(|n| n.roadmap_id == roadmap_id)
            .cloned()
            .collect();
        // Ascending order puts NULL chapters last, matching the backend.
        nodes.sort_by_key(|n| (n.chapter.is_none(), n.chapter));
        Ok(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn roadmaps_come_back_ordered_by_title() {
        let store = MemoryStore::new();
        store.insert_roadmap(Roadmap {
            id: "r2".to_string(),
            title: "Systems".to_string(),
            description: None,
        });
        store.insert_roadmap(Roadmap {
            id: "r1".to_string(),
            title: "Frontend".to_string(),
            description: Some("Browser-side development".to_string()),
        });

        let roadmaps = store.fetch_roadmaps().await.unwrap();
        let titles: Vec<&str> = roadmaps.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Frontend", "Systems"]);
    }

    #[tokio::test]
    async fn chapters_filter_by_roadmap_and_order_by_ordinal() {
        let store = MemoryStore::new();
        store.insert_chapter(Chapter {
            id: "c2".to_string(),
            title: "Chapter 2".to_string(),
            roadmap_id: "r1".to_string(),
            num_id: 2,
        });
        store.insert_chapter(Chapter {
            id: "c1".to_string(),
            title: "Chapter 1".to_string(),
            roadmap_id: "r1".to_string(),
            num_id: 1,
        });
        store.insert_chapter(Chapter {
            id: "other".to_string(),
            title: "Elsewhere".to_string(),
            roadmap_id: "r2".to_string(),
            num_id: 1,
        });

        let chapters = store.fetch_chapters("r1").await.unwrap();
        let ordinals: Vec<i64> = chapters.iter().map(|c| c.num_id).collect();
        assert_eq!(ordinals, vec![1, 2]);
    }

    #[tokio::test]
    async fn nodes_filter_by_roadmap() {
        let store = MemoryStore::new();
        store.insert_node(NodeRecord {
            id: "n1".to_string(),
            roadmap_id: "r1".to_string(),
            title: "HTML".to_string(),
            node_type: "roadmapNode".to_string(),
            chapter: Some(1),
            ..Default::default()
        });
        store.insert_node(NodeRecord {
            id: "n2".to_string(),
            roadmap_id: "r2".to_string(),
            title: "TCP".to_string(),
            node_type: "roadmapNode".to_string(),
            chapter: Some(1),
            ..Default::default()
        });

        let nodes = store.fetch_nodes("r1").await.unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].id, "n1");
    }

    #[tokio::test]
    async fn nodes_order_by_chapter_with_nulls_last() {
        let store = MemoryStore::new();
        store.insert_node(NodeRecord {
            id: "unchaptered".to_string(),
            roadmap_id: "r1".to_string(),
            title: "No chapter".to_string(),
            node_type: "roadmapNode".to_string(),
            chapter: None,
            ..Default::default()
        });
        store.insert_node(NodeRecord {
            id: "second".to_string(),
            roadmap_id: "r1".to_string(),
            title: "CSS".to_string(),
            node_type: "roadmapNode".to_string(),
            chapter: Some(2),
            ..Default::default()
        });
        store.insert_node(NodeRecord {
            id: "first".to_string(),
            roadmap_id: "r1".to_string(),
            title: "HTML".to_string(),
            node_type: "roadmapNode".to_string(),
            chapter: Some(1),
            ..Default::default()
        });

        let nodes = store.fetch_nodes("r1").await.unwrap();
        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "unchaptered"]);
    }
}
