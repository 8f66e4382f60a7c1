//! Roadmap and chapter records
//!
//! Both records are read-only from this crate's perspective: they are
//! authored by administrative tooling and only fetched and reshaped here.

use serde::{Deserialize, Serialize};

use crate::models::ordinal;

/// Top-level named curriculum graph.
///
/// Selected by the UI to scope all chapter and node queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// An ordered stage partitioning a roadmap's nodes.
///
/// `num_id` arrives from the backend as a JSON string or number; it is
/// normalized to `i64` during deserialization so chapter lookups compare
/// strict integers. At most one chapter per `(roadmap_id, num_id)` pair is
/// meaningful for lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub roadmap_id: String,
    #[serde(deserialize_with = "ordinal::de_ordinal")]
    pub num_id: i64,
}
