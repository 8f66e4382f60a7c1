//! CodePath Core Roadmap Data Layer
//!
//! This crate provides the data loading, graph reshaping, and chapter view
//! assembly for the CodePath roadmap screen.
//!
//! # Architecture
//!
//! - **Edges are a view, not a fact**: the backend stores parent pointers per
//!   node; renderable edges are re-derived on every load by a pure function
//! - **Normalize at the boundary**: chapter ordinals arrive as JSON strings or
//!   numbers and are parsed into `i64` once, during deserialization
//! - **Degrade, never throw**: query failures resolve to empty collections,
//!   malformed fields to in-place defaults, missing relations to explicit
//!   "unavailable" signals
//! - **Injected store**: all reads go through the [`db::RoadmapStore`] trait so
//!   services can run against the hosted backend or an in-memory fake
//!
//! # Modules
//!
//! - [`models`] - Data structures (Roadmap, Chapter, FlowNode, FlowEdge)
//! - [`db`] - Store abstraction with REST and in-memory backends
//! - [`services`] - Roadmap loading, edge synthesis, and chapter partitioning

pub mod db;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use db::*;
pub use models::*;
pub use services::*;
