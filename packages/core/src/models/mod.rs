//! Data Models
//!
//! This module contains the data structures used throughout the roadmap
//! pipeline:
//!
//! - `Roadmap` / `Chapter` - top-level grouping and stage records
//! - `NodeRecord` - raw node row as stored by the backend
//! - `FlowNode` / `FlowEdge` - renderable forms handed to the canvas widget
//!
//! Raw records keep the backend's denormalized shape (string positions,
//! string-or-number ordinals, parent pointers instead of edges). The
//! renderable forms are fully normalized; all parsing and defaulting happens
//! in the `NodeRecord` -> `FlowNode` transformation.

mod edge;
mod icon;
mod node;
pub(crate) mod ordinal;
mod roadmap;

pub use edge::{
    ArrowMarker, EdgeStyle, FlowEdge, resolve_tail_color, ARROW_MARKER_SIZE, EDGE_DASH_PATTERN,
    EDGE_STROKE_WIDTH, MARKER_ARROW_CLOSED,
};
pub use icon::IconKey;
pub use node::{
    FlowNode, NodeData, NodeRecord, ParentSide, Position, TailKind, NODE_KIND_CHAPTER_TRANSITION,
    NODE_KIND_ROADMAP,
};
pub use roadmap::{Chapter, Roadmap};
