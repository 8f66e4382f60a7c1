//! Derived edge records
//!
//! The backend never persists edges. Each renderable edge is synthesized
//! from a child node's parent-pointer fields (see `services::edges`) and
//! styled from the child's tail fields. [`FlowEdge`] is the wire shape the
//! canvas widget consumes.

use serde::Serialize;

use crate::models::node::ParentSide;

/// Stroke width applied to every edge.
pub const EDGE_STROKE_WIDTH: f64 = 2.0;

/// Dash pattern applied when the child's tail type is dashed.
pub const EDGE_DASH_PATTERN: &str = "5,5";

/// Width and height of the closed-arrowhead marker.
pub const ARROW_MARKER_SIZE: f64 = 20.0;

/// Marker discriminator for a closed arrowhead.
pub const MARKER_ARROW_CLOSED: &str = "arrowclosed";

/// Resolve a tail color name to a concrete color value.
///
/// Known names map through a fixed name->hex table; unknown names pass
/// through as literal color values, assumed to already be valid color
/// syntax.
///
/// # Examples
///
/// ```
/// use codepath_core::models::resolve_tail_color;
///
/// assert_eq!(resolve_tail_color("blue"), "#3b82f6");
/// assert_eq!(resolve_tail_color("#ff8800"), "#ff8800");
/// ```
pub fn resolve_tail_color(name: &str) -> String {
    match name {
        "black" => "#000000".to_string(),
        "blue" => "#3b82f6".to_string(),
        other => other.to_string(),
    }
}

/// Stroke styling for a rendered edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<String>,
}

/// Arrowhead descriptor, colored to match the stroke.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowMarker {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

/// Renderable directed connection from a parent node to a child node.
///
/// Never persisted; recomputed on every load. The identifier is derived
/// from the `(source, target)` pair so repeated synthesis runs are
/// idempotent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: ParentSide,
    pub style: EdgeStyle,
    pub marker_end: ArrowMarker,
}

impl FlowEdge {
    /// Deterministic edge identifier for a `(parent, child)` pair.
    pub fn edge_id(parent_id: &str, child_id: &str) -> String {
        format!("e{parent_id}-{child_id}")
    }
}
