//! Edge synthesis
//!
//! The backend persists no edge table; it stores a `parent_node_id` on each
//! child row. [`synthesize_edges`] re-derives the renderable edge list from
//! the node set on every load.
//!
//! # Invariants
//!
//! - One edge per node whose `parent_node_id` resolves to another member of
//!   the same node set; parentless nodes and dangling pointers contribute
//!   zero edges (dangling pointers are logged, not fatal)
//! - Deterministic: identical input produces an identical edge list, with
//!   identifiers derived from the `(parent, child)` id pair

use std::collections::HashMap;

use crate::models::{
    resolve_tail_color, ArrowMarker, EdgeStyle, FlowEdge, FlowNode, TailKind, ARROW_MARKER_SIZE,
    EDGE_DASH_PATTERN, EDGE_STROKE_WIDTH, MARKER_ARROW_CLOSED,
};

/// Default tail color name when the child row specifies none.
const DEFAULT_TAIL_COLOR: &str = "black";

/// Derive the edge list implied by each node's parent pointer.
///
/// Edge order follows node order, so repeated runs over the same node set
/// produce identical output.
pub fn synthesize_edges(nodes: &[FlowNode]) -> Vec<FlowEdge> {
    let by_id: HashMap<&str, &FlowNode> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    let mut edges = Vec::new();
    for node in nodes {
        let Some(parent_id) = node.data.parent_node_id.as_deref() else {
            continue;
        };

        let Some(parent) = by_id.get(parent_id) else {
            tracing::warn!(
                node_id = %node.id,
                parent_node_id = %parent_id,
                "dropping edge: parent node not found in loaded set"
            );
            continue;
        };

        edges.push(edge_between(parent, node));
    }

    edges
}

/// Build the styled edge from a parent to a child node.
///
/// The exit side, stroke color, and dash pattern all come from the child's
/// tail fields.
fn edge_between(parent: &FlowNode, child: &FlowNode) -> FlowEdge {
    let color_name = child.data.tail_color.as_deref().unwrap_or(DEFAULT_TAIL_COLOR);
    let stroke = resolve_tail_color(color_name);

    let stroke_dasharray = match child.data.tail_kind {
        TailKind::Dashed => Some(EDGE_DASH_PATTERN.to_string()),
        TailKind::Solid => None,
    };

    FlowEdge {
        id: FlowEdge::edge_id(&parent.id, &child.id),
        source: parent.id.clone(),
        target: child.id.clone(),
        source_handle: child.data.parent_side,
        style: EdgeStyle {
            stroke: stroke.clone(),
            stroke_width: EDGE_STROKE_WIDTH,
            stroke_dasharray,
        },
        marker_end: ArrowMarker {
            kind: MARKER_ARROW_CLOSED,
            width: ARROW_MARKER_SIZE,
            height: ARROW_MARKER_SIZE,
            color: stroke,
        },
    }
}

// Comprehensive tests in separate module
#[cfg(test)]
#[path = "edges_test.rs"]
mod edges_test;
