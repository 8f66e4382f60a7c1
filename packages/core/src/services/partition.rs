//! Chapter partitioning
//!
//! Narrows the full node/edge sets of a roadmap to the subset displayed for
//! one chapter. A chapter-transition node pointing past the current chapter
//! stays visible so the "advance" control for the next stage can be clicked,
//! even though it conceptually belongs to the next chapter.
//!
//! Edges never span a filtered-out node: an edge survives only if both of
//! its endpoints survive the node filter.

use std::collections::HashSet;

use crate::models::{FlowEdge, FlowNode};

/// Filter the node set down to one chapter's view.
///
/// A node is kept if its normalized chapter ordinal equals `current_chapter`,
/// or if it is a chapter-transition node whose `next_chapter` is strictly
/// greater than `current_chapter`.
pub fn partition_nodes(nodes: &[FlowNode], current_chapter: i64) -> Vec<FlowNode> {
    nodes
        .iter()
        .filter(|node| {
            node.chapter == Some(current_chapter)
                || (node.is_chapter_transition()
                    && node
                        .data
                        .next_chapter
                        .is_some_and(|next| next > current_chapter))
        })
        .cloned()
        .collect()
}

/// Keep only edges whose source and target both survive the node filter.
pub fn partition_edges(edges: &[FlowEdge], visible_nodes: &[FlowNode]) -> Vec<FlowEdge> {
    let visible: HashSet<&str> = visible_nodes.iter().map(|n| n.id.as_str()).collect();
    edges
        .iter()
        .filter(|edge| visible.contains(edge.source.as_str()) && visible.contains(edge.target.as_str()))
        .cloned()
        .collect()
}

/// Partition the full node/edge sets into one chapter's view.
pub fn partition(
    nodes: &[FlowNode],
    edges: &[FlowEdge],
    current_chapter: i64,
) -> (Vec<FlowNode>, Vec<FlowEdge>) {
    let visible_nodes = partition_nodes(nodes, current_chapter);
    let visible_edges = partition_edges(edges, &visible_nodes);
    (visible_nodes, visible_edges)
}

/// The ordinal reached by the "previous chapter" control, if any.
///
/// Chapters are 1-based; there is nothing before chapter 1.
///
/// # Examples
///
/// ```
/// use codepath_core::services::previous_chapter;
///
/// assert_eq!(previous_chapter(3), Some(2));
/// assert_eq!(previous_chapter(1), None);
/// ```
pub fn previous_chapter(current_chapter: i64) -> Option<i64> {
    (current_chapter > 1).then(|| current_chapter - 1)
}

// Comprehensive tests in separate module
#[cfg(test)]
#[path = "partition_test.rs"]
mod partition_test;
