//! Tests for chapter partitioning
//!
//! Covers the node filter (chapter membership plus forward-pointing
//! transition nodes), the endpoint invariant on edges, and the previous
//! chapter control.

#[cfg(test)]
mod tests {
    use crate::models::{
        FlowNode, NodeRecord, NODE_KIND_CHAPTER_TRANSITION, NODE_KIND_ROADMAP,
    };
    use crate::services::edges::synthesize_edges;
    use crate::services::partition::{partition, partition_nodes, previous_chapter};

    fn chapter_node(id: &str, chapter: i64, parent: Option<&str>) -> FlowNode {
        FlowNode::from_record(NodeRecord {
            id: id.to_string(),
            roadmap_id: "r1".to_string(),
            title: format!("Node {id}"),
            node_type: NODE_KIND_ROADMAP.to_string(),
            chapter: Some(chapter),
            parent_node_id: parent.map(str::to_string),
            ..Default::default()
        })
    }

    fn transition_node(id: &str, chapter: i64, next_chapter: i64) -> FlowNode {
        FlowNode::from_record(NodeRecord {
            id: id.to_string(),
            roadmap_id: "r1".to_string(),
            title: format!("To chapter {next_chapter}"),
            node_type: NODE_KIND_CHAPTER_TRANSITION.to_string(),
            chapter: Some(chapter),
            next_chapter: Some(next_chapter),
            ..Default::default()
        })
    }

    #[test]
    fn keeps_current_chapter_and_forward_transitions() {
        // D belongs to chapter 2, E advances to chapter 3, F belongs to
        // chapter 3 with no transition role.
        let nodes = vec![
            chapter_node("d", 2, None),
            transition_node("e", 3, 3),
            chapter_node("f", 3, None),
        ];

        let visible = partition_nodes(&nodes, 2);
        let ids: Vec<&str> = visible.iter().map(|n| n.id.as_str()).collect();

        assert_eq!(ids, vec!["d", "e"]);
    }

    #[test]
    fn backward_transition_nodes_are_excluded() {
        let nodes = vec![chapter_node("a", 2, None), transition_node("back", 1, 2)];

        let visible = partition_nodes(&nodes, 2);
        let ids: Vec<&str> = visible.iter().map(|n| n.id.as_str()).collect();

        // The transition points at the current chapter, not past it.
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn nodes_without_chapter_are_excluded() {
        let orphan = FlowNode::from_record(NodeRecord {
            id: "orphan".to_string(),
            roadmap_id: "r1".to_string(),
            title: "No chapter".to_string(),
            node_type: NODE_KIND_ROADMAP.to_string(),
            ..Default::default()
        });

        assert!(partition_nodes(&[orphan], 1).is_empty());
    }

    #[test]
    fn edges_never_span_a_filtered_out_node() {
        // B (chapter 1) descends from A (chapter 1); C (chapter 2) descends
        // from B. Viewing chapter 1 must keep A->B and drop B->C.
        let nodes = vec![
            chapter_node("a", 1, None),
            chapter_node("b", 1, Some("a")),
            chapter_node("c", 2, Some("b")),
        ];
        let edges = synthesize_edges(&nodes);
        assert_eq!(edges.len(), 2);

        let (visible_nodes, visible_edges) = partition(&nodes, &edges, 1);

        assert_eq!(visible_nodes.len(), 2);
        assert_eq!(visible_edges.len(), 1);
        assert_eq!(visible_edges[0].source, "a");
        assert_eq!(visible_edges[0].target, "b");

        // Every surviving edge endpoint is a surviving node.
        for edge in &visible_edges {
            assert!(visible_nodes.iter().any(|n| n.id == edge.source));
            assert!(visible_nodes.iter().any(|n| n.id == edge.target));
        }
    }

    #[test]
    fn previous_chapter_is_gated_at_one() {
        assert_eq!(previous_chapter(1), None);
        assert_eq!(previous_chapter(2), Some(1));
        assert_eq!(previous_chapter(10), Some(9));
        assert_eq!(previous_chapter(0), None);
    }
}
