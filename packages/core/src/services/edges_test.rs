//! Tests for edge synthesis
//!
//! Covers the synthesis invariants: one edge per resolvable parent pointer,
//! dangling pointers dropped, deterministic output, and tail styling taken
//! from the child row.

#[cfg(test)]
mod tests {
    use crate::models::{FlowNode, NodeRecord, ParentSide, NODE_KIND_ROADMAP};
    use crate::services::edges::synthesize_edges;

    fn node(id: &str, parent: Option<&str>) -> FlowNode {
        FlowNode::from_record(NodeRecord {
            id: id.to_string(),
            roadmap_id: "r1".to_string(),
            title: format!("Node {id}"),
            node_type: NODE_KIND_ROADMAP.to_string(),
            chapter: Some(1),
            parent_node_id: parent.map(str::to_string),
            ..Default::default()
        })
    }

    #[test]
    fn one_edge_per_resolvable_parent_pointer() {
        let nodes = vec![
            node("a", None),
            node("b", Some("a")),
            node("c", Some("a")),
            node("d", Some("b")),
        ];

        let edges = synthesize_edges(&nodes);

        assert_eq!(edges.len(), 3);
        let pairs: Vec<(&str, &str)> = edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "b"), ("a", "c"), ("b", "d")]);
    }

    #[test]
    fn parentless_nodes_contribute_no_edges() {
        let nodes = vec![node("a", None), node("b", None)];
        assert!(synthesize_edges(&nodes).is_empty());
    }

    #[test]
    fn dangling_parent_pointer_is_dropped() {
        // C points at Z, which is not in the loaded set; only A->B survives.
        let nodes = vec![node("a", None), node("b", Some("a")), node("c", Some("z"))];

        let edges = synthesize_edges(&nodes);

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].source, "a");
        assert_eq!(edges[0].target, "b");
    }

    #[test]
    fn synthesis_is_deterministic() {
        let nodes = vec![node("a", None), node("b", Some("a")), node("c", Some("b"))];

        let first = synthesize_edges(&nodes);
        let second = synthesize_edges(&nodes);

        assert_eq!(first, second);
        assert_eq!(first[0].id, "ea-b");
        assert_eq!(first[1].id, "eb-c");
    }

    #[test]
    fn tail_styling_comes_from_child_row() {
        let nodes = vec![
            node("a", None),
            FlowNode::from_record(NodeRecord {
                id: "b".to_string(),
                roadmap_id: "r1".to_string(),
                title: "Node b".to_string(),
                node_type: NODE_KIND_ROADMAP.to_string(),
                parent_node_id: Some("a".to_string()),
                parent_side: Some("right".to_string()),
                tail_color: Some("blue".to_string()),
                tail_type: Some("dashed".to_string()),
                ..Default::default()
            }),
        ];

        let edges = synthesize_edges(&nodes);
        assert_eq!(edges.len(), 1);

        let edge = &edges[0];
        assert_eq!(edge.source_handle, ParentSide::Right);
        assert_eq!(edge.style.stroke, "#3b82f6");
        assert_eq!(edge.style.stroke_dasharray.as_deref(), Some("5,5"));
        assert_eq!(edge.marker_end.color, "#3b82f6");
    }

    #[test]
    fn default_styling_is_solid_black_from_bottom() {
        let nodes = vec![node("a", None), node("b", Some("a"))];

        let edges = synthesize_edges(&nodes);
        let edge = &edges[0];

        assert_eq!(edge.source_handle, ParentSide::Bottom);
        assert_eq!(edge.style.stroke, "#000000");
        assert_eq!(edge.style.stroke_dasharray, None);
        assert_eq!(edge.style.stroke_width, 2.0);
    }

    #[test]
    fn unknown_tail_color_passes_through() {
        let nodes = vec![
            node("a", None),
            FlowNode::from_record(NodeRecord {
                id: "b".to_string(),
                roadmap_id: "r1".to_string(),
                title: "Node b".to_string(),
                node_type: NODE_KIND_ROADMAP.to_string(),
                parent_node_id: Some("a".to_string()),
                tail_color: Some("#ff8800".to_string()),
                ..Default::default()
            }),
        ];

        let edges = synthesize_edges(&nodes);
        assert_eq!(edges[0].style.stroke, "#ff8800");
    }
}
