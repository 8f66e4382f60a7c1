//! Node records and their renderable form
//!
//! The backend stores nodes in a denormalized shape: positions as strings,
//! chapter ordinals as strings or numbers, and edges as parent pointers on
//! the child row. [`NodeRecord`] mirrors that shape; [`FlowNode`] is the
//! normalized form handed to the canvas widget.
//!
//! All defaulting happens in [`FlowNode::from_record`]: unparsable positions
//! become `0.0`, unknown icon keys become no icon, absent parent sides become
//! bottom. A malformed field never fails the transformation.

use serde::{Deserialize, Serialize};

use crate::models::icon::IconKey;
use crate::models::ordinal;

/// Canvas template discriminator for an ordinary roadmap node.
pub const NODE_KIND_ROADMAP: &str = "roadmapNode";

/// Canvas template discriminator for a chapter-transition circle.
///
/// Activating a node of this kind advances the displayed chapter to the
/// node's `next_chapter` ordinal instead of showing lesson content.
pub const NODE_KIND_CHAPTER_TRANSITION: &str = "chapterChangeCircle";

/// Raw node row as returned by the backend.
///
/// Field types follow the stored shape, not the renderable one: `pos_x` and
/// `pos_y` are strings, `chapter` and `next_chapter` are string-or-number
/// ordinals (normalized to `i64` during deserialization), and `parent_side` /
/// `tail_type` are free-form strings validated later.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub roadmap_id: String,
    pub title: String,
    /// Canvas template discriminator, passed through verbatim.
    pub node_type: String,
    /// Semantic type (required / optional / project); affects border style.
    #[serde(default, rename = "type")]
    pub semantic_type: Option<String>,
    #[serde(default)]
    pub estimated_time: Option<String>,
    #[serde(default, deserialize_with = "ordinal::de_opt_ordinal")]
    pub chapter: Option<i64>,
    #[serde(default)]
    pub pos_x: Option<String>,
    #[serde(default)]
    pub pos_y: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub parent_node_id: Option<String>,
    #[serde(default)]
    pub parent_side: Option<String>,
    #[serde(default)]
    pub tail_color: Option<String>,
    #[serde(default)]
    pub tail_type: Option<String>,
    #[serde(default, deserialize_with = "ordinal::de_opt_ordinal")]
    pub next_chapter: Option<i64>,
}

/// Side of the parent node an edge exits from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentSide {
    Top,
    Left,
    Right,
    #[default]
    Bottom,
}

impl ParentSide {
    /// Parse a stored side value; absent or unrecognized values default to
    /// [`ParentSide::Bottom`].
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("top") => Self::Top,
            Some("left") => Self::Left,
            Some("right") => Self::Right,
            Some("bottom") => Self::Bottom,
            _ => Self::Bottom,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
        }
    }
}

/// Dash styling of the connecting line into a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TailKind {
    #[default]
    Solid,
    Dashed,
}

impl TailKind {
    /// Parse a stored tail type; anything other than `"dashed"` is solid.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dashed") => Self::Dashed,
            _ => Self::Solid,
        }
    }
}

/// 2-D canvas position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Display metadata carried alongside a renderable node.
///
/// Serialized in the camelCase shape the canvas widget consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub title: String,
    #[serde(rename = "type")]
    pub semantic_type: Option<String>,
    pub estimated_time: Option<String>,
    pub icon: Option<IconKey>,
    pub color: Option<String>,
    pub next_chapter: Option<i64>,
    pub parent_node_id: Option<String>,
    pub parent_side: ParentSide,
    pub tail_color: Option<String>,
    #[serde(rename = "tailType")]
    pub tail_kind: TailKind,
}

/// Renderable node handed to the canvas widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowNode {
    pub id: String,
    pub roadmap_id: String,
    /// Verbatim `node_type` from the record; the widget uses it to pick a
    /// visual template.
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Position,
    pub chapter: Option<i64>,
    pub data: NodeData,
}

impl FlowNode {
    /// Transform a raw record into its renderable form.
    ///
    /// Never fails: positions default to `0.0` per axis on parse failure,
    /// unknown icon keys resolve to no icon, and the kind discriminator is
    /// carried through verbatim.
    pub fn from_record(record: NodeRecord) -> Self {
        let position = Position {
            x: parse_coordinate(record.pos_x.as_deref()),
            y: parse_coordinate(record.pos_y.as_deref()),
        };
        let icon = record.icon.as_deref().and_then(IconKey::resolve);
        let parent_side = ParentSide::parse(record.parent_side.as_deref());
        let tail_kind = TailKind::parse(record.tail_type.as_deref());

        Self {
            id: record.id,
            roadmap_id: record.roadmap_id,
            kind: record.node_type,
            position,
            chapter: record.chapter,
            data: NodeData {
                title: record.title,
                semantic_type: record.semantic_type,
                estimated_time: record.estimated_time,
                icon,
                color: record.color,
                next_chapter: record.next_chapter,
                parent_node_id: record.parent_node_id,
                parent_side,
                tail_color: record.tail_color,
                tail_kind,
            },
        }
    }

    /// Whether activating this node advances the displayed chapter.
    pub fn is_chapter_transition(&self) -> bool {
        self.kind == NODE_KIND_CHAPTER_TRANSITION
    }
}

/// Parse a stored coordinate string, defaulting to `0.0` on absence or
/// parse failure.
fn parse_coordinate(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}
