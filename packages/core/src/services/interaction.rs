//! Click dispatch
//!
//! The canvas widget reports clicks with the clicked node. The consuming UI
//! inspects the kind discriminator to decide between advancing the displayed
//! chapter and showing a transient node-detail overlay; this module owns
//! that decision so the UI never reads raw node fields.

use crate::models::FlowNode;

/// What the UI should do with a clicked node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeActivation {
    /// Switch the displayed chapter to this ordinal and reload.
    AdvanceChapter(i64),
    /// Show the transient detail overlay for the clicked node.
    ShowDetail,
}

impl NodeActivation {
    /// Interpret a widget click.
    ///
    /// A chapter-transition node with a usable `next_chapter` advances the
    /// chapter; everything else, including a transition node whose ordinal
    /// is missing, shows detail.
    pub fn from_node(node: &FlowNode) -> Self {
        if node.is_chapter_transition() {
            if let Some(next) = node.data.next_chapter {
                return Self::AdvanceChapter(next);
            }
        }
        Self::ShowDetail
    }
}
