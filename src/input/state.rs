//! Interaction state machine - unified state management for canvas input.
//!
//! One tagged union replaces the scattered boolean/nullable flags a naive
//! implementation accumulates, making impossible combinations (dragging
//! while panning, two simultaneous modal modes) unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingNode     (primary press on a node card)
//! Idle -> Panning          (middle press anywhere, or Alt+primary on empty canvas)
//! Idle -> Connecting       (link affordance clicked)
//! Idle -> Disconnecting    (secondary press on a node card)
//!
//! DraggingNode -> Idle     (release commits the ghost position)
//! Panning      -> Idle     (release keeps the pan offset)
//! Connecting   -> Idle     (second endpoint chosen, or cancel)
//! Disconnecting -> Idle    (second secondary press, or cancel)
//! ```
//!
//! `Connecting` and `Disconnecting` are modal: they persist across discrete
//! clicks instead of following continuous pointer motion.

use crate::types::{NodeId, Point};

/// Current canvas interaction mode. Exactly one is active at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum InteractionState {
    /// No active interaction.
    #[default]
    Idle,

    /// A node card follows the pointer; position commits on release.
    DraggingNode {
        node_id: NodeId,
        /// Offset from the card's top-left corner to the grab point, in
        /// world units, so the card does not snap to the cursor.
        grab_offset: Point,
    },

    /// The canvas follows the pointer.
    Panning {
        /// Last screen position, for delta calculation.
        last_pos: Point,
    },

    /// Picking connection endpoints through link clicks.
    Connecting {
        /// First endpoint, once chosen.
        source: Option<NodeId>,
    },

    /// Next secondary press on a node removes the connection targeting it.
    Disconnecting { target_hint: NodeId },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingNode { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, Self::Connecting { .. })
    }

    pub fn is_disconnecting(&self) -> bool {
        matches!(self, Self::Disconnecting { .. })
    }

    /// Id of the node being dragged, if any.
    pub fn dragged_node(&self) -> Option<&NodeId> {
        match self {
            Self::DraggingNode { node_id, .. } => Some(node_id),
            _ => None,
        }
    }

    /// Chosen first endpoint while connecting, if any.
    pub fn connecting_source(&self) -> Option<&NodeId> {
        match self {
            Self::Connecting { source } => source.as_ref(),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_dragging(&mut self, node_id: NodeId, grab_offset: Point) {
        *self = Self::DraggingNode {
            node_id,
            grab_offset,
        };
    }

    pub fn start_panning(&mut self, last_pos: Point) {
        *self = Self::Panning { last_pos };
    }

    /// Update the last pointer position while panning.
    pub fn update_last_pos(&mut self, pos: Point) {
        if let Self::Panning { last_pos } = self {
            *last_pos = pos;
        }
    }
}
