//! Core types for the dialogue graph.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: nodes, answers, connections, and the world/screen point type used
//! by the viewport math.

use crate::constants::{
    ANSWER_ROW_HEIGHT, CONNECTION_ANCHOR_X, CONNECTION_ANCHOR_Y, NODE_MIN_HEIGHT, NODE_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};
use uuid::Uuid;

/// Identifier of a dialogue node.
pub type NodeId = String;

/// Identifier of an answer within a node.
pub type AnswerId = String;

/// Identifier of a connection between two nodes.
pub type ConnectionId = String;

/// Generate a fresh unique id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A 2D point, used for both world-space node positions and screen-space
/// pointer coordinates. Which space a value lives in is a matter of
/// convention at the call site; the viewport converts between them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Side effects of choosing an answer at runtime: node ids added to or
/// removed from the player's available question pool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consequences {
    #[serde(default)]
    pub questions_to_add: Vec<NodeId>,
    #[serde(default)]
    pub questions_to_remove: Vec<NodeId>,
}

impl Consequences {
    pub fn is_empty(&self) -> bool {
        self.questions_to_add.is_empty() && self.questions_to_remove.is_empty()
    }
}

/// One selectable response belonging to a node.
///
/// Answers are value-mutated wholesale: edits go through
/// [`crate::graph::DialogueGraph::replace_answers`], which swaps the node's
/// entire answer list rather than mutating entries in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: AnswerId,
    pub text: String,
    /// Integer percent. Sibling probabilities are not required to sum
    /// to 100; keeping them consistent is the author's responsibility.
    pub probability: i32,
    /// Opaque runtime reference gating this answer, shaped as four
    /// dot-joined segments (assembly.namespace.class.method). Consumed by
    /// an external runtime; never interpreted here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Marks this answer as abruptly ending the dialogue.
    #[serde(default)]
    pub ends_condition: bool,
    /// Opaque runtime reference executed when the answer is chosen, same
    /// shape as `condition`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consequences: Option<Consequences>,
}

impl Answer {
    pub fn new(text: impl Into<String>, probability: i32) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            probability,
            condition: None,
            ends_condition: false,
            action: None,
            consequences: None,
        }
    }
}

/// Split an opaque runtime reference into its four dot-joined segments.
/// Returns `None` when the string does not have exactly four segments.
/// No further interpretation happens here.
pub fn runtime_ref_segments(reference: &str) -> Option<[&str; 4]> {
    let mut parts = reference.split('.');
    let seg = [parts.next()?, parts.next()?, parts.next()?, parts.next()?];
    if parts.next().is_some() {
        return None;
    }
    Some(seg)
}

/// Payload of a dialogue node: the question text shown to the player and
/// the ordered answer list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// A question point in the dialogue graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueNode {
    pub id: NodeId,
    pub title: String,
    /// World-space position of the card's top-left corner.
    pub position: Point,
    /// A starter node opens the conversation; no connection may target it.
    #[serde(default)]
    pub starts_conversation: bool,
    /// Whether the question is removed from the pool once asked.
    #[serde(default)]
    pub remove_question_after_asked: bool,
    pub data: NodeBody,
}

impl DialogueNode {
    pub fn new(title: impl Into<String>, position: Point) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            position,
            starts_conversation: false,
            remove_question_after_asked: false,
            data: NodeBody::default(),
        }
    }

    /// Size of the node's card in world units. Width is fixed; height grows
    /// with the answer list so hit testing matches what is drawn.
    pub fn card_size(&self) -> (f32, f32) {
        let height = NODE_MIN_HEIGHT + self.data.answers.len() as f32 * ANSWER_ROW_HEIGHT;
        (NODE_WIDTH, height)
    }

    /// World-space anchor where outgoing connection curves leave the card.
    pub fn output_anchor(&self) -> Point {
        Point::new(
            self.position.x + CONNECTION_ANCHOR_X,
            self.position.y + CONNECTION_ANCHOR_Y,
        )
    }

    /// World-space anchor where incoming connection curves meet the card.
    pub fn input_anchor(&self) -> Point {
        Point::new(self.position.x, self.position.y + CONNECTION_ANCHOR_Y)
    }
}

/// Directed edge from one node to another, defining dialogue flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: ConnectionId,
    pub from: NodeId,
    pub to: NodeId,
}

impl Connection {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self {
            id: new_id(),
            from,
            to,
        }
    }

    /// Whether this connection references the given node at either end.
    pub fn touches(&self, node_id: &str) -> bool {
        self.from == node_id || self.to == node_id
    }
}
