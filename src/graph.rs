//! The dialogue graph model - nodes, connections, and validated mutations.
//!
//! All graph state is owned here and mutated only through the operations
//! below; the interaction layer and the property-editing collaborator both
//! go through this surface. A spatial index over node cards is kept in sync
//! with every mutation so hit testing stays O(log n).

use crate::constants::CLONE_SUFFIX;
use crate::spatial_index::SpatialIndex;
use crate::types::{Answer, Connection, ConnectionId, DialogueNode, NodeId, Point, new_id};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during graph operations.
///
/// Nothing here is fatal: validation rejections leave the graph untouched
/// and are surfaced to the user, parse failures preserve the current graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The target node opens the conversation and may not be linked to.
    #[error("Cannot connect to a node that starts a conversation")]
    StarterTarget,

    /// A connection with the same (from, to) pair already exists.
    #[error("Connection already exists")]
    DuplicateConnection,

    /// An endpoint of the requested connection does not exist.
    #[error("Node not found: {0}")]
    MissingNode(NodeId),

    /// A node with an incoming connection cannot become a starter.
    #[error("\"{0}\" is the target of a connection and cannot start a conversation")]
    StarterHasIncoming(String),

    /// Export requires at least one node marked as conversation starter.
    #[error("No node starts a conversation; mark a starter before exporting")]
    NoStarterNode,

    /// Export requires every node to be reachable through a connection.
    #[error("\"{0}\" is not connected to any other node")]
    IsolatedNode(String),

    /// Import document failed to parse.
    #[error("Invalid dialogue file: {0}")]
    Parse(#[from] serde_json::Error),

    /// IO error from std::io.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Owns the dialogue nodes and connections.
#[derive(Default)]
pub struct DialogueGraph {
    nodes: Vec<DialogueNode>,
    connections: Vec<Connection>,
    spatial: SpatialIndex,
}

impl DialogueGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Read access ====================

    pub fn nodes(&self) -> &[DialogueNode] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn get_node(&self, id: &str) -> Option<&DialogueNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn get_node_mut(&mut self, id: &str) -> Option<&mut DialogueNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn get_connection(&self, id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    /// First connection whose target is the given node. The disconnect
    /// gesture removes exactly this one.
    pub fn find_connection_to(&self, target: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.to == target)
    }

    /// Whether any node is marked as conversation starter.
    pub fn has_starter(&self) -> bool {
        self.nodes.iter().any(|n| n.starts_conversation)
    }

    /// Topmost node card containing the given world-space point. Nodes
    /// later in insertion order render on top and win ties.
    pub fn hit_test(&self, world: Point) -> Option<NodeId> {
        let candidates = self.spatial.query_point(world.x, world.y);
        self.nodes
            .iter()
            .rev()
            .find(|n| candidates.iter().any(|id| *id == n.id))
            .map(|n| n.id.clone())
    }

    // ==================== Mutations ====================

    /// Create a new question node at the given world position.
    pub fn add_node_at(&mut self, position: Point) -> NodeId {
        let node = DialogueNode::new("Question Node", position);
        let id = node.id.clone();
        debug!(node = %id, x = position.x, y = position.y, "node added");
        self.index_node(&node);
        self.nodes.push(node);
        id
    }

    /// Insert a fully built node (import and clone paths).
    pub fn insert_node(&mut self, node: DialogueNode) {
        self.index_node(&node);
        self.nodes.push(node);
    }

    /// Remove a node and every connection touching it. Clears nothing else;
    /// the editor handles selection. Deleting an unknown id is a no-op.
    pub fn delete_node(&mut self, id: &str) {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return;
        }
        self.connections.retain(|c| !c.touches(id));
        self.spatial.remove(id);
        debug!(node = %id, "node deleted");
    }

    /// Deep-copy a node: suffixed title, offset position, freshly id'd
    /// answers. Consequence references are dropped on the copies since they
    /// may point at graph-specific ids that would become misleading.
    /// Returns `None` when the id does not exist.
    pub fn clone_node(&mut self, id: &str, offset: f32) -> Option<NodeId> {
        let original = self.get_node(id)?;

        let mut clone = original.clone();
        clone.id = new_id();
        clone.title = format!("{}{}", original.title, CLONE_SUFFIX);
        clone.position = Point::new(original.position.x + offset, original.position.y + offset);
        for answer in &mut clone.data.answers {
            answer.id = new_id();
            answer.consequences = None;
        }

        let clone_id = clone.id.clone();
        debug!(node = %id, clone = %clone_id, "node cloned");
        self.insert_node(clone);
        Some(clone_id)
    }

    pub fn update_title(&mut self, id: &str, title: impl Into<String>) {
        if let Some(node) = self.get_node_mut(id) {
            node.title = title.into();
        }
    }

    pub fn update_question_text(&mut self, id: &str, text: Option<String>) {
        if let Some(node) = self.get_node_mut(id) {
            node.data.question_text = text;
        }
    }

    pub fn set_remove_after_asked(&mut self, id: &str, value: bool) {
        if let Some(node) = self.get_node_mut(id) {
            node.remove_question_after_asked = value;
        }
    }

    /// Mark or unmark a node as conversation starter. Marking is rejected
    /// while a connection targets the node, which would otherwise break the
    /// starter invariant.
    pub fn set_starts_conversation(&mut self, id: &str, value: bool) -> GraphResult<()> {
        if value && self.connections.iter().any(|c| c.to == id) {
            let title = self.get_node(id).map(|n| n.title.clone()).unwrap_or_default();
            warn!(node = %id, "starter flag rejected: node has incoming connection");
            return Err(GraphError::StarterHasIncoming(title));
        }
        if let Some(node) = self.get_node_mut(id) {
            node.starts_conversation = value;
        }
        Ok(())
    }

    /// Wholesale answer replacement; every answer-level edit goes through
    /// here. The card grows with the answer list, so the spatial entry is
    /// refreshed too.
    pub fn replace_answers(&mut self, id: &str, answers: Vec<Answer>) {
        if let Some(node) = self.get_node_mut(id) {
            node.data.answers = answers;
            let entry = (node.id.clone(), (node.position.x, node.position.y), node.card_size());
            self.spatial.update(entry.0, entry.1, entry.2);
        }
    }

    /// Move a node to a new world position (drag commit path).
    pub fn set_position(&mut self, id: &str, position: Point) {
        if let Some(node) = self.get_node_mut(id) {
            node.position = position;
            let entry = (node.id.clone(), (position.x, position.y), node.card_size());
            self.spatial.update(entry.0, entry.1, entry.2);
        }
    }

    /// Create a directed connection. Rejected when the target starts a
    /// conversation or the (from, to) pair already exists.
    pub fn create_connection(&mut self, from: NodeId, to: NodeId) -> GraphResult<ConnectionId> {
        if self.get_node(&from).is_none() {
            return Err(GraphError::MissingNode(from));
        }
        let Some(target) = self.get_node(&to) else {
            return Err(GraphError::MissingNode(to));
        };
        if target.starts_conversation {
            warn!(from = %from, to = %to, "connection rejected: target is a starter");
            return Err(GraphError::StarterTarget);
        }
        if self.connections.iter().any(|c| c.from == from && c.to == to) {
            warn!(from = %from, to = %to, "connection rejected: duplicate");
            return Err(GraphError::DuplicateConnection);
        }

        let connection = Connection::new(from, to);
        let id = connection.id.clone();
        debug!(connection = %id, "connection created");
        self.connections.push(connection);
        Ok(id)
    }

    /// Remove a connection by id; no-op when absent.
    pub fn delete_connection(&mut self, id: &str) {
        self.connections.retain(|c| c.id != id);
    }

    /// Wholesale replacement of the entire model (import path).
    pub fn load(&mut self, nodes: Vec<DialogueNode>, connections: Vec<Connection>) {
        self.spatial.rebuild(
            nodes
                .iter()
                .map(|n| (n.id.clone(), (n.position.x, n.position.y), n.card_size())),
        );
        self.nodes = nodes;
        self.connections = connections;
        debug!(
            nodes = self.nodes.len(),
            connections = self.connections.len(),
            "graph loaded"
        );
    }

    /// Check the export preconditions: a starter exists and, when the graph
    /// has more than one node, every node is touched by a connection.
    pub fn validate_for_export(&self) -> GraphResult<()> {
        if self.nodes.is_empty() {
            return Ok(());
        }
        if !self.has_starter() {
            return Err(GraphError::NoStarterNode);
        }
        if self.nodes.len() > 1 {
            for node in &self.nodes {
                if !self.connections.iter().any(|c| c.touches(&node.id)) {
                    return Err(GraphError::IsolatedNode(node.title.clone()));
                }
            }
        }
        Ok(())
    }

    fn index_node(&mut self, node: &DialogueNode) {
        self.spatial.insert(
            node.id.clone(),
            (node.position.x, node.position.y),
            node.card_size(),
        );
    }
}
