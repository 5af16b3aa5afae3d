//! R-tree based spatial indexing for node card hit testing.
//!
//! Press events have to find the card under the cursor; the index keeps
//! that an O(log n) query instead of a scan over every node.

use crate::types::NodeId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Bounding box of one node card in world coordinates.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub node_id: NodeId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(node_id: NodeId, position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            node_id,
            min_x: position.0,
            min_y: position.1,
            max_x: position.0 + size.0,
            max_y: position.1 + size.1,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}

/// Spatial index over node cards.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<NodeId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node_id: NodeId, position: (f32, f32), size: (f32, f32)) {
        if let Some(old_entry) = self.entries.remove(&node_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(node_id.clone(), position, size);
        self.tree.insert(entry.clone());
        self.entries.insert(node_id, entry);
    }

    pub fn remove(&mut self, node_id: &str) -> bool {
        if let Some(entry) = self.entries.remove(node_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Reposition or resize an existing entry (same as insert).
    pub fn update(&mut self, node_id: NodeId, position: (f32, f32), size: (f32, f32)) {
        self.insert(node_id, position, size);
    }

    /// All node ids whose card contains the given world-space point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<NodeId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.node_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, nodes: I)
    where
        I: Iterator<Item = (NodeId, (f32, f32), (f32, f32))>,
    {
        let entries: Vec<SpatialEntry> = nodes
            .map(|(id, pos, size)| SpatialEntry::new(id, pos, size))
            .collect();

        self.entries = entries
            .iter()
            .map(|e| (e.node_id.clone(), e.clone()))
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
