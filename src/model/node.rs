//! Node in the word graph.

use serde::{Deserialize, Serialize};

/// Opaque node identifier: the node's slot in the graph's node table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One distinct dictionary word and the ids of its neighbors.
///
/// Neighbors are references by id, not ownership: the graph owns every node.
/// A `Node` has no mutators; it is only ever created frozen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    word: Box<str>,
    /// Sorted, deduplicated, never contains `id`.
    neighbors: Box<[NodeId]>,
}

impl Node {
    pub(crate) fn frozen(id: NodeId, word: Box<str>, neighbors: Box<[NodeId]>) -> Self {
        Self { id, word, neighbors }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Length in chars, the bucketing key used during construction.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_neighbor(&self, other: NodeId) -> bool {
        self.neighbors.binary_search(&other).is_ok()
    }
}
