//! # Word Graph
//!
//! Undirected graph with one node per distinct word and an edge between
//! every adjacent pair.
//!
//! Construction and querying are split at the type level:
//!
//! | Phase | Type | Mutability |
//! |-------|------|------------|
//! | Build | [`WordGraphBuilder`] | edges added as words arrive |
//! | Query | [`WordGraph`] | none; `Send + Sync`, shared by reference |
//!
//! A `WordGraph` has no methods that take `&mut self`, so once
//! [`WordGraphBuilder::finish`] returns, the neighbor sets cannot change.

pub mod builder;

use hashbrown::HashMap;
use serde::Serialize;

use crate::config::LadderConfig;
use crate::model::{Node, NodeId};
use crate::search::PathFinder;

pub use builder::WordGraphBuilder;

/// Frozen word graph, ready for concurrent queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGraph {
    /// Node table; `NodeId(i)` is `nodes[i]`.
    nodes: Vec<Node>,
    /// word → node id
    index: HashMap<Box<str>, NodeId>,
}

/// Summary counts for a built graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    /// Distinct word lengths.
    pub length_buckets: usize,
    /// `(length, words)` of the most populated bucket.
    pub largest_bucket: Option<(usize, usize)>,
    /// Words with no neighbor at all.
    pub isolated: usize,
}

impl WordGraph {
    /// Build a graph from `words` sequentially. Duplicates collapse.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = WordGraphBuilder::new();
        builder.extend(words);
        builder.finish()
    }

    /// Build honoring `config.parallel_build` when the `parallel` feature is
    /// compiled in.
    pub fn build_with<I, S>(config: &LadderConfig, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if config.parallel_build {
            Self::build_parallel(words)
        } else {
            Self::build(words)
        }
    }

    #[cfg(feature = "parallel")]
    fn build_parallel<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        WordGraphBuilder::build_parallel(words)
    }

    #[cfg(not(feature = "parallel"))]
    fn build_parallel<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tracing::warn!("parallel_build requested but the `parallel` feature is not enabled");
        Self::build(words)
    }

    pub(crate) fn from_parts(nodes: Vec<Node>, index: HashMap<Box<str>, NodeId>) -> Self {
        Self { nodes, index }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn id_of(&self, word: &str) -> Option<NodeId> {
        self.index.get(word).copied()
    }

    pub fn get(&self, word: &str) -> Option<&Node> {
        self.id_of(word).map(|id| self.node(id))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Node for `id`.
    ///
    /// # Panics
    /// If `id` was not issued by this graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Words adjacent to `word`, or `None` if `word` is not in the graph.
    pub fn neighbors(&self, word: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let node = self.get(word)?;
        Some(node.neighbors().iter().map(|&id| self.node(id).word()))
    }

    /// Every word, in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(Node::word)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum::<usize>() / 2
    }

    pub fn stats(&self) -> GraphStats {
        let mut buckets: HashMap<usize, usize> = HashMap::new();
        for node in &self.nodes {
            *buckets.entry(node.len()).or_default() += 1;
        }
        let largest_bucket = buckets
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(&len, &count)| (len, count));

        GraphStats {
            nodes: self.node_count(),
            edges: self.edge_count(),
            length_buckets: buckets.len(),
            largest_bucket,
            isolated: self.nodes.iter().filter(|n| n.degree() == 0).count(),
        }
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Shortest path from `start` to `end` of at most `max_distance` steps,
    /// or an empty vector if there is none.
    pub fn compute_path(&self, start: &str, end: &str, max_distance: usize) -> Vec<String> {
        PathFinder::new(self)
            .with_max_distance(max_distance)
            .search(start, end)
            .into_words()
    }
}

// ============================================================================
// Tests
// ============================================================================
