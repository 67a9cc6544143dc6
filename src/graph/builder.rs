//! Build phase: the only place edges are ever added.
//!
//! Words are bucketed by char length as they arrive. A new word is compared
//! against the nodes already in its bucket and nothing else, since neither
//! relation can join words of different lengths. Total work is
//! `Σ n_len²` adjacency tests instead of `n²`.

use hashbrown::HashMap;

use crate::adjacency::{self, CharBuf};
use crate::model::{Node, NodeId};
use super::WordGraph;

/// A node under construction: decoded once, compared many times.
struct PendingNode {
    word: Box<str>,
    chars: CharBuf,
    sorted: CharBuf,
    neighbors: Vec<NodeId>,
}

impl PendingNode {
    fn new(word: &str) -> Self {
        let chars = adjacency::decode(word);
        let mut sorted = chars.clone();
        sorted.sort_unstable();
        Self { word: word.into(), chars, sorted, neighbors: Vec::new() }
    }

    fn adjacent_to(&self, other: &PendingNode) -> bool {
        adjacency::chars_adjacent(&self.chars, &self.sorted, &other.chars, &other.sorted)
    }
}

/// Mutable graph under construction. [`finish`](Self::finish) consumes it and
/// returns the frozen [`WordGraph`].
#[derive(Default)]
pub struct WordGraphBuilder {
    nodes: Vec<PendingNode>,
    index: HashMap<Box<str>, NodeId>,
    /// char length → ids already created for that length
    by_length: HashMap<usize, Vec<NodeId>>,
    adjacency_tests: u64,
}

impl WordGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(words: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(words),
            index: HashMap::with_capacity(words),
            by_length: HashMap::new(),
            adjacency_tests: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add `word`, linking it to every adjacent word already in its length
    /// bucket. Inserting a word twice returns the existing id.
    pub fn insert(&mut self, word: &str) -> NodeId {
        if let Some(&id) = self.index.get(word) {
            return id;
        }

        let id = self.push_unlinked(word);
        let len = self.nodes[id.index()].chars.len();
        let bucket = self.by_length.entry(len).or_default();

        for &other in bucket.iter() {
            self.adjacency_tests += 1;
            if self.nodes[id.index()].adjacent_to(&self.nodes[other.index()]) {
                self.nodes[id.index()].neighbors.push(other);
                self.nodes[other.index()].neighbors.push(id);
            }
        }
        bucket.push(id);
        id
    }

    /// Insert every word of `words`.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Create the node without comparing it against its bucket.
    fn push_unlinked(&mut self, word: &str) -> NodeId {
        let id = NodeId(
            u32::try_from(self.nodes.len()).expect("word graph exceeds u32::MAX nodes"),
        );
        let node = PendingNode::new(word);
        self.index.insert(node.word.clone(), id);
        self.nodes.push(node);
        id
    }

    /// Freeze every neighbor list and hand the graph over for querying.
    pub fn finish(self) -> WordGraph {
        let buckets = self.by_length.len();
        let nodes: Vec<Node> = self
            .nodes
            .into_iter()
            .enumerate()
            .map(|(i, pending)| {
                let mut neighbors = pending.neighbors;
                neighbors.sort_unstable();
                neighbors.dedup();
                Node::frozen(NodeId(i as u32), pending.word, neighbors.into_boxed_slice())
            })
            .collect();

        let graph = WordGraph::from_parts(nodes, self.index);
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            buckets,
            adjacency_tests = self.adjacency_tests,
            "word graph built"
        );
        graph
    }
}

// ============================================================================
// Parallel build
// ============================================================================

#[cfg(feature = "parallel")]
impl WordGraphBuilder {
    /// Build `words` with each length bucket compared on the rayon pool.
    ///
    /// Buckets never share an edge, so the result is identical to the
    /// sequential build over the same words.
    pub fn build_parallel<I, S>(words: I) -> WordGraph
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        use rayon::prelude::*;

        let mut builder = Self::new();
        for word in words {
            let word = word.as_ref();
            if builder.index.contains_key(word) {
                continue;
            }
            let id = builder.push_unlinked(word);
            let len = builder.nodes[id.index()].chars.len();
            builder.by_length.entry(len).or_default().push(id);
        }

        let nodes = &builder.nodes;
        let buckets: Vec<(&usize, &Vec<NodeId>)> = builder.by_length.iter().collect();
        let edges: Vec<(Vec<(NodeId, NodeId)>, u64)> = buckets
            .into_par_iter()
            .map(|(len, bucket)| {
                let mut found = Vec::new();
                let mut tests = 0u64;
                for (i, &a) in bucket.iter().enumerate() {
                    for &b in &bucket[..i] {
                        tests += 1;
                        if nodes[a.index()].adjacent_to(&nodes[b.index()]) {
                            found.push((a, b));
                        }
                    }
                }
                tracing::trace!(len, words = bucket.len(), edges = found.len(), "bucket compared");
                (found, tests)
            })
            .collect();

        for (found, tests) in edges {
            builder.adjacency_tests += tests;
            for (a, b) in found {
                builder.nodes[a.index()].neighbors.push(b);
                builder.nodes[b.index()].neighbors.push(a);
            }
        }
        builder.finish()
    }
}
