//! # Path Finder
//!
//! Bounded breadth-first search over a frozen [`WordGraph`].
//!
//! Every query owns its frontier and its visited map; nothing is written to
//! the graph, so any number of searches may run against the same graph at
//! once without locking.
//!
//! ```text
//! NOT_STARTED ──▶ SEARCHING ──┬──▶ Found
//!                             ├──▶ Exhausted
//!                             ├──▶ DepthExceeded
//!                             └──▶ Cancelled
//! ```

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use hashbrown::HashMap;

use crate::config::{DEFAULT_MAX_DISTANCE, LadderConfig};
use crate::graph::WordGraph;
use crate::model::{NodeId, Path};

// ============================================================================
// Cancellation
// ============================================================================

/// Cooperative cancellation flag shared between a caller and its searches.
///
/// A search checks the flag once per dequeued node.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// How a search ended. Only [`Found`](SearchOutcome::Found) carries a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Path),
    /// The start word is not in the graph.
    UnknownStart,
    /// The end word is not in the graph.
    UnknownEnd,
    /// The start word's whole component was visited without meeting the end.
    Exhausted { visited: usize },
    /// The frontier reached `max_distance` before the end word was found.
    DepthExceeded { max_distance: usize, visited: usize },
    Cancelled,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// The path's words, or an empty vector for every other outcome.
    pub fn into_words(self) -> Vec<String> {
        self.into_path().map(Path::into_words).unwrap_or_default()
    }
}

// ============================================================================
// PathFinder
// ============================================================================

/// Per-node bookkeeping of a single search.
#[derive(Debug, Clone, Copy)]
struct Visit {
    distance: usize,
    predecessor: Option<NodeId>,
}

/// Shortest-path query builder over a borrowed graph.
#[derive(Debug, Clone)]
pub struct PathFinder<'g> {
    graph: &'g WordGraph,
    max_distance: usize,
    cancel: Option<CancelToken>,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g WordGraph) -> Self {
        Self { graph, max_distance: DEFAULT_MAX_DISTANCE, cancel: None }
    }

    pub fn with_config(graph: &'g WordGraph, config: &LadderConfig) -> Self {
        Self::new(graph).with_max_distance(config.max_distance)
    }

    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Find a shortest path from `start` to `end`.
    ///
    /// Checked in order: unknown start, unknown end, `start == end` (the
    /// single-word path, whatever the bound), then bounded BFS.
    pub fn search(&self, start: &str, end: &str) -> SearchOutcome {
        let Some(start_id) = self.graph.id_of(start) else {
            tracing::debug!(start, end, "unknown start word");
            return SearchOutcome::UnknownStart;
        };
        let Some(end_id) = self.graph.id_of(end) else {
            tracing::debug!(start, end, "unknown end word");
            return SearchOutcome::UnknownEnd;
        };
        if start_id == end_id {
            return SearchOutcome::Found(Path::single(start));
        }

        let outcome = self.bfs(start_id, end_id);
        match &outcome {
            SearchOutcome::Found(path) => {
                tracing::debug!(start, end, steps = path.len(), "path found");
            }
            other => tracing::debug!(start, end, max_distance = self.max_distance, outcome = ?other, "no path"),
        }
        outcome
    }

    fn bfs(&self, start: NodeId, end: NodeId) -> SearchOutcome {
        let mut visited: HashMap<NodeId, Visit> = HashMap::new();
        visited.insert(start, Visit { distance: 0, predecessor: None });
        let mut frontier: VecDeque<(NodeId, usize)> = VecDeque::from([(start, 0)]);

        while let Some((current, distance)) = frontier.pop_front() {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                return SearchOutcome::Cancelled;
            }
            // FIFO order: everything still queued is at least this far out.
            if distance >= self.max_distance {
                return SearchOutcome::DepthExceeded {
                    max_distance: self.max_distance,
                    visited: visited.len(),
                };
            }

            for &next in self.graph.node(current).neighbors() {
                if visited.contains_key(&next) {
                    continue;
                }
                visited.insert(next, Visit { distance: distance + 1, predecessor: Some(current) });
                if next == end {
                    return SearchOutcome::Found(self.reconstruct(&visited, end));
                }
                frontier.push_back((next, distance + 1));
            }
        }

        SearchOutcome::Exhausted { visited: visited.len() }
    }

    /// Follow predecessors back from `end`, then reverse.
    fn reconstruct(&self, visited: &HashMap<NodeId, Visit>, end: NodeId) -> Path {
        let mut words = Vec::with_capacity(visited.get(&end).map_or(1, |v| v.distance + 1));
        let mut cursor = Some(end);
        while let Some(id) = cursor {
            words.push(self.graph.node(id).word().to_owned());
            cursor = visited.get(&id).and_then(|v| v.predecessor);
        }
        words.reverse();
        Path::from_words(words).unwrap_or_else(|| Path::single(self.graph.node(end).word()))
    }
}

/// Shortest path of at most `max_distance` steps, or an empty vector.
pub fn compute_path(graph: &WordGraph, start: &str, end: &str, max_distance: usize) -> Vec<String> {
    graph.compute_path(start, end, max_distance)
}

// ============================================================================
// Tests
// ============================================================================
