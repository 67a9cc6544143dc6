//! # word-ladder-rs — Shortest Word Ladders
//!
//! Finds a shortest chain of dictionary words from a start word to an end
//! word, where every step is either a single-letter substitution
//! (`cold → cord`) or an anagram (`pot → top`).
//!
//! ## Design Principles
//!
//! 1. **Build once, query many**: `WordGraphBuilder` is the only mutable phase;
//!    `WordGraph` is frozen and shared by reference
//! 2. **Query-local state**: BFS bookkeeping never touches the graph
//! 3. **Length buckets**: adjacency is only ever tested within one word length
//! 4. **Bounded search**: no path longer than `max_distance` is explored
//!
//! ## Quick Start
//!
//! ```rust
//! use word_ladder::{LadderConfig, WordLadder};
//!
//! let ladder = WordLadder::new(["cold", "cord", "card", "ward", "warm"], LadderConfig::default());
//! let path = ladder.compute_path("cold", "warm");
//! assert_eq!(path, vec!["cold", "cord", "card", "ward", "warm"]);
//!
//! assert!(ladder.compute_path("cold", "hot").is_empty());
//! ```
//!
//! ## Modules
//!
//! | Module | Role |
//! |--------|------|
//! | `adjacency` | substitution / anagram predicates |
//! | `graph` | length-bucketed construction, frozen graph |
//! | `search` | bounded BFS, cancellation |
//! | `corpus` | line-delimited word list loader |
//! | `config` | depth bound and build options |

// ============================================================================
// Modules
// ============================================================================

pub mod adjacency;
pub mod config;
pub mod corpus;
pub mod graph;
pub mod model;
pub mod search;

// ============================================================================
// Re-exports
// ============================================================================

pub use adjacency::{Relation, is_adjacent, is_anagram, is_one_substitution};
pub use config::{DEFAULT_MAX_DISTANCE, LadderConfig};
pub use corpus::Corpus;
pub use graph::{GraphStats, WordGraph, WordGraphBuilder};
pub use model::{Node, NodeId, Path, Step};
pub use search::{CancelToken, PathFinder, SearchOutcome, compute_path};

// ============================================================================
// Top-level WordLadder handle
// ============================================================================

/// The primary entry point: a built graph plus the configuration queries
/// run with.
#[derive(Debug, Clone)]
pub struct WordLadder {
    graph: WordGraph,
    config: LadderConfig,
}

impl WordLadder {
    /// Build the graph for `words` under `config`.
    pub fn new<I, S>(words: I, config: LadderConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let graph = WordGraph::build_with(&config, words);
        Self { graph, config }
    }

    /// Load a word list file and build its graph.
    pub fn from_file(path: impl AsRef<std::path::Path>, config: LadderConfig) -> Result<Self> {
        let corpus = Corpus::load(path)?;
        Ok(Self::new(&corpus, config))
    }

    /// Shortest path under the configured bound, or an empty vector.
    pub fn compute_path(&self, start: &str, end: &str) -> Vec<String> {
        self.search(start, end).into_words()
    }

    /// Shortest path under the configured bound, with the reason when there
    /// is none.
    pub fn search(&self, start: &str, end: &str) -> SearchOutcome {
        self.finder().search(start, end)
    }

    /// A path finder preconfigured with this ladder's bound.
    pub fn finder(&self) -> PathFinder<'_> {
        PathFinder::with_config(&self.graph, &self.config)
    }

    pub fn graph(&self) -> &WordGraph {
        &self.graph
    }

    pub fn config(&self) -> &LadderConfig {
        &self.config
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot load word list {}: {source}", .path.display())]
    CorpusLoad {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read configuration {}: {source}", .path.display())]
    ConfigLoad {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Malformed configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
