//! End-to-end tests for ladder queries over small hand-built dictionaries.
//!
//! Each test exercises: build graph -> bounded BFS -> path reconstruction.

use pretty_assertions::assert_eq;
use word_ladder::{LadderConfig, SearchOutcome, WordGraph, WordLadder, is_adjacent};

// ============================================================================
// Helper: the seven-word dictionary
//
//   a - b          aa - ab - bb
//                   | \  |
//                   |   ac
//                   |  /
//                   ca
// ============================================================================

fn small_ladder() -> WordLadder {
    WordLadder::new(["a", "b", "aa", "ab", "ac", "bb", "ca"], LadderConfig::default())
}

// ============================================================================
// 1. Unknown words
// ============================================================================

#[test]
fn test_no_path_to_start() {
    let ladder = small_ladder();
    assert!(ladder.compute_path("nosuchword", "b").is_empty());
    assert_eq!(ladder.search("nosuchword", "b"), SearchOutcome::UnknownStart);
}

#[test]
fn test_no_path_to_end() {
    let ladder = small_ladder();
    assert!(ladder.compute_path("a", "nosuchword").is_empty());
    assert_eq!(ladder.search("a", "nosuchword"), SearchOutcome::UnknownEnd);
}

// ============================================================================
// 2. Identity
// ============================================================================

#[test]
fn test_identity() {
    let ladder = small_ladder();
    assert_eq!(ladder.compute_path("a", "a"), vec!["a"]);
    for word in ladder.graph().words() {
        assert_eq!(ladder.compute_path(word, word), vec![word]);
    }
}

#[test]
fn test_identity_on_two_word_dictionary() {
    let ladder = WordLadder::new(["a", "b"], LadderConfig::default());
    assert_eq!(ladder.compute_path("a", "a"), vec!["a"]);
    assert!(ladder.compute_path("nosuchword", "b").is_empty());
    assert!(ladder.compute_path("a", "nosuchword").is_empty());
}

// ============================================================================
// 3. Neighbors
// ============================================================================

#[test]
fn test_neighbors() {
    let ladder = small_ladder();
    let graph = ladder.graph();
    assert!(graph.neighbors("a").unwrap().any(|w| w == "b"));
    assert!(graph.neighbors("b").unwrap().any(|w| w == "a"));
    assert!(is_adjacent("a", "b"));
}

// ============================================================================
// 4. Paths
// ============================================================================

#[test]
fn test_one_letter_path() {
    let ladder = small_ladder();
    assert_eq!(ladder.compute_path("b", "a"), vec!["b", "a"]);
    assert_eq!(ladder.compute_path("a", "b"), vec!["a", "b"]);
}

#[test]
fn test_anagram_path() {
    let ladder = small_ladder();
    assert_eq!(ladder.compute_path("ac", "ca"), vec!["ac", "ca"]);
}

#[test]
fn test_two_letter_path() {
    let ladder = small_ladder();
    assert_eq!(ladder.compute_path("aa", "bb"), vec!["aa", "ab", "bb"]);
    assert_eq!(ladder.compute_path("bb", "aa"), vec!["bb", "ab", "aa"]);
}

#[test]
fn test_disconnected() {
    let ladder = small_ladder();
    assert!(ladder.compute_path("b", "ca").is_empty());
    assert!(matches!(ladder.search("b", "ca"), SearchOutcome::Exhausted { .. }));
}

#[test]
fn test_pure_anagram_step() {
    // pot - pit - tip - top also connects them, in three steps
    let ladder = WordLadder::new(["pot", "top", "pit", "tip", "cat"], LadderConfig::default());
    assert_eq!(ladder.compute_path("pot", "top"), vec!["pot", "top"]);
}

#[test]
fn test_mixed_substitution_and_anagram_path() {
    let ladder = WordLadder::new(["cat", "cot", "cog", "god", "dog"], LadderConfig::default());
    // cat -> cot -> cog -> dog by substitution, dog -> god by anagram
    let path = ladder.search("cat", "god").into_path().unwrap();
    assert_eq!(path.words(), ["cat", "cot", "cog", "dog", "god"]);
    assert!(path.is_valid());
}

// ============================================================================
// 5. Depth bound
// ============================================================================

#[test]
fn test_depth_bound_cuts_long_ladders() {
    let words = ["cold", "cord", "card", "ward", "warm"];
    let unbounded = WordLadder::new(words, LadderConfig::default());
    assert_eq!(unbounded.compute_path("cold", "warm").len(), 5);

    let exact = WordLadder::new(words, LadderConfig::default().with_max_distance(4));
    assert_eq!(exact.compute_path("cold", "warm").len(), 5);

    let short = WordLadder::new(words, LadderConfig::default().with_max_distance(3));
    assert!(short.compute_path("cold", "warm").is_empty());
    assert!(matches!(
        short.search("cold", "warm"),
        SearchOutcome::DepthExceeded { max_distance: 3, .. }
    ));
}

#[test]
fn test_free_function_takes_explicit_bound() {
    let graph = WordGraph::build(["cold", "cord", "card", "ward", "warm"]);
    assert!(word_ladder::compute_path(&graph, "cold", "warm", 2).is_empty());
    assert_eq!(word_ladder::compute_path(&graph, "cold", "warm", 10).len(), 5);
}
