//! Property tests: adjacency symmetry, path validity, shortest-path
//! optimality and the depth bound, checked against an exhaustive reference
//! search over random small dictionaries.

use std::collections::{HashMap, HashSet, VecDeque};

use proptest::prelude::*;
use word_ladder::{WordGraph, is_adjacent};

// ============================================================================
// Reference: all-pairs adjacency, unbounded BFS, no length bucketing.
// ============================================================================

fn reference_distance(words: &[String], start: &str, end: &str) -> Option<usize> {
    let mut dist: HashMap<&str, usize> = HashMap::new();
    dist.insert(start, 0);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let d = dist[current];
        if current == end {
            return Some(d);
        }
        for next in words {
            let next = next.as_str();
            if next != current && is_adjacent(current, next) && !dist.contains_key(next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

fn dictionary() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[abc]{1,3}", 1..24)
        .prop_map(|set: HashSet<String>| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn adjacency_is_symmetric(a in "[abcd]{0,5}", b in "[abcd]{0,5}") {
        prop_assert_eq!(is_adjacent(&a, &b), is_adjacent(&b, &a));
    }

    #[test]
    fn unequal_lengths_are_never_adjacent(a in "[ab]{0,4}", b in "[ab]{0,4}") {
        prop_assume!(a.len() != b.len());
        prop_assert!(!is_adjacent(&a, &b));
    }

    #[test]
    fn graph_edges_are_symmetric(words in dictionary()) {
        let graph = WordGraph::build(&words);
        for node in graph.nodes() {
            for &other in node.neighbors() {
                prop_assert!(graph.node(other).is_neighbor(node.id()));
                prop_assert!(is_adjacent(node.word(), graph.node(other).word()));
            }
        }
    }

    #[test]
    fn identity_path(words in dictionary()) {
        let graph = WordGraph::build(&words);
        for w in &words {
            prop_assert_eq!(graph.compute_path(w, w, 10), vec![w.clone()]);
        }
    }

    #[test]
    fn unknown_words_yield_nothing(words in dictionary(), stranger in "[xyz]{1,3}") {
        let graph = WordGraph::build(&words);
        for w in &words {
            prop_assert!(graph.compute_path(&stranger, w, 10).is_empty());
            prop_assert!(graph.compute_path(w, &stranger, 10).is_empty());
        }
    }

    #[test]
    fn paths_are_valid_and_shortest(words in dictionary(), max_distance in 0usize..6) {
        let graph = WordGraph::build(&words);
        for a in &words {
            for b in &words {
                let path = graph.compute_path(a, b, max_distance);
                let expected = reference_distance(&words, a, b);

                if a == b {
                    prop_assert_eq!(path.len(), 1);
                    continue;
                }
                match expected {
                    Some(d) if d <= max_distance => {
                        prop_assert_eq!(path.len(), d + 1, "{} -> {}", a, b);
                        prop_assert_eq!(&path[0], a);
                        prop_assert_eq!(path.last().unwrap(), b);
                        for pair in path.windows(2) {
                            prop_assert!(is_adjacent(&pair[0], &pair[1]));
                        }
                    }
                    // unreachable, or only beyond the bound
                    _ => prop_assert!(path.is_empty(), "{} -> {}: {:?}", a, b, path),
                }
            }
        }
    }
}
