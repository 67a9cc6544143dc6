//! Path — the sequence of words from start to end.

use serde::Serialize;
use crate::adjacency::{self, Relation};

/// A ladder: `start → … → end`, each consecutive pair adjacent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    /// Words along the path. Never empty.
    words: Vec<String>,
}

/// One step of a path, annotated with the relation that allows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step<'p> {
    pub from: &'p str,
    pub to: &'p str,
    pub relation: Option<Relation>,
}

impl Path {
    pub fn single(word: impl Into<String>) -> Self {
        Self { words: vec![word.into()] }
    }

    /// Build from words in start-to-end order. Returns `None` for an empty
    /// sequence, which is not a path.
    pub fn from_words(words: Vec<String>) -> Option<Self> {
        if words.is_empty() { None } else { Some(Self { words }) }
    }

    /// Number of steps (words minus one).
    pub fn len(&self) -> usize {
        self.words.len() - 1
    }

    /// True for the single-word path from a word to itself.
    pub fn is_empty(&self) -> bool {
        self.words.len() == 1
    }

    pub fn start(&self) -> &str {
        self.words.first().expect("Path always has at least one word")
    }

    pub fn end(&self) -> &str {
        self.words.last().expect("Path always has at least one word")
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Consecutive pairs with their relation.
    pub fn steps(&self) -> impl Iterator<Item = Step<'_>> + '_ {
        self.words.windows(2).map(|pair| Step {
            from: &pair[0],
            to: &pair[1],
            relation: adjacency::relation(&pair[0], &pair[1]),
        })
    }

    /// True when every step is joined by a relation.
    pub fn is_valid(&self) -> bool {
        self.steps().all(|s| s.relation.is_some())
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.words.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single() {
        let p = Path::single("a");
        assert_eq!(p.len(), 0);
        assert!(p.is_empty());
        assert_eq!(p.start(), "a");
        assert_eq!(p.end(), "a");
        assert_eq!(p.steps().count(), 0);
    }

    #[test]
    fn test_from_words_rejects_empty() {
        assert!(Path::from_words(Vec::new()).is_none());
    }

    #[test]
    fn test_steps_carry_relation() {
        let p = Path::from_words(vec!["cot".into(), "pot".into(), "top".into()]).unwrap();
        let rels: Vec<_> = p.steps().map(|s| s.relation).collect();
        assert_eq!(rels, vec![Some(Relation::Substitution), Some(Relation::Anagram)]);
        assert!(p.is_valid());
        assert_eq!(p.to_string(), "cot -> pot -> top");
    }

    #[test]
    fn test_invalid_step_detected() {
        let p = Path::from_words(vec!["cat".into(), "dog".into()]).unwrap();
        assert!(!p.is_valid());
    }
}
