//! # Adjacency Evaluator
//!
//! Pure predicates deciding whether two words are one ladder step apart.
//!
//! Two relations are defined, both only between words of equal length:
//!
//! | Relation | Example | Test |
//! |----------|---------|------|
//! | Substitution | `cat → cot` | exactly one position differs |
//! | Anagram | `pot → top` | same multiset of characters |
//!
//! Length is measured in `char`s, not bytes, so `"né"` and `"ne"` are both
//! two long. Nothing here allocates for words up to [`INLINE_WORD_LEN`]
//! characters.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Words up to this many chars are decoded without touching the heap.
pub const INLINE_WORD_LEN: usize = 16;

/// A word decoded into chars.
pub type CharBuf = SmallVec<[char; INLINE_WORD_LEN]>;

/// The relation joining two adjacent words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Exactly one character position differs.
    Substitution,
    /// Same characters, different order.
    Anagram,
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::Substitution => f.write_str("substitution"),
            Relation::Anagram => f.write_str("anagram"),
        }
    }
}

// ============================================================================
// String predicates
// ============================================================================

/// True iff `a` and `b` are one substitution apart or anagrams of each other.
pub fn is_adjacent(a: &str, b: &str) -> bool {
    is_one_substitution(a, b) || is_anagram(a, b)
}

/// True iff `a` and `b` have the same length and differ in exactly one
/// character position. Identical words are *not* one substitution apart.
pub fn is_one_substitution(a: &str, b: &str) -> bool {
    let mut left = a.chars();
    let mut right = b.chars();
    let mut mismatches = 0usize;
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    mismatches += 1;
                    if mismatches > 1 {
                        return false;
                    }
                }
            }
            (None, None) => return mismatches == 1,
            // lengths differ
            _ => return false,
        }
    }
}

/// True iff `a` and `b` contain the same multiset of characters.
pub fn is_anagram(a: &str, b: &str) -> bool {
    canonical_form(a) == canonical_form(b)
}

/// Classify the edge between `a` and `b`, if there is one.
///
/// The relations cannot overlap: replacing one character always changes the
/// multiset, so a pair is never both.
pub fn relation(a: &str, b: &str) -> Option<Relation> {
    if is_one_substitution(a, b) {
        Some(Relation::Substitution)
    } else if a != b && is_anagram(a, b) {
        Some(Relation::Anagram)
    } else {
        None
    }
}

/// Sorted chars of `word`: equal for two words iff they are anagrams.
pub fn canonical_form(word: &str) -> CharBuf {
    let mut chars = decode(word);
    chars.sort_unstable();
    chars
}

/// Decode `word` into chars.
pub fn decode(word: &str) -> CharBuf {
    word.chars().collect()
}

// ============================================================================
// Slice predicates (pre-decoded words, used by the graph builder)
// ============================================================================

/// [`is_one_substitution`] over decoded chars.
pub fn chars_one_substitution(a: &[char], b: &[char]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut mismatches = 0usize;
    for (x, y) in a.iter().zip(b) {
        if x != y {
            mismatches += 1;
            if mismatches > 1 {
                return false;
            }
        }
    }
    mismatches == 1
}

/// Adjacency over decoded chars plus their canonical (sorted) forms.
pub fn chars_adjacent(a: &[char], a_sorted: &[char], b: &[char], b_sorted: &[char]) -> bool {
    chars_one_substitution(a, b) || a_sorted == b_sorted
}

// ============================================================================
// Tests
// ============================================================================
