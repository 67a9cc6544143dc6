//! # Corpus loader
//!
//! Reads a line-delimited word list: one word per line, UTF-8.
//!
//! - Each line is trimmed of leading and trailing whitespace.
//! - Lines that are blank after trimming are skipped.
//! - Duplicates collapse; the first occurrence fixes the word's position.
//!
//! No other validation is done. Case is preserved, so `Cat` and `cat` are
//! different words.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashSet;

use crate::{Error, Result};

/// A deduplicated word list in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<String>,
    seen: HashSet<String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an in-memory word list.
    pub fn parse_str(text: &str) -> Self {
        let mut corpus = Self::new();
        for line in text.lines() {
            corpus.push(line);
        }
        corpus
    }

    /// Read a word list from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut corpus = Self::new();
        for line in reader.lines() {
            corpus.push(&line?);
        }
        Ok(corpus)
    }

    /// Read a word list from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let io_err = |source| Error::CorpusLoad { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(io_err)?;
        let mut corpus = Self::new();
        for line in BufReader::new(file).lines() {
            corpus.push(&line.map_err(io_err)?);
        }
        tracing::debug!(path = %path.display(), words = corpus.len(), "corpus loaded");
        Ok(corpus)
    }

    /// Trim and add one entry. Returns false if it was blank or a duplicate.
    pub fn push(&mut self, line: &str) -> bool {
        let word = line.trim();
        if word.is_empty() || self.seen.contains(word) {
            return false;
        }
        self.seen.insert(word.to_owned());
        self.words.push(word.to_owned());
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl<'c> IntoIterator for &'c Corpus {
    type Item = &'c String;
    type IntoIter = std::slice::Iter<'c, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut corpus = Self::new();
        for word in iter {
            corpus.push(word.as_ref());
        }
        corpus
    }
}
