//! The playable dictionary
//!
//! An immutable, ordered, non-empty list of words. It is both the sampling
//! pool for targets and the validity set for guesses.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use std::path::Path;

/// Error type for dictionaries that cannot be used for play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// No valid 5-letter words were supplied
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Dictionary contains no valid 5-letter words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Fixed word list with O(1) membership checks
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    ///
    /// Duplicates are dropped, keeping the first occurrence's position.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        let mut lookup = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| lookup.insert(w.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, lookup })
    }

    /// Build a dictionary from raw strings, skipping invalid entries
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no entry is a valid word.
    pub fn from_slice(slice: &[&str]) -> Result<Self, DictionaryError> {
        Self::new(loader::words_from_slice(slice))
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the embedded list was built empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_slice(WORDS)
    }

    /// Load a dictionary from a word-per-line file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let words = loader::load_from_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to read word list {}: {e}", path.display()))?;
        Ok(Self::new(words)?)
    }

    /// Check whether `word` is playable
    ///
    /// The comparison is exact: callers normalize case first.
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty dictionary cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at position `index`
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn sample(&self, index: usize) -> &Word {
        &self.words[index]
    }

    /// All words in their original order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_keeps_every_word() {
        let dictionary = Dictionary::embedded().unwrap();
        assert_eq!(dictionary.len(), WORDS_COUNT);
        assert!(dictionary.contains("crane"));
        assert!(dictionary.contains("sassy"));
        assert!(!dictionary.contains("zzzzz"));
    }

    #[test]
    fn from_slice_skips_invalid_and_duplicates() {
        let dictionary = Dictionary::from_slice(&["crane", "CRANE", "oops", "slate"]).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.sample(0).text(), "crane");
        assert_eq!(dictionary.sample(1).text(), "slate");
    }

    #[test]
    fn empty_dictionary_rejected() {
        assert_eq!(
            Dictionary::from_slice(&[]).unwrap_err(),
            DictionaryError::Empty
        );
        assert_eq!(
            Dictionary::from_slice(&["toolong", "abc"]).unwrap_err(),
            DictionaryError::Empty
        );
    }

    #[test]
    fn contains_is_case_sensitive() {
        let dictionary = Dictionary::from_slice(&["crane"]).unwrap();
        assert!(dictionary.contains("crane"));
        assert!(!dictionary.contains("CRANE"));
    }

    #[test]
    fn from_file_rejects_file_without_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "# nothing here\n\n").unwrap();

        assert!(Dictionary::from_file(&path).is_err());
    }
}
