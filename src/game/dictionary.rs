//! Dictionary module for word and prefix validation
//!
//! Words are stored lowercase in an ordered set, so a prefix query is a
//! single range lookup: the first entry not less than the prefix either
//! starts with it or no entry does.
//!
//! A compact English wordlist is embedded at build time and used when no
//! word list file is configured.

use crate::error::{GhostError, Result};
use once_cell::sync::Lazy;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Bound;
use std::path::Path;
use std::sync::Arc;

/// Embedded wordlist, lowercase, one word per line
static WORDS_DATA: &str = include_str!("../../data/words.txt");

static EMBEDDED: Lazy<Arc<Dictionary>> =
    Lazy::new(|| Arc::new(Dictionary::from_words(WORDS_DATA.lines())));

/// An immutable set of lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    /// Build from any sequence of words.
    /// Words are trimmed and lowercased. Blank entries and entries with
    /// anything other than a-z (apostrophes, accents, digits) are skipped,
    /// since no such word can be spelled one letter at a time.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| is_playable_word(w))
            .collect();
        Self { words }
    }

    /// Read a newline-delimited word list.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self::from_words(lines))
    }

    /// Load a word list file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let word_list_error = |source| GhostError::WordList {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(word_list_error)?;
        let dictionary = Self::from_reader(BufReader::new(file)).map_err(word_list_error)?;

        tracing::info!(path = %path.display(), words = dictionary.len(), "loaded word list");
        Ok(dictionary)
    }

    /// The wordlist compiled into the binary.
    pub fn embedded() -> Arc<Self> {
        Arc::clone(&EMBEDDED)
    }

    /// Check if a word is in the dictionary.
    /// Case-insensitive: input is converted to lowercase before lookup.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    /// Check if any word starts with `prefix`.
    /// The empty prefix matches whenever the dictionary is non-empty.
    pub fn has_word_with_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.to_lowercase();
        let found = self.words_with_prefix(&prefix).next().is_some();
        found
    }

    /// Iterate over the words starting with `prefix`, in sorted order.
    /// `prefix` must already be lowercase.
    pub fn words_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.words
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |word| word.starts_with(prefix))
            .map(String::as_str)
    }

    /// Returns the total number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_playable_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::{Cursor, Write};

    fn small() -> Dictionary {
        Dictionary::from_words(["cat", "car", "dog"])
    }

    #[test]
    fn test_contains() {
        let dict = small();
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(!dict.contains("ca"));
        assert!(!dict.contains("cats"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_case_insensitive() {
        let dict = Dictionary::from_words(["Hello"]);
        assert!(dict.contains("hello"));
        assert!(dict.contains("HELLO"));
        assert!(dict.has_word_with_prefix("HeL"));
    }

    #[test]
    fn test_prefix_queries() {
        let dict = small();
        assert!(dict.has_word_with_prefix(""));
        assert!(dict.has_word_with_prefix("c"));
        assert!(dict.has_word_with_prefix("ca"));
        assert!(dict.has_word_with_prefix("cat"));
        assert!(!dict.has_word_with_prefix("cax"));
        assert!(!dict.has_word_with_prefix("cats"));
        assert!(!dict.has_word_with_prefix("e"));
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert!(!dict.has_word_with_prefix(""));
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_words_with_prefix_sorted() {
        let dict = small();
        let words: Vec<_> = dict.words_with_prefix("ca").collect();
        assert_eq!(words, vec!["car", "cat"]);
        assert_eq!(dict.words_with_prefix("d").count(), 1);
        assert_eq!(dict.words_with_prefix("z").count(), 0);
    }

    #[test]
    fn test_duplicates_and_blank_lines() {
        let dict = Dictionary::from_reader(Cursor::new("cat\n\nCAT\n  dog  \n")).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("dog"));
    }

    #[test]
    fn test_skips_entries_outside_a_to_z() {
        let dict = Dictionary::from_words(["don't", "naïve", "x1", "co-op", "Nap"]);
        assert_eq!(dict.len(), 1);
        assert!(dict.contains("nap"));
        assert!(!dict.contains("naïve"));
        assert!(!dict.has_word_with_prefix("don"));
        let words: Vec<_> = dict.words_with_prefix("na").collect();
        assert_eq!(words, vec!["nap"]);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ghost\ngoblin\nghoul").unwrap();

        let dict = Dictionary::from_file(file.path()).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.has_word_with_prefix("gho"));
    }

    #[test]
    fn test_missing_file_is_word_list_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        match Dictionary::from_file(&path) {
            Err(GhostError::WordList { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected WordList error, got {:?}", other),
        }
    }

    #[test]
    fn test_embedded_wordlist() {
        let dict = Dictionary::embedded();
        assert!(dict.len() > 1000, "Expected 1000+ words, got {}", dict.len());
        assert!(dict.contains("ghost"));
        assert!(dict.contains("cat"));
        assert!(dict.has_word_with_prefix("zeb"));
    }

    proptest! {
        #[test]
        fn prefix_query_matches_linear_scan(
            words in prop::collection::vec("[a-e]{1,5}", 0..20),
            prefix in "[a-e]{0,4}",
        ) {
            let dict = Dictionary::from_words(&words);
            let linear = words.iter().any(|w| w.starts_with(&prefix));
            prop_assert_eq!(dict.has_word_with_prefix(&prefix), linear);
        }
    }
}
