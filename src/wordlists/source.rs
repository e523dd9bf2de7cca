//! Dictionary access by word length

use super::embedded::{COMMON, WORDS};
use super::loader::words_from_slice;
use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;

/// Word lengths covered by [`WordList::statistics`]
pub const STATISTICS_LENGTHS: std::ops::RangeInclusive<usize> = 3..=11;

/// Provider of dictionary words grouped by length
///
/// The advisor only reads through this trait, so tests and callers can supply
/// their own word lists.
pub trait WordSource {
    /// Every known word with `length` letters, in dictionary order
    fn words_of_length(&self, length: usize) -> &[Word];

    /// The common-word subset with `length` letters
    fn common_words_of_length(&self, length: usize) -> &[Word];

    /// Whether `word` is in the full dictionary
    fn is_known(&self, word: &Word) -> bool {
        self.words_of_length(word.len()).contains(word)
    }
}

/// Where a word list came from and how many words it holds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordListMetadata {
    pub source: String,
    pub total_words: usize,
    pub description: String,
}

/// In-memory dictionary with a common-word subset
#[derive(Debug, Clone, Default)]
pub struct WordList {
    full: FxHashMap<usize, Vec<Word>>,
    common: FxHashMap<usize, Vec<Word>>,
    known: FxHashSet<Word>,
    full_metadata: WordListMetadata,
    common_metadata: WordListMetadata,
}

impl WordList {
    /// Build a dictionary from a full list and a common subset
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    #[must_use]
    pub fn new(full: Vec<Word>, common: Vec<Word>) -> Self {
        let known: FxHashSet<Word> = full.iter().cloned().collect();
        let common = group_by_length(common);

        let full_metadata = WordListMetadata {
            source: "custom".to_string(),
            total_words: known.len(),
            description: "Full dictionary".to_string(),
        };
        let common_metadata = WordListMetadata {
            source: "custom".to_string(),
            total_words: common.values().map(Vec::len).sum(),
            description: "Common words".to_string(),
        };

        Self {
            full: group_by_length(full),
            common,
            known,
            full_metadata,
            common_metadata,
        }
    }

    /// Record where the full and common lists were loaded from
    #[must_use]
    pub fn with_sources(mut self, full: impl Into<String>, common: impl Into<String>) -> Self {
        self.full_metadata.source = full.into();
        self.common_metadata.source = common.into();
        self
    }

    /// The dictionary compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::wordlists::{WordList, WordSource};
    ///
    /// let list = WordList::embedded();
    /// assert!(list.contains("about"));
    /// assert!(list.words_of_length(5).len() > list.common_words_of_length(5).len());
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        let mut list = Self::new(words_from_slice(WORDS), words_from_slice(COMMON))
            .with_sources("embedded", "embedded");
        list.full_metadata.description = "Dictionary words of 3 to 11 letters".to_string();
        list.common_metadata.description = "Frequently used words of 3 to 11 letters".to_string();
        list
    }

    /// Whether `word` is in the full dictionary, ignoring case
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|word| self.is_known(&word))
    }

    /// Number of distinct words in the full dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.known.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    /// Metadata for the common subset or the full dictionary
    #[must_use]
    pub const fn metadata(&self, common_only: bool) -> &WordListMetadata {
        if common_only {
            &self.common_metadata
        } else {
            &self.full_metadata
        }
    }

    /// Full-dictionary word count for each length from 3 to 11
    #[must_use]
    pub fn statistics(&self) -> BTreeMap<usize, usize> {
        STATISTICS_LENGTHS
            .map(|length| (length, self.words_of_length(length).len()))
            .collect()
    }
}

impl WordSource for WordList {
    fn words_of_length(&self, length: usize) -> &[Word] {
        self.full.get(&length).map_or(&[], Vec::as_slice)
    }

    fn common_words_of_length(&self, length: usize) -> &[Word] {
        self.common.get(&length).map_or(&[], Vec::as_slice)
    }

    fn is_known(&self, word: &Word) -> bool {
        self.known.contains(word)
    }
}

fn group_by_length(words: Vec<Word>) -> FxHashMap<usize, Vec<Word>> {
    let mut seen = FxHashSet::default();
    let mut groups: FxHashMap<usize, Vec<Word>> = FxHashMap::default();

    for word in words {
        if seen.insert(word.clone()) {
            groups.entry(word.len()).or_default().push(word);
        }
    }

    groups
}
