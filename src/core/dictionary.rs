// File: src/core/dictionary.rs
use crate::core::types::WordEntry;
use crate::error::{CompletionError, Result};
use std::collections::BTreeMap;
use std::ops::Bound;

/// Sorts after every character a normalized key can contain (`[0-9_a-z]`).
/// Appending it to a fragment gives the exclusive upper bound of a prefix range.
const SENTINEL: char = '{';

/// Derives the dictionary key for a word: ASCII-lowercased with everything
/// outside `[A-Za-z0-9_]` removed.
///
/// An absent word is a contract violation and fails with `InvalidArgument`.
pub fn normalize(word: Option<&str>) -> Result<String> {
    word.map(normalize_str)
        .ok_or(CompletionError::InvalidArgument("cannot normalize an absent word"))
}

pub(crate) fn normalize_str(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// An ordered index of learned words supporting exact lookup and prefix
/// retrieval.
///
/// Prefix search is a contiguous range scan over plain lexicographic order:
/// every key starting with `p` lies in `[p, p + SENTINEL)`.
/// O(log n + k) for k matches.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: BTreeMap<String, WordEntry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an entry under its normalized key, replacing any entry already
    /// there. An absent entry is ignored.
    pub fn put(&mut self, entry: Option<WordEntry>) {
        if let Some(entry) = entry {
            self.words.insert(entry.key().to_string(), entry);
        }
    }

    /// Exact lookup, ignoring case and punctuation.
    pub fn get(&self, word: Option<&str>) -> Result<Option<&WordEntry>> {
        let key = normalize(word)?;
        Ok(self.words.get(&key))
    }

    /// Finds the entry for `word`, creating a zero-frequency one on first
    /// sight. The word is normalized once.
    pub fn get_or_create(&mut self, word: &str) -> &mut WordEntry {
        self.words
            .entry(normalize_str(word))
            .or_insert_with_key(|key| WordEntry::with_key(key.clone(), word))
    }

    /// All entries whose key starts with the lowercased fragment, in
    /// ascending key order. Returns `None` for an absent fragment.
    ///
    /// The fragment is case-folded but *not* stripped of punctuation, so a
    /// fragment like `"don'"` matches nothing.
    pub fn match_prefix(&self, fragment: Option<&str>) -> Option<Vec<&WordEntry>> {
        let lower = fragment?.to_ascii_lowercase();
        let mut upper = lower.clone();
        upper.push(SENTINEL);

        let matches = self
            .words
            .range::<str, _>((Bound::Included(lower.as_str()), Bound::Excluded(upper.as_str())))
            .map(|(_, entry)| entry)
            .collect();
        Some(matches)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.words.values()
    }

    /// Sum of all frequencies, i.e. the number of tokens learned so far.
    pub fn total_occurrences(&self) -> u64 {
        self.words.values().map(WordEntry::frequency).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict_of(words: &[&str]) -> Dictionary {
        let mut dict = Dictionary::new();
        for word in words {
            dict.put(Some(WordEntry::new(word)));
        }
        dict
    }

    fn keys(entries: Option<Vec<&WordEntry>>) -> Vec<&str> {
        entries.unwrap_or_default().into_iter().map(WordEntry::key).collect()
    }

    #[test]
    fn normalize_strips_and_lowercases() {
        assert_eq!(normalize(Some("Hello, World!")).unwrap(), "helloworld");
        assert_eq!(normalize(Some("snake_case-2")).unwrap(), "snake_case2");
        assert_eq!(normalize(Some("Émile")).unwrap(), "mile");
        assert_eq!(normalize(Some("")).unwrap(), "");
    }

    #[test]
    fn normalize_rejects_absent_word() {
        assert!(matches!(normalize(None), Err(CompletionError::InvalidArgument(_))));
    }

    #[test]
    fn get_ignores_case_and_punctuation() {
        let dict = dict_of(&["Dog."]);
        let entry = dict.get(Some("DOG")).unwrap().unwrap();
        assert_eq!(entry.key(), "dog");
        assert!(dict.get(Some("do")).unwrap().is_none());
        assert!(dict.get(None).is_err());
    }

    #[test]
    fn put_overwrites_and_ignores_absent() {
        let mut dict = Dictionary::new();
        let mut first = WordEntry::new("the");
        first.increment();
        dict.put(Some(first));
        dict.put(Some(WordEntry::new("The")));
        dict.put(None);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get(Some("the")).unwrap().unwrap().frequency(), 0);
    }

    #[test]
    fn get_or_create_reuses_existing_entry() {
        let mut dict = Dictionary::new();
        dict.get_or_create("Dog.").increment();
        dict.get_or_create("dog").increment();
        assert_eq!(dict.len(), 1);

        let entry = dict.get(Some("DOG")).unwrap().unwrap();
        assert_eq!(entry.key(), "dog");
        assert_eq!(entry.surface(), "dog.");
        assert_eq!(entry.frequency(), 2);
    }

    #[test]
    fn total_occurrences_sums_frequencies() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.total_occurrences(), 0);
        for word in ["a", "b", "A", "--"] {
            dict.get_or_create(word).increment();
        }
        assert_eq!(dict.total_occurrences(), 4);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn match_prefix_is_alphabetical_and_bounded() {
        let dict = dict_of(&["their", "the", "this", "tea", "thz", "u", "th_x", "th9"]);
        assert_eq!(
            keys(dict.match_prefix(Some("TH"))),
            vec!["th9", "th_x", "the", "their", "this", "thz"]
        );
        assert_eq!(keys(dict.match_prefix(Some("the"))), vec!["the", "their"]);
        assert!(keys(dict.match_prefix(Some("thexyz"))).is_empty());
    }

    #[test]
    fn match_prefix_does_not_strip_fragment() {
        let dict = dict_of(&["dont"]);
        assert!(keys(dict.match_prefix(Some("don'"))).is_empty());
        assert_eq!(keys(dict.match_prefix(Some("don"))), vec!["dont"]);
    }

    #[test]
    fn match_prefix_absent_and_empty_fragment() {
        let dict = dict_of(&["b", "a"]);
        assert!(dict.match_prefix(None).is_none());
        assert_eq!(keys(dict.match_prefix(Some(""))), vec!["a", "b"]);
    }
}
