// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::dictionary::normalize_str;

/// A learned word. This is the "value" in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    key: String,
    surface: String,
    /// Total number of times this word was seen during training.
    frequency: u64,
}

impl WordEntry {
    pub fn new(word: &str) -> Self {
        Self::with_key(normalize_str(word), word)
    }

    /// `key` must already be the normalized form of `word`.
    pub(crate) fn with_key(key: String, word: &str) -> Self {
        Self {
            key,
            surface: word.to_ascii_lowercase(),
            frequency: 0,
        }
    }

    /// The normalized dictionary key, e.g. `"dog"` for `"Dog."`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The lowercased token this entry was first created from.
    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    pub fn increment(&mut self) {
        self.frequency += 1;
    }
}

/// A ranked completion handed back to callers. It is a snapshot: later
/// training does not change a candidate that was already returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub word: String,
    pub confidence: u64,
}

impl Candidate {
    pub fn new(word: impl Into<String>, confidence: u64) -> Self {
        Self { word: word.into(), confidence }
    }
}

impl From<&WordEntry> for Candidate {
    fn from(entry: &WordEntry) -> Self {
        Self::new(entry.key(), entry.frequency())
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_normalizes_once() {
        let mut entry = WordEntry::new("Dog.");
        assert_eq!(entry.key(), "dog");
        assert_eq!(entry.surface(), "dog.");
        assert_eq!(entry.frequency(), 0);
        entry.increment();
        entry.increment();
        assert_eq!(entry.frequency(), 2);
    }

    #[test]
    fn candidate_snapshot_and_display() {
        let mut entry = WordEntry::new("cat");
        entry.increment();
        let candidate = Candidate::from(&entry);
        entry.increment();
        assert_eq!(candidate.confidence, 1);
        assert_eq!(candidate.to_string(), "cat (1)");
    }

    #[test]
    fn candidate_serializes_as_object() {
        let json = serde_json::to_string(&Candidate::new("the", 2)).unwrap();
        assert_eq!(json, r#"{"word":"the","confidence":2}"#);
    }
}
