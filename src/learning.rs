// File: src/learning.rs
use crate::core::dictionary::Dictionary;
use tracing::trace;

/// Applies training tokens to a dictionary. Confidence is the raw
/// occurrence count, so every token adds exactly one.
#[derive(Debug, Default)]
pub struct LearningEngine;

impl LearningEngine {
    pub fn new() -> Self {
        Self
    }

    /// Splits a passage on runs of whitespace. Leading and trailing
    /// whitespace never produce empty tokens.
    pub fn tokenize(passage: &str) -> impl Iterator<Item = &str> {
        passage.split_whitespace()
    }

    /// Counts one occurrence of `token`, creating its entry on first sight,
    /// and returns the updated frequency. A token without word characters
    /// (e.g. `"--"`) is stored under the empty key like any other.
    pub fn learn(&self, dictionary: &mut Dictionary, token: &str) -> u64 {
        let entry = dictionary.get_or_create(token);
        if entry.frequency() == 0 {
            trace!(key = entry.key(), "new word");
        }
        entry.increment();
        entry.frequency()
    }
}
