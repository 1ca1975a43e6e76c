// File: src/core/engine.rs
use crate::core::dictionary::Dictionary;
use crate::core::types::Candidate;
use crate::learning::LearningEngine;
use std::cmp::Reverse;
use tracing::{debug, debug_span};

/// The public contract of a completion provider: learn from passages and
/// complete fragments. Neither operation fails; absent input is a no-op or an
/// empty result.
pub trait AutocompleteProvider {
    /// Trains the provider with every whitespace-separated word in `passage`.
    fn train(&mut self, passage: Option<&str>);

    /// All known words starting with `fragment`, highest confidence first.
    fn search(&self, fragment: Option<&str>) -> Vec<Candidate>;
}

/// Frequency-ranked word completion over an in-memory dictionary.
#[derive(Debug, Default)]
pub struct AutocompleteEngine {
    dictionary: Dictionary,
    learning_engine: LearningEngine,
}

impl AutocompleteEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn train(&mut self, passage: Option<&str>) {
        let Some(passage) = passage else {
            return;
        };
        let _span = debug_span!("train").entered();

        let mut learned = 0usize;
        for token in LearningEngine::tokenize(passage) {
            self.learning_engine.learn(&mut self.dictionary, token);
            learned += 1;
        }
        debug!(
            learned,
            vocabulary = self.dictionary.len(),
            total = self.dictionary.total_occurrences(),
            "trained passage"
        );
    }

    pub fn search(&self, fragment: Option<&str>) -> Vec<Candidate> {
        let Some(matches) = self.dictionary.match_prefix(fragment) else {
            return Vec::new();
        };

        let mut candidates: Vec<Candidate> = matches.into_iter().map(Candidate::from).collect();
        rank(&mut candidates);
        debug!(fragment = ?fragment, count = candidates.len(), "search");
        candidates
    }

    /// Get the top `limit` completions for `fragment`.
    pub fn search_top(&self, fragment: Option<&str>, limit: usize) -> Vec<Candidate> {
        let mut candidates = self.search(fragment);
        candidates.truncate(limit);
        candidates
    }

    /// Frequency of an exact word (ignoring case and punctuation), 0 if unknown.
    pub fn frequency(&self, word: &str) -> u64 {
        self.dictionary
            .get(Some(word))
            .ok()
            .flatten()
            .map_or(0, |entry| entry.frequency())
    }

    pub fn vocabulary_size(&self) -> usize {
        self.dictionary.len()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

impl AutocompleteProvider for AutocompleteEngine {
    fn train(&mut self, passage: Option<&str>) {
        AutocompleteEngine::train(self, passage)
    }

    fn search(&self, fragment: Option<&str>) -> Vec<Candidate> {
        AutocompleteEngine::search(self, fragment)
    }
}

/// Confidence descending; equal confidences fall back to alphabetical order
/// so results are reproducible.
fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        Reverse(a.confidence)
            .cmp(&Reverse(b.confidence))
            .then_with(|| a.word.cmp(&b.word))
    });
}
