// File: src/shared.rs
use crate::core::engine::{AutocompleteEngine, AutocompleteProvider};
use crate::core::types::Candidate;
use parking_lot::RwLock;
use std::sync::Arc;

/// A cloneable handle to one engine shared between threads.
///
/// Training takes the write lock; searches and lookups share the read lock.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<AutocompleteEngine>>,
}

impl SharedEngine {
    pub fn new(engine: AutocompleteEngine) -> Self {
        Self { inner: Arc::new(RwLock::new(engine)) }
    }

    pub fn train(&self, passage: Option<&str>) {
        self.inner.write().train(passage);
    }

    pub fn search(&self, fragment: Option<&str>) -> Vec<Candidate> {
        self.inner.read().search(fragment)
    }

    pub fn search_top(&self, fragment: Option<&str>, limit: usize) -> Vec<Candidate> {
        self.inner.read().search_top(fragment, limit)
    }

    pub fn frequency(&self, word: &str) -> u64 {
        self.inner.read().frequency(word)
    }
}

impl AutocompleteProvider for SharedEngine {
    fn train(&mut self, passage: Option<&str>) {
        SharedEngine::train(self, passage)
    }

    fn search(&self, fragment: Option<&str>) -> Vec<Candidate> {
        SharedEngine::search(self, fragment)
    }
}
