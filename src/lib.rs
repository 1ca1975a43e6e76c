// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod learning;
pub mod shared;

pub use crate::core::dictionary::{normalize, Dictionary};
pub use crate::core::engine::{AutocompleteEngine, AutocompleteProvider};
pub use crate::core::types::{Candidate, WordEntry};
pub use crate::error::{CompletionError, Result};
pub use crate::shared::SharedEngine;
