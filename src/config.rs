// File: src/config.rs
// Runtime settings for the menu binary, read from a JSON file. Every field
// has a default, so `{}` is a valid config.

use crate::error::{CompletionError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable naming a config file when no path argument is given.
pub const CONFIG_ENV_VAR: &str = "AUTOCOMPLETE_CONFIG";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompletionConfig {
    /// Cap on printed matches; `None` prints all of them.
    pub max_suggestions: Option<usize>,
    /// Print matches as a JSON array instead of `word (n), ...`.
    pub json_output: bool,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            max_suggestions: None,
            json_output: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CompletionConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| CompletionError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<()> {
        if self.max_suggestions == Some(0) {
            return Err(CompletionError::InvalidConfig {
                field: "max_suggestions",
                reason: "must be at least 1 (omit it to show every match)".to_string(),
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(CompletionError::InvalidConfig {
                field: "log_filter",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
