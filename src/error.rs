// src/error.rs
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid value for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, CompletionError>;
