// src/core/mod.rs
pub mod dictionary;
pub mod engine;
pub mod types;
