//! Error types for parsing, planning, and materialization.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all treegen operations.
#[derive(Debug, Error)]
pub enum TreegenError {
    /// Configuration or user-input plumbing failed (logging setup, prompts)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Input could not be read from the given source
    #[error("Failed to read input from {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination root already exists and overwrite was not authorized
    #[error("Destination '{0}' already exists; pass --force or confirm overwrite")]
    DestinationExists(PathBuf),

    /// A filesystem operation failed during materialization setup
    /// (per-operation failures are collected in the report instead)
    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
