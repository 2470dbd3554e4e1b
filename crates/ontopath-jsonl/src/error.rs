//! Error types for ontopath-jsonl operations.

use std::io;
use thiserror::Error;

/// The error type for ontopath-jsonl operations.
///
/// Only failures of the underlying reader are errors. Bad lines are
/// reported as [`Warning`](crate::Warning)s.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ontopath-jsonl operations.
pub type Result<T> = std::result::Result<T, Error>;
