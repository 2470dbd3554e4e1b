//! Error types for ontopath operations.
//!
//! Construction-time anomalies (dangling parent or relation references) are
//! absorbed by the graph builder and never surface here. Query-time failures
//! carry the offending term identifier.

use crate::domain::TermId;
use std::io;
use thiserror::Error;

/// The error type for ontopath operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization or parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A query named a term that is not in the graph.
    #[error("Unknown term: {0}")]
    UnknownTerm(TermId),

    /// Level assignment found a directed cycle through this term.
    #[error("Graph contains a cycle through term {0}")]
    CyclicGraph(TermId),

    /// A caller-supplied node order is not a topological order of the graph.
    #[error("Invalid topological order: {0}")]
    InvalidOrder(String),
}

impl From<ontopath_jsonl::Error> for Error {
    fn from(err: ontopath_jsonl::Error) -> Self {
        match err {
            ontopath_jsonl::Error::Io(io_err) => Error::Io(io_err),
            ontopath_jsonl::Error::Json(json_err) => Error::Json(json_err),
        }
    }
}

/// A specialized Result type for ontopath operations.
pub type Result<T> = std::result::Result<T, Error>;
