//! Ontopath - shortest paths through an ontology.
//!
//! Given ontology terms with `is_a` parents and typed relations, this crate
//! builds two graphs over them, finds the shortest path between two terms,
//! cuts out the path's one-hop `is_a` neighborhood, and assigns each node of
//! that neighborhood a hierarchy level for display.
//!
//! The core is synchronous and free of I/O; [`loader`] and [`config`] read
//! from disk and [`output`] writes to the terminal.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod domain;
pub mod error;
pub mod graph;
pub mod layout;
pub mod loader;
pub mod query;

// Public CLI module (needed by binary)
pub mod cli;

pub mod config;
pub mod output;

pub use error::{Error, Result};
