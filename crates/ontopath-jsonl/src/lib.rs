//! Resilient JSON Lines reading.
//!
//! Reads one JSON record per line, skipping lines that cannot be decoded
//! and reporting them as [`Warning`]s instead of failing the whole load.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod reader;
pub mod warning;

pub use error::{Error, Result};
pub use reader::{read_jsonl_resilient, JsonlReader};
pub use warning::Warning;
