//! JSONL reading operations.
//!
//! This module provides async functionality for reading JSONL files line-by-line
//! with efficient buffering and line number tracking for error reporting.

use std::path::Path;

use serde::de::DeserializeOwned;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::error::Result;
use crate::warning::Warning;

/// Buffer size used by [`JsonlReader::new`].
const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Buffer size for whole files. Terms with large relation maps can run past
/// the default buffer in a single line.
pub const FILE_BUFFER_CAPACITY: usize = 64 * 1024;

/// Async reader for JSONL (JSON Lines) data.
///
/// `JsonlReader` wraps an async reader and provides buffered reading of JSONL
/// formatted data. It tracks line numbers to provide useful context in
/// warnings when a line cannot be decoded.
///
/// # Type Parameters
///
/// * `R` - The underlying async reader type. Must implement [`AsyncRead`] and [`Unpin`].
///
/// # Examples
///
/// ```no_run
/// use ontopath_jsonl::reader::JsonlReader;
/// use tokio::fs::File;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let file = File::open("terms.jsonl").await?;
/// let reader = JsonlReader::new(file);
/// let (records, warnings) = reader.read_resilient::<serde_json::Value>().await?;
/// # Ok(())
/// # }
/// ```
pub struct JsonlReader<R> {
    /// Buffered reader wrapping the underlying async reader.
    reader: BufReader<R>,
    /// Current line number (1-based counting, 0 before any lines are read).
    line_number: usize,
    /// Reusable byte buffer for the current line.
    buf: Vec<u8>,
}

/// Outcome of reading one physical line.
enum Line {
    /// A decodable, non-blank line.
    Text(String),
    /// A whitespace-only line.
    Blank,
    /// A line that is not valid UTF-8.
    Invalid(String),
}

impl<R: AsyncRead + Unpin> JsonlReader<R> {
    /// Creates a new `JsonlReader` wrapping the given async reader.
    ///
    /// Line numbering is 1-based: the first line read is numbered 1.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_BUFFER_CAPACITY)
    }

    /// Creates a new `JsonlReader` with a custom buffer capacity.
    #[must_use]
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buf: Vec::new(),
        }
    }

    /// Returns the current line number.
    ///
    /// Returns 0 before any lines have been read. After reading, returns the
    /// 1-based line number of the last line read.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads the next physical line, or `None` at end of input.
    async fn next_line(&mut self) -> Result<Option<Line>> {
        self.buf.clear();
        let read = self.reader.read_until(b'\n', &mut self.buf).await?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let line = match std::str::from_utf8(&self.buf) {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Line::Blank
                } else {
                    Line::Text(text.to_string())
                }
            }
            Err(e) => Line::Invalid(format!("invalid UTF-8: {e}")),
        };
        Ok(Some(line))
    }

    /// Reads every record, skipping lines that cannot be decoded.
    ///
    /// Blank lines are ignored silently. Lines that are not valid UTF-8 are
    /// reported as [`Warning::SkippedLine`], lines that are not a valid `T`
    /// as [`Warning::MalformedJson`].
    ///
    /// # Errors
    ///
    /// Only failures of the underlying reader are returned as errors.
    pub async fn read_resilient<T: DeserializeOwned>(mut self) -> Result<(Vec<T>, Vec<Warning>)> {
        let mut records = Vec::new();
        let mut warnings = Vec::new();

        while let Some(line) = self.next_line().await? {
            let line_number = self.line_number;
            match line {
                Line::Text(text) => match serde_json::from_str::<T>(&text) {
                    Ok(record) => records.push(record),
                    Err(e) => {
                        tracing::debug!(line_number, error = %e, "Skipping malformed JSONL line");
                        warnings.push(Warning::MalformedJson {
                            line_number,
                            error: e.to_string(),
                        });
                    }
                },
                Line::Blank => {}
                Line::Invalid(reason) => {
                    tracing::debug!(line_number, %reason, "Skipping undecodable JSONL line");
                    warnings.push(Warning::SkippedLine {
                        line_number,
                        reason,
                    });
                }
            }
        }

        tracing::debug!(
            records = records.len(),
            warnings = warnings.len(),
            lines = self.line_number,
            "Finished resilient JSONL read"
        );
        Ok((records, warnings))
    }
}

/// Reads a JSONL file, skipping lines that cannot be decoded.
///
/// See [`JsonlReader::read_resilient`] for the skipping rules.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened or read.
pub async fn read_jsonl_resilient<T, P>(path: P) -> Result<(Vec<T>, Vec<Warning>)>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref()).await?;
    JsonlReader::with_capacity(file, FILE_BUFFER_CAPACITY)
        .read_resilient()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Cursor;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        id: String,
    }

    #[test]
    fn new_reader_starts_at_line_zero() {
        let reader = JsonlReader::new(Cursor::new(b""));
        assert_eq!(reader.line_number(), 0);
    }

    #[tokio::test]
    async fn read_resilient_counts_blank_lines() {
        let data = Cursor::new(b"\n  \n{\"id\":\"GO:1\"}\n".to_vec());
        let mut reader = JsonlReader::new(data);

        let mut records = Vec::new();
        while let Some(line) = reader.next_line().await.unwrap() {
            if let Line::Text(text) = line {
                records.push(serde_json::from_str::<Record>(&text).unwrap());
            }
        }

        assert_eq!(
            records,
            vec![Record {
                id: "GO:1".to_string()
            }]
        );
        assert_eq!(reader.line_number(), 3);
    }

    #[tokio::test]
    async fn small_buffer_still_reads_long_lines() {
        let name = "x".repeat(1000);
        let data = Cursor::new(format!("{{\"id\":\"{name}\"}}\n").into_bytes());

        let (records, warnings) = JsonlReader::with_capacity(data, 16)
            .read_resilient::<Record>()
            .await
            .unwrap();

        assert!(warnings.is_empty());
        assert_eq!(records[0].id.len(), 1000);
    }

    #[tokio::test]
    async fn read_resilient_handles_missing_trailing_newline() {
        let data = Cursor::new(b"{\"id\":\"a\"}\n{\"id\":\"b\"}".to_vec());
        let (records, warnings) = JsonlReader::new(data)
            .read_resilient::<Record>()
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert!(warnings.is_empty());
    }

    #[tokio::test]
    async fn read_resilient_reports_invalid_utf8_as_skipped_line() {
        let mut bytes = b"{\"id\":\"a\"}\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice(b"{\"id\":\"c\"}\n");

        let (records, warnings) = JsonlReader::new(Cursor::new(bytes))
            .read_resilient::<Record>()
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], Warning::SkippedLine { .. }));
        assert_eq!(warnings[0].line_number(), 2);
    }
}
