//! Lines the resilient reader skipped.
//!
//! ```
//! use ontopath_jsonl::Warning;
//!
//! let warning = Warning::SkippedLine {
//!     line_number: 7,
//!     reason: "invalid UTF-8".to_string(),
//! };
//! assert_eq!(warning.line_number(), 7);
//! assert_eq!(warning.to_string(), "line 7: skipped: invalid UTF-8");
//! ```

use std::fmt;

/// A line that produced no record.
///
/// Line numbers are physical and 1-based, so blank lines count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The line is valid text but not a record of the requested type.
    MalformedJson {
        /// Line number
        line_number: usize,
        /// Parser message
        error: String,
    },

    /// The line could not be decoded at all.
    SkippedLine {
        /// Line number
        line_number: usize,
        /// Why the line was dropped
        reason: String,
    },
}

impl Warning {
    /// Line the warning refers to.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedJson { line_number, .. } | Self::SkippedLine { line_number, .. } => {
                *line_number
            }
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedJson { line_number, error } => {
                write!(f, "line {line_number}: malformed JSON: {error}")
            }
            Self::SkippedLine {
                line_number,
                reason,
            } => write!(f, "line {line_number}: skipped: {reason}"),
        }
    }
}

impl std::error::Error for Warning {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_display_includes_parser_message() {
        let warning = Warning::MalformedJson {
            line_number: 3,
            error: "expected value".to_string(),
        };
        assert_eq!(warning.to_string(), "line 3: malformed JSON: expected value");
        assert_eq!(warning.line_number(), 3);
    }
}
