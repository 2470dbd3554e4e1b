//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time.

use crate::domain::TermId;

/// Validate a term identifier.
///
/// Identifiers are opaque, but an empty one or one containing whitespace is
/// almost certainly a quoting mistake on the command line.
///
/// # Errors
///
/// Returns a message for an empty identifier or one containing whitespace.
pub fn validate_term_id(s: &str) -> Result<TermId, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Term ID cannot be empty".to_string());
    }

    if s.chars().any(char::is_whitespace) {
        return Err(format!("Invalid term ID '{s}': must not contain whitespace"));
    }

    Ok(TermId::new(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("GO:0008150", "GO:0008150")]
    #[case("  GO:1  ", "GO:1")]
    #[case("A", "A")]
    fn test_validate_term_id_accepts(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate_term_id(input), Ok(TermId::new(expected)));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("GO: 1")]
    fn test_validate_term_id_rejects(#[case] input: &str) {
        assert!(validate_term_id(input).is_err());
    }
}
