//! Loading term records.
//!
//! The ontology file format itself is parsed elsewhere; this module reads
//! term records that have already been flattened to JSON Lines, one term per
//! line:
//!
//! ```text
//! {"id":"GO:0000002","name":"mitochondrial genome maintenance","parents":["GO:0007005"]}
//! {"id":"GO:0000011","name":"vacuole inheritance","parents":["GO:0007033"],"relationships":{"part_of":["GO:0048308"]}}
//! ```
//!
//! Loading is resilient: bad lines, duplicate identifiers, and obsolete
//! terms are dropped and reported as [`LoadWarning`]s.

use crate::domain::{Term, TermId};
use crate::error::Result;
use async_trait::async_trait;
use ontopath_jsonl::{read_jsonl_resilient, Warning as JsonlWarning};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Non-fatal problems found while loading terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A line could not be read as a term record
    ///
    /// **Effect**: the line is skipped.
    MalformedRecord {
        /// 1-based line number
        line_number: usize,
        /// Parser message
        error: String,
    },

    /// A second record used an identifier already loaded
    ///
    /// **Effect**: the later record is skipped; the first one wins.
    DuplicateTerm {
        /// The repeated identifier
        id: TermId,
    },

    /// The term is marked obsolete
    ///
    /// **Effect**: the term is skipped, so links pointing at it dangle and
    /// are dropped by the graph builder.
    ObsoleteTerm {
        /// The obsolete identifier
        id: TermId,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRecord { line_number, error } => {
                write!(f, "line {line_number}: malformed term record: {error}")
            }
            Self::DuplicateTerm { id } => write!(f, "duplicate term {id} skipped"),
            Self::ObsoleteTerm { id } => write!(f, "obsolete term {id} skipped"),
        }
    }
}

/// Terms ready for graph construction, plus what was dropped on the way.
#[derive(Debug, Clone, Default)]
pub struct LoadedTerms {
    /// Unique, non-obsolete terms in input order
    pub terms: Vec<Term>,
    /// Non-fatal problems encountered
    pub warnings: Vec<LoadWarning>,
}

/// A supplier of term records.
#[async_trait]
pub trait TermSource: Send + Sync {
    /// Load every term.
    async fn load(&self) -> Result<LoadedTerms>;
}

/// Terms read from a JSON Lines file.
#[derive(Debug, Clone)]
pub struct JsonlTermSource {
    path: PathBuf,
}

impl JsonlTermSource {
    /// Create a source reading `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TermSource for JsonlTermSource {
    async fn load(&self) -> Result<LoadedTerms> {
        let (records, jsonl_warnings) = read_jsonl_resilient::<Term, _>(&self.path).await?;

        let mut warnings: Vec<LoadWarning> = jsonl_warnings
            .into_iter()
            .map(|warning| match warning {
                JsonlWarning::MalformedJson { line_number, error } => {
                    LoadWarning::MalformedRecord { line_number, error }
                }
                JsonlWarning::SkippedLine {
                    line_number,
                    reason,
                } => LoadWarning::MalformedRecord {
                    line_number,
                    error: reason,
                },
            })
            .collect();

        let mut loaded = sanitize(records);
        warnings.append(&mut loaded.warnings);
        loaded.warnings = warnings;
        log_warnings(&loaded.warnings);

        tracing::debug!(
            path = %self.path.display(),
            terms = loaded.terms.len(),
            warnings = loaded.warnings.len(),
            "Loaded term records"
        );
        Ok(loaded)
    }
}

#[async_trait]
impl TermSource for Vec<Term> {
    async fn load(&self) -> Result<LoadedTerms> {
        Ok(sanitize(self.clone()))
    }
}

/// Log each problem; obsolete terms are routine and only counted.
fn log_warnings(warnings: &[LoadWarning]) {
    let mut obsolete = 0usize;
    for warning in warnings {
        if let LoadWarning::ObsoleteTerm { .. } = warning {
            obsolete += 1;
        } else {
            tracing::warn!(%warning, "Term load warning");
        }
    }
    if obsolete > 0 {
        tracing::debug!(count = obsolete, "Skipped obsolete terms");
    }
}

/// Drop duplicate and obsolete terms, keeping input order.
fn sanitize(records: Vec<Term>) -> LoadedTerms {
    let mut seen: HashSet<TermId> = HashSet::with_capacity(records.len());
    let mut loaded = LoadedTerms::default();

    for term in records {
        if term.is_obsolete {
            loaded.warnings.push(LoadWarning::ObsoleteTerm { id: term.id });
            continue;
        }
        if !seen.insert(term.id.clone()) {
            loaded.warnings.push(LoadWarning::DuplicateTerm { id: term.id });
            continue;
        }
        loaded.terms.push(term);
    }

    loaded
}

/// Load terms from a JSON Lines file.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be read.
pub async fn load_terms(path: &Path) -> Result<LoadedTerms> {
    JsonlTermSource::new(path).load().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_first_duplicate() {
        let records = vec![
            Term::new("A", "first"),
            Term::new("A", "second"),
            Term::new("B", "b"),
        ];

        let loaded = sanitize(records);

        assert_eq!(loaded.terms.len(), 2);
        assert_eq!(loaded.terms[0].name, "first");
        assert_eq!(
            loaded.warnings,
            vec![LoadWarning::DuplicateTerm { id: TermId::new("A") }]
        );
    }

    #[test]
    fn sanitize_drops_obsolete_terms() {
        let mut obsolete = Term::new("OLD", "retired");
        obsolete.is_obsolete = true;

        let loaded = sanitize(vec![Term::new("A", "a"), obsolete]);

        assert_eq!(loaded.terms.len(), 1);
        assert_eq!(
            loaded.warnings,
            vec![LoadWarning::ObsoleteTerm {
                id: TermId::new("OLD")
            }]
        );
    }

    #[test]
    fn warnings_display_the_term() {
        let warning = LoadWarning::DuplicateTerm {
            id: TermId::new("GO:1"),
        };
        assert_eq!(warning.to_string(), "duplicate term GO:1 skipped");
    }

    #[tokio::test]
    async fn vec_source_is_sanitized() {
        let source = vec![Term::new("A", "a"), Term::new("A", "again")];

        let loaded = source.load().await.unwrap();

        assert_eq!(loaded.terms.len(), 1);
        assert_eq!(loaded.warnings.len(), 1);
    }
}
