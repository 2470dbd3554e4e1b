//! Domain types for ontology terms.
//!
//! A [`Term`] is one concept of the ontology. Terms reference their
//! generalizations through `parents` ("is-a" links) and any other concepts
//! through typed `relationships` such as `part_of` or `regulates`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Unique identifier of a term (e.g. `GO:0008150`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermId(pub String);

impl TermId {
    /// Create a new term ID
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TermId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TermId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Label of an edge between two terms (`is_a`, `part_of`, ...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationType(pub String);

impl RelationType {
    /// Label of the generalization relation.
    pub const IS_A: &'static str = "is_a";

    /// Label reported for an edge that carries no relation.
    pub const UNKNOWN: &'static str = "unknown";

    /// Create a new relation type
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The `is_a` relation
    #[must_use]
    pub fn is_a() -> Self {
        Self(Self::IS_A.to_string())
    }

    /// Get the string representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RelationType {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A term record as supplied by the ontology loader.
///
/// The relation map is always present; a term without typed relations has
/// an empty map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Unique identifier
    pub id: TermId,

    /// Display name
    pub name: String,

    /// Ontology namespace (e.g. `biological_process`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Direct generalizations ("is-a" targets). Empty for root terms.
    #[serde(default)]
    pub parents: BTreeSet<TermId>,

    /// Typed, non-hierarchical links keyed by relation type
    #[serde(default)]
    pub relationships: BTreeMap<RelationType, BTreeSet<TermId>>,

    /// Whether the term has been retired from the ontology
    #[serde(default)]
    pub is_obsolete: bool,
}

impl Term {
    /// Create a root term with no parents or relations
    #[must_use]
    pub fn new(id: impl Into<TermId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            namespace: None,
            parents: BTreeSet::new(),
            relationships: BTreeMap::new(),
            is_obsolete: false,
        }
    }

    /// Add an "is-a" parent
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<TermId>) -> Self {
        self.parents.insert(parent.into());
        self
    }

    /// Add a typed relation to `target`
    #[must_use]
    pub fn with_relation(
        mut self,
        relation: impl Into<RelationType>,
        target: impl Into<TermId>,
    ) -> Self {
        self.relationships
            .entry(relation.into())
            .or_default()
            .insert(target.into());
        self
    }
}
