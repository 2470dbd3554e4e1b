//! The path query pipeline: path, neighborhood, levels.
//!
//! ```
//! use ontopath::domain::{Term, TermId};
//! use ontopath::graph::build_graphs;
//! use ontopath::query::run_query;
//!
//! let terms = vec![
//!     Term::new("A", "root"),
//!     Term::new("B", "middle").with_parent("A"),
//!     Term::new("C", "leaf").with_parent("B"),
//! ];
//! let graphs = build_graphs(&terms);
//!
//! let result = run_query(&graphs, &TermId::new("A"), &TermId::new("C"))
//!     .unwrap()
//!     .expect("A and C are connected");
//! assert_eq!(result.path.len(), 3);
//! assert_eq!(result.levels[&TermId::new("C")], 2);
//! ```

use crate::domain::TermId;
use crate::error::Result;
use crate::graph::{
    assign_levels, describe_path, extract_subgraph, find_shortest_path, LevelMap, OntologyGraphs,
    PathStep, Subgraph,
};
use crate::layout::{edge_table, EdgeRecord, Layout};

/// Everything derived from one (start, end) query.
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// First query term
    pub start: TermId,
    /// Second query term
    pub end: TermId,
    /// Shortest path from `start` to `end`, inclusive
    pub path: Vec<TermId>,
    /// The path with names and relations
    pub steps: Vec<PathStep>,
    /// Hierarchy neighborhood of the path
    pub subgraph: Subgraph,
    /// Levels of the subgraph nodes
    pub levels: LevelMap,
}

impl QueryResult {
    /// Presentation layout of the neighborhood.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::new(&self.subgraph, &self.path, &self.levels)
    }

    /// Flat edge table of the neighborhood.
    #[must_use]
    pub fn edge_table(&self) -> Vec<EdgeRecord> {
        edge_table(&self.subgraph)
    }
}

/// Run the full pipeline for one pair of terms.
///
/// Returns `Ok(None)` when the terms are not connected.
///
/// # Errors
///
/// Returns [`Error::UnknownTerm`](crate::error::Error::UnknownTerm) if either
/// term is missing, and [`Error::CyclicGraph`](crate::error::Error::CyclicGraph)
/// if the neighborhood is not acyclic.
pub fn run_query(graphs: &OntologyGraphs, start: &TermId, end: &TermId) -> Result<Option<QueryResult>> {
    let Some(path) = find_shortest_path(&graphs.undirected, start, end)? else {
        return Ok(None);
    };

    let steps = describe_path(&graphs.undirected, &path);
    let subgraph = extract_subgraph(&graphs.hierarchy, &path);
    let levels = assign_levels(&subgraph)?;

    tracing::info!(
        %start,
        %end,
        path_len = path.len(),
        neighborhood = subgraph.node_count(),
        "Query complete"
    );

    Ok(Some(QueryResult {
        start: start.clone(),
        end: end.clone(),
        path,
        steps,
        subgraph,
        levels,
    }))
}
