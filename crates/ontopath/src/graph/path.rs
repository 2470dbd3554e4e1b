//! Unweighted shortest-path search over the undirected ontology graph.

use super::OntologyGraph;
use crate::domain::{RelationType, TermId};
use crate::error::{Error, Result};
use petgraph::graph::NodeIndex;
use serde::Serialize;
use std::collections::{HashMap, VecDeque};

/// Find a shortest path between two terms.
///
/// Breadth-first search from `start`; every edge costs the same regardless
/// of its relation type. Neighbors are expanded in petgraph adjacency order
/// (most recently added edge first), so the path chosen among equally short
/// candidates is fixed for a given build order.
///
/// Returns `Ok(None)` when the two terms lie in different components and a
/// single-element path when `start == end`.
///
/// # Errors
///
/// Returns [`Error::UnknownTerm`] if either endpoint is not in the graph.
pub fn find_shortest_path(
    graph: &OntologyGraph,
    start: &TermId,
    end: &TermId,
) -> Result<Option<Vec<TermId>>> {
    let start_node = graph
        .node_index(start)
        .ok_or_else(|| Error::UnknownTerm(start.clone()))?;
    let end_node = graph
        .node_index(end)
        .ok_or_else(|| Error::UnknownTerm(end.clone()))?;

    if start_node == end_node {
        return Ok(Some(vec![start.clone()]));
    }

    let g = graph.graph();
    let mut predecessor: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    queue.push_back(start_node);

    'bfs: while let Some(current) = queue.pop_front() {
        for neighbor in g.neighbors(current) {
            if neighbor == start_node || predecessor.contains_key(&neighbor) {
                continue;
            }
            predecessor.insert(neighbor, current);
            if neighbor == end_node {
                break 'bfs;
            }
            queue.push_back(neighbor);
        }
    }

    if !predecessor.contains_key(&end_node) {
        tracing::debug!(%start, %end, visited = predecessor.len(), "No path between terms");
        return Ok(None);
    }

    // Walk predecessors back from the end
    let mut path = vec![g[end_node].id.clone()];
    let mut current = end_node;
    while let Some(&previous) = predecessor.get(&current) {
        path.push(g[previous].id.clone());
        current = previous;
    }
    path.reverse();

    tracing::debug!(%start, %end, length = path.len(), "Found shortest path");
    Ok(Some(path))
}

/// One term of a path with the relation leading to the next term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStep {
    /// Term identifier
    pub id: TermId,
    /// Display name
    pub name: String,
    /// Relation on the edge to the next step; `None` on the last step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation_to_next: Option<RelationType>,
}

/// Attach names and edge relations to a path found in `graph`.
///
/// Terms missing from the graph get an empty name; pairs without an edge
/// get the `unknown` relation.
#[must_use]
pub fn describe_path(graph: &OntologyGraph, path: &[TermId]) -> Vec<PathStep> {
    path.iter()
        .enumerate()
        .map(|(i, id)| PathStep {
            id: id.clone(),
            name: graph.name(id).unwrap_or_default().to_string(),
            relation_to_next: path.get(i + 1).map(|next| {
                graph
                    .relation_between(id, next)
                    .cloned()
                    .unwrap_or_else(|| RelationType::new(RelationType::UNKNOWN))
            }),
        })
        .collect()
}
