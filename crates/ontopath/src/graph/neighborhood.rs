//! Induced one-hop neighborhood of a path within the hierarchy.

use super::{Hierarchy, Subgraph};
use crate::domain::TermId;
use petgraph::visit::EdgeRef;
use std::collections::HashSet;

/// Extract the hierarchy neighborhood around `path`.
///
/// The node set is the path plus the direct parents and direct children of
/// every path term (one hop, not the full ancestor/descendant closure). The
/// result holds every hierarchy edge whose endpoints are both in that set,
/// including edges that are not on the path.
///
/// A path term missing from the hierarchy contributes no neighbors but is
/// still added, as an isolated node with an empty name.
///
/// Nodes are ordered path first, then neighbors in discovery order.
#[must_use]
pub fn extract_subgraph(hierarchy: &Hierarchy, path: &[TermId]) -> Subgraph {
    let mut members: Vec<&TermId> = Vec::new();
    let mut seen: HashSet<&TermId> = HashSet::new();

    for id in path {
        if seen.insert(id) {
            members.push(id);
        }
    }

    for id in path {
        if !hierarchy.contains(id) {
            tracing::debug!(term = %id, "Path term has no hierarchy node");
            continue;
        }
        for neighbor in hierarchy.predecessors(id).chain(hierarchy.successors(id)) {
            if seen.insert(neighbor) {
                members.push(neighbor);
            }
        }
    }

    let mut subgraph = Subgraph::new();
    for id in &members {
        let name = hierarchy.name(id).unwrap_or_default();
        subgraph.insert_node(id, name);
    }

    let g = hierarchy.graph();
    for id in &members {
        let Some(node) = hierarchy.node_index(id) else {
            continue;
        };
        for edge in g.edges(node) {
            let target = &g[edge.target()].id;
            if seen.contains(target) {
                let source_idx = subgraph.index[*id];
                let target_idx = subgraph.index[target];
                subgraph.upsert_edge(source_idx, target_idx, edge.weight().clone());
            }
        }
    }

    tracing::debug!(
        path_len = path.len(),
        nodes = subgraph.node_count(),
        edges = subgraph.edge_count(),
        "Extracted path neighborhood"
    );
    subgraph
}
