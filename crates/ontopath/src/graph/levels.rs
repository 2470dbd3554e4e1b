//! Hierarchy levels by longest path from any source.

use super::TermGraph;
use crate::domain::TermId;
use crate::error::{Error, Result};
use petgraph::algo;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use std::collections::{BTreeMap, HashMap};

/// Depth of every node, keyed by term identifier.
pub type LevelMap = BTreeMap<TermId, usize>;

/// Assign each node the length of the longest directed path ending at it.
///
/// Sources (nodes without predecessors) are level 0; every other node is one
/// more than its deepest predecessor. A term with two parents where one
/// parent sits below the other therefore lands under the deeper one.
///
/// # Errors
///
/// Returns [`Error::CyclicGraph`] naming a term on a cycle if the graph is
/// not acyclic.
pub fn assign_levels(dag: &TermGraph<Directed>) -> Result<LevelMap> {
    let order = algo::toposort(dag.graph(), None)
        .map_err(|cycle| Error::CyclicGraph(dag.graph()[cycle.node_id()].id.clone()))?;

    Ok(levels_in_order(dag, &order))
}

/// Assign levels processing nodes in the caller's topological `order`.
///
/// The result equals [`assign_levels`] for every valid order.
///
/// # Errors
///
/// Returns [`Error::UnknownTerm`] if `order` names a term outside the graph,
/// and [`Error::InvalidOrder`] if it repeats or omits a node or places a
/// node before one of its predecessors.
pub fn assign_levels_with_order(dag: &TermGraph<Directed>, order: &[TermId]) -> Result<LevelMap> {
    let g = dag.graph();
    if order.len() != g.node_count() {
        return Err(Error::InvalidOrder(format!(
            "expected {} nodes, got {}",
            g.node_count(),
            order.len()
        )));
    }

    let mut position: HashMap<NodeIndex, usize> = HashMap::with_capacity(order.len());
    let mut nodes = Vec::with_capacity(order.len());
    for (i, id) in order.iter().enumerate() {
        let node = dag
            .node_index(id)
            .ok_or_else(|| Error::UnknownTerm(id.clone()))?;
        if position.insert(node, i).is_some() {
            return Err(Error::InvalidOrder(format!("term {id} appears twice")));
        }
        nodes.push(node);
    }

    for edge in g.edge_references() {
        if position[&edge.source()] >= position[&edge.target()] {
            return Err(Error::InvalidOrder(format!(
                "{} must come before {}",
                g[edge.source()].id,
                g[edge.target()].id
            )));
        }
    }

    Ok(levels_in_order(dag, &nodes))
}

fn levels_in_order(dag: &TermGraph<Directed>, order: &[NodeIndex]) -> LevelMap {
    let g = dag.graph();
    let mut levels: HashMap<NodeIndex, usize> = HashMap::with_capacity(order.len());

    for &node in order {
        let level = g
            .neighbors_directed(node, Direction::Incoming)
            .filter_map(|predecessor| levels.get(&predecessor))
            .map(|level| level + 1)
            .max()
            .unwrap_or(0);
        levels.insert(node, level);
    }

    levels
        .into_iter()
        .map(|(node, level)| (g[node].id.clone(), level))
        .collect()
}
