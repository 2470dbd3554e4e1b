//! Ontology graph representations and algorithms using petgraph.
//!
//! Two views are built from the same term records:
//!
//! - [`OntologyGraph`]: undirected, every `is_a` and typed relation becomes
//!   an edge. Used for shortest-path search.
//! - [`Hierarchy`]: directed, `is_a` only, edges point **parent -> child**
//!   (generalization to specialization). Used for neighborhood extraction
//!   and level assignment.
//!
//! A neighborhood [`Subgraph`] is itself a directed [`TermGraph`], so the
//! level assigner runs on either.
//!
//! # Edge Collapsing
//!
//! Both views hold at most one edge per node pair. When two relations join
//! the same pair, the one inserted last keeps the edge and its label.

mod builder;
mod levels;
mod neighborhood;
mod path;

pub use builder::{build_graphs, OntologyGraphs};
pub use levels::{assign_levels, assign_levels_with_order, LevelMap};
pub use neighborhood::extract_subgraph;
pub use path::{describe_path, find_shortest_path, PathStep};

use crate::domain::{RelationType, TermId};
use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction, EdgeType, Undirected};
use serde::Serialize;
use std::collections::HashMap;

/// Node weight: a term identifier and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermNode {
    /// Term identifier
    pub id: TermId,
    /// Display name
    pub name: String,
}

/// A petgraph graph of terms with an identifier index.
///
/// Nodes are [`TermNode`]s and edges carry their [`RelationType`]. Every
/// node in the graph has exactly one entry in the index.
#[derive(Debug, Clone)]
pub struct TermGraph<Ty: EdgeType> {
    graph: Graph<TermNode, RelationType, Ty>,
    index: HashMap<TermId, NodeIndex>,
}

/// Undirected graph over all relation types.
pub type OntologyGraph = TermGraph<Undirected>;

/// Directed `is_a` graph, parent -> child.
pub type Hierarchy = TermGraph<Directed>;

/// Induced neighborhood of a path within a [`Hierarchy`].
pub type Subgraph = TermGraph<Directed>;

impl<Ty: EdgeType> TermGraph<Ty> {
    pub(crate) fn new() -> Self {
        Self {
            graph: Graph::default(),
            index: HashMap::new(),
        }
    }

    /// Add a node for `id`, or rename the existing one.
    pub(crate) fn insert_node(&mut self, id: &TermId, name: &str) -> NodeIndex {
        if let Some(&node) = self.index.get(id) {
            self.graph[node].name = name.to_string();
            return node;
        }
        let node = self.graph.add_node(TermNode {
            id: id.clone(),
            name: name.to_string(),
        });
        self.index.insert(id.clone(), node);
        node
    }

    /// Add an edge, or relabel the edge already joining the pair.
    pub(crate) fn upsert_edge(&mut self, a: NodeIndex, b: NodeIndex, relation: RelationType) {
        self.graph.update_edge(a, b, relation);
    }

    /// The underlying petgraph graph.
    #[must_use]
    pub fn graph(&self) -> &Graph<TermNode, RelationType, Ty> {
        &self.graph
    }

    /// Whether `id` is a node of this graph.
    #[must_use]
    pub fn contains(&self, id: &TermId) -> bool {
        self.index.contains_key(id)
    }

    /// The petgraph index of `id`, if present.
    #[must_use]
    pub fn node_index(&self, id: &TermId) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// The node weight of `id`, if present.
    #[must_use]
    pub fn node(&self, id: &TermId) -> Option<&TermNode> {
        self.node_index(id).map(|node| &self.graph[node])
    }

    /// The display name of `id`, if present.
    #[must_use]
    pub fn name(&self, id: &TermId) -> Option<&str> {
        self.node(id).map(|node| node.name.as_str())
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &TermNode> + '_ {
        self.graph.node_indices().map(move |node| &self.graph[node])
    }

    /// Edges in insertion order as `(source, target, relation)`.
    pub fn edges(&self) -> impl Iterator<Item = (&TermNode, &TermNode, &RelationType)> + '_ {
        self.graph.edge_references().map(move |edge| {
            (
                &self.graph[edge.source()],
                &self.graph[edge.target()],
                edge.weight(),
            )
        })
    }

    /// The relation on the edge joining `a` and `b`.
    ///
    /// Direction matters only for directed graphs.
    #[must_use]
    pub fn relation_between(&self, a: &TermId, b: &TermId) -> Option<&RelationType> {
        let edge = self
            .graph
            .find_edge(self.node_index(a)?, self.node_index(b)?)?;
        self.graph.edge_weight(edge)
    }
}

impl TermGraph<Directed> {
    /// Direct predecessors of `id` (its parents in a [`Hierarchy`]).
    ///
    /// Empty when `id` is not in the graph.
    pub fn predecessors<'a>(&'a self, id: &TermId) -> impl Iterator<Item = &'a TermId> + use<'a> {
        self.neighbors(id, Direction::Incoming)
    }

    /// Direct successors of `id` (its children in a [`Hierarchy`]).
    ///
    /// Empty when `id` is not in the graph.
    pub fn successors<'a>(&'a self, id: &TermId) -> impl Iterator<Item = &'a TermId> + use<'a> {
        self.neighbors(id, Direction::Outgoing)
    }

    fn neighbors<'a>(
        &'a self,
        id: &TermId,
        direction: Direction,
    ) -> impl Iterator<Item = &'a TermId> + use<'a> {
        self.node_index(id)
            .into_iter()
            .flat_map(move |node| self.graph.neighbors_directed(node, direction))
            .map(move |neighbor| &self.graph[neighbor].id)
    }
}
