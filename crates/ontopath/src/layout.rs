//! Presentation data derived from a path neighborhood.
//!
//! Nothing here computes coordinates or colors. A renderer receives each
//! node's level and role and each edge's path membership, and decides how
//! to draw them (see [`crate::output::dot`] for the Graphviz renderer).

use crate::domain::{RelationType, TermId};
use crate::graph::{LevelMap, Subgraph};
use serde::Serialize;
use std::collections::HashSet;

/// How a node relates to the queried path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// First query term
    Start,
    /// Second query term
    End,
    /// Interior term of the path
    Path,
    /// Parent or child of a path term, not on the path
    Neighbor,
}

impl std::fmt::Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
            Self::Path => write!(f, "path"),
            Self::Neighbor => write!(f, "neighbor"),
        }
    }
}

/// A subgraph node ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutNode {
    /// Term identifier
    pub id: TermId,
    /// Display name
    pub name: String,
    /// Longest-path depth within the subgraph
    pub level: usize,
    /// Relationship to the path
    pub role: NodeRole,
}

/// A subgraph edge ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEdge {
    /// Parent term
    pub source: TermId,
    /// Child term
    pub target: TermId,
    /// Relation label
    pub relation: RelationType,
    /// Whether the edge joins two consecutive path terms
    pub on_path: bool,
}

/// Nodes and edges of a path neighborhood with their presentation attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Nodes in subgraph order
    pub nodes: Vec<LayoutNode>,
    /// Edges in subgraph order
    pub edges: Vec<LayoutEdge>,
}

impl Layout {
    /// Build the layout of `subgraph` for `path`.
    ///
    /// The first path term is the start and the last is the end; with a
    /// single-term path that term is the start. Nodes missing from `levels`
    /// are placed at level 0.
    #[must_use]
    pub fn new(subgraph: &Subgraph, path: &[TermId], levels: &LevelMap) -> Self {
        let on_path: HashSet<&TermId> = path.iter().collect();
        let start = path.first();
        let end = path.last();

        let nodes = subgraph
            .nodes()
            .map(|node| {
                let role = if Some(&node.id) == start {
                    NodeRole::Start
                } else if Some(&node.id) == end {
                    NodeRole::End
                } else if on_path.contains(&node.id) {
                    NodeRole::Path
                } else {
                    NodeRole::Neighbor
                };
                LayoutNode {
                    id: node.id.clone(),
                    name: node.name.clone(),
                    level: levels.get(&node.id).copied().unwrap_or(0),
                    role,
                }
            })
            .collect();

        let path_pairs: HashSet<(&TermId, &TermId)> = path_edges(subgraph, path)
            .into_iter()
            .collect();

        let edges = subgraph
            .edges()
            .map(|(source, target, relation)| LayoutEdge {
                source: source.id.clone(),
                target: target.id.clone(),
                relation: relation.clone(),
                on_path: path_pairs.contains(&(&source.id, &target.id)),
            })
            .collect();

        Self { nodes, edges }
    }

    /// Deepest level present, or 0 for an empty layout.
    #[must_use]
    pub fn max_level(&self) -> usize {
        self.nodes.iter().map(|node| node.level).max().unwrap_or(0)
    }

    /// Nodes at `level`, in subgraph order.
    pub fn nodes_at(&self, level: usize) -> impl Iterator<Item = &LayoutNode> + '_ {
        self.nodes.iter().filter(move |node| node.level == level)
    }
}

/// Subgraph edges joining consecutive path terms, as `(source, target)`.
///
/// A path step may traverse its hierarchy edge in either direction; the pair
/// is reported in the edge's own orientation. Steps taken over non-`is_a`
/// relations have no subgraph edge and are omitted.
#[must_use]
pub fn path_edges<'a>(subgraph: &Subgraph, path: &'a [TermId]) -> Vec<(&'a TermId, &'a TermId)> {
    path.windows(2)
        .filter_map(|pair| {
            let (a, b) = (&pair[0], &pair[1]);
            if subgraph.relation_between(a, b).is_some() {
                Some((a, b))
            } else if subgraph.relation_between(b, a).is_some() {
                Some((b, a))
            } else {
                None
            }
        })
        .collect()
}

/// One row of the flat edge table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    /// Parent term identifier
    pub source_id: TermId,
    /// Parent term name
    pub source_name: String,
    /// Child term identifier
    pub target_id: TermId,
    /// Child term name
    pub target_name: String,
    /// Relation label, `unknown` when the edge has none
    pub relationship: String,
}

/// Flatten the edges of `subgraph` into table rows.
#[must_use]
pub fn edge_table(subgraph: &Subgraph) -> Vec<EdgeRecord> {
    subgraph
        .edges()
        .map(|(source, target, relation)| EdgeRecord {
            source_id: source.id.clone(),
            source_name: source.name.clone(),
            target_id: target.id.clone(),
            target_name: target.name.clone(),
            relationship: if relation.as_str().is_empty() {
                RelationType::UNKNOWN.to_string()
            } else {
                relation.to_string()
            },
        })
        .collect()
}
