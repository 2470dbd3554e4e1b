//! Construction of the undirected and hierarchy graphs from term records.

use super::{Hierarchy, OntologyGraph};
use crate::domain::{RelationType, Term};

/// The two graph views of one ontology snapshot.
///
/// Built once by [`build_graphs`] and read-only afterwards; pass it by
/// reference to every query.
#[derive(Debug, Clone)]
pub struct OntologyGraphs {
    /// All relations, undirected. Input to shortest-path search.
    pub undirected: OntologyGraph,
    /// `is_a` only, parent -> child. Input to neighborhood extraction.
    pub hierarchy: Hierarchy,
}

/// Build both graph views from a collection of terms.
///
/// Every term becomes a node in both graphs. Each parent link becomes an
/// undirected `is_a` edge and a directed parent -> child edge. Each typed
/// relation becomes an undirected edge labelled with its relation type only.
///
/// Links to identifiers outside the term collection are skipped. A repeated
/// identifier reuses the existing node, taking the later record's name.
pub fn build_graphs<'a, I>(terms: I) -> OntologyGraphs
where
    I: IntoIterator<Item = &'a Term>,
{
    let terms: Vec<&Term> = terms.into_iter().collect();

    let mut undirected = OntologyGraph::new();
    let mut hierarchy = Hierarchy::new();

    // First pass: nodes, so that link targets resolve regardless of order
    for term in &terms {
        undirected.insert_node(&term.id, &term.name);
        hierarchy.insert_node(&term.id, &term.name);
    }

    // Second pass: edges
    let mut dangling = 0usize;
    for term in &terms {
        let child = undirected.index[&term.id];
        let child_in_hierarchy = hierarchy.index[&term.id];

        for parent_id in &term.parents {
            let (Some(parent), Some(parent_in_hierarchy)) = (
                undirected.node_index(parent_id),
                hierarchy.node_index(parent_id),
            ) else {
                tracing::trace!(term = %term.id, parent = %parent_id, "Skipping dangling parent");
                dangling += 1;
                continue;
            };

            undirected.upsert_edge(child, parent, RelationType::is_a());
            hierarchy.upsert_edge(parent_in_hierarchy, child_in_hierarchy, RelationType::is_a());
        }

        for (relation, targets) in &term.relationships {
            for target_id in targets {
                let Some(target) = undirected.node_index(target_id) else {
                    tracing::trace!(
                        term = %term.id,
                        %relation,
                        target = %target_id,
                        "Skipping dangling relation target"
                    );
                    dangling += 1;
                    continue;
                };

                undirected.upsert_edge(child, target, relation.clone());
            }
        }
    }

    tracing::debug!(
        nodes = undirected.node_count(),
        undirected_edges = undirected.edge_count(),
        hierarchy_edges = hierarchy.edge_count(),
        dangling,
        "Built ontology graphs"
    );

    OntologyGraphs {
        undirected,
        hierarchy,
    }
}
