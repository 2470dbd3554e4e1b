//! End-to-end tests of the path query pipeline over in-memory terms.

mod common;

use common::sample_terms;
use ontopath::domain::{RelationType, Term, TermId};
use ontopath::graph::{assign_levels, build_graphs, extract_subgraph, find_shortest_path};
use ontopath::layout::NodeRole;
use ontopath::query::run_query;
use ontopath::Error;
use rstest::rstest;

fn id(s: &str) -> TermId {
    TermId::new(s)
}

fn ids(path: &[&str]) -> Vec<TermId> {
    path.iter().copied().map(id).collect()
}

fn edge_list(result: &ontopath::query::QueryResult) -> Vec<(String, String)> {
    let mut edges: Vec<(String, String)> = result
        .subgraph
        .edges()
        .map(|(s, t, _)| (s.id.to_string(), t.id.to_string()))
        .collect();
    edges.sort();
    edges
}

#[test]
fn test_chain_query() {
    let terms = vec![
        Term::new("A", "a"),
        Term::new("B", "b").with_parent("A"),
        Term::new("C", "c").with_parent("B"),
    ];
    let graphs = build_graphs(&terms);

    let result = run_query(&graphs, &id("A"), &id("C")).unwrap().unwrap();

    assert_eq!(result.path, ids(&["A", "B", "C"]));
    assert_eq!(result.subgraph.node_count(), 3);
    assert_eq!(
        edge_list(&result),
        vec![
            ("A".to_string(), "B".to_string()),
            ("B".to_string(), "C".to_string())
        ]
    );
    assert_eq!(result.levels[&id("A")], 0);
    assert_eq!(result.levels[&id("B")], 1);
    assert_eq!(result.levels[&id("C")], 2);
}

#[test]
fn test_diamond_takes_longest_route() {
    let terms = vec![
        Term::new("A", "a"),
        Term::new("B", "b").with_parent("A"),
        Term::new("D", "d").with_parent("A").with_parent("B"),
    ];
    let graphs = build_graphs(&terms);

    let result = run_query(&graphs, &id("A"), &id("D")).unwrap().unwrap();

    assert_eq!(result.path, ids(&["A", "D"]));
    assert!(result.subgraph.contains(&id("B")));
    assert_eq!(result.levels[&id("D")], 2);
}

#[test]
fn test_unknown_term_is_an_error_not_no_path() {
    let graphs = build_graphs(&sample_terms());

    let err = run_query(&graphs, &id("BP"), &id("GO:404")).unwrap_err();

    assert!(matches!(err, Error::UnknownTerm(ref missing) if *missing == id("GO:404")));
}

#[test]
fn test_disconnected_terms_have_no_path() {
    let mut terms = sample_terms();
    terms.push(Term::new("MF", "molecular_function"));
    let graphs = build_graphs(&terms);

    assert!(run_query(&graphs, &id("L1"), &id("MF")).unwrap().is_none());
}

#[test]
fn test_same_start_and_end() {
    let graphs = build_graphs(&sample_terms());

    let result = run_query(&graphs, &id("C1"), &id("C1")).unwrap().unwrap();

    assert_eq!(result.path, ids(&["C1"]));
    assert_eq!(result.steps.len(), 1);
    assert!(result.steps[0].relation_to_next.is_none());
    // C1 plus its parent P1 and child L1
    assert_eq!(result.subgraph.node_count(), 3);
}

#[test]
fn test_path_through_sibling_branch() {
    let graphs = build_graphs(&sample_terms());

    let result = run_query(&graphs, &id("C2"), &id("L1")).unwrap().unwrap();

    assert_eq!(result.path, ids(&["C2", "P1", "C1", "L1"]));
    let names: Vec<&str> = result.steps.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "protein metabolic process",
            "metabolic process",
            "lipid metabolic process",
            "fatty acid metabolic process"
        ]
    );
}

#[test]
fn test_relation_shortcut_is_followed() {
    let graphs = build_graphs(&sample_terms());

    let result = run_query(&graphs, &id("C3"), &id("L1")).unwrap().unwrap();

    assert_eq!(result.path, ids(&["C3", "C1", "L1"]));
    assert_eq!(
        result.steps[0].relation_to_next,
        Some(RelationType::new("part_of"))
    );

    // part_of is not a hierarchy edge, so only C1 -> L1 lies on the drawn path
    let layout = result.layout();
    let on_path: Vec<_> = layout.edges.iter().filter(|e| e.on_path).collect();
    assert_eq!(on_path.len(), 1);
    assert_eq!(on_path[0].source, id("C1"));
    assert_eq!(on_path[0].target, id("L1"));

    assert_eq!(result.levels[&id("P2")], 0);
    assert_eq!(result.levels[&id("C3")], 1);
    assert_eq!(result.levels[&id("L1")], 2);
}

#[test]
fn test_subgraph_contains_every_path_node() {
    let graphs = build_graphs(&sample_terms());

    let result = run_query(&graphs, &id("L1"), &id("C3")).unwrap().unwrap();

    for term in &result.path {
        assert!(result.subgraph.contains(term), "{term} missing");
    }
    let layout = result.layout();
    let role = |t: &str| layout.nodes.iter().find(|n| n.id == id(t)).unwrap().role;
    assert_eq!(role("L1"), NodeRole::Start);
    assert_eq!(role("C3"), NodeRole::End);
}

#[test]
fn test_dangling_references_are_dropped() {
    let terms = vec![
        Term::new("A", "a").with_parent("GONE"),
        Term::new("B", "b")
            .with_parent("A")
            .with_relation("regulates", "ALSO_GONE"),
    ];

    let graphs = build_graphs(&terms);

    assert_eq!(graphs.undirected.node_count(), 2);
    assert_eq!(graphs.undirected.edge_count(), 1);
    assert_eq!(graphs.hierarchy.edge_count(), 1);
    assert!(!graphs.hierarchy.contains(&id("GONE")));
}

#[test]
fn test_edge_table_matches_subgraph() {
    let graphs = build_graphs(&sample_terms());

    let result = run_query(&graphs, &id("C2"), &id("L1")).unwrap().unwrap();
    let rows = result.edge_table();

    assert_eq!(rows.len(), result.subgraph.edge_count());
    assert!(rows.iter().all(|row| row.relationship == RelationType::IS_A));
    assert!(rows
        .iter()
        .any(|row| row.source_id == id("P1") && row.target_name == "protein metabolic process"));
}

#[rstest]
#[case("BP", "L1", 3)]
#[case("P2", "P1", 2)]
#[case("C3", "C2", 3)]
#[case("L1", "BP", 3)]
fn test_path_lengths(#[case] start: &str, #[case] end: &str, #[case] hops: usize) {
    let graphs = build_graphs(&sample_terms());

    let path = find_shortest_path(&graphs.undirected, &id(start), &id(end))
        .unwrap()
        .unwrap();

    assert_eq!(path.len() - 1, hops);
    assert_eq!(path.first(), Some(&id(start)));
    assert_eq!(path.last(), Some(&id(end)));
}

#[test]
fn test_levels_increase_along_every_edge() {
    let graphs = build_graphs(&sample_terms());
    let subgraph = extract_subgraph(&graphs.hierarchy, &ids(&["L1", "C1", "C3"]));

    let levels = assign_levels(&subgraph).unwrap();

    for (source, target, _) in subgraph.edges() {
        assert!(levels[&source.id] < levels[&target.id]);
    }
}
