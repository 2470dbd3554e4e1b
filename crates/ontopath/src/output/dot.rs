//! Graphviz DOT rendering of a path neighborhood.
//!
//! Nodes sharing a level are pinned to the same rank so that the drawing's
//! vertical axis follows the hierarchy levels. Path edges are drawn bold red.

use crate::layout::{Layout, NodeRole};

/// Fill color of a node with the given role.
fn fill_color(role: NodeRole) -> &'static str {
    match role {
        NodeRole::Start => "green",
        NodeRole::End => "purple",
        NodeRole::Path => "red",
        NodeRole::Neighbor => "lightblue",
    }
}

/// Escape a string for use inside a double-quoted DOT identifier.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render `layout` as a DOT digraph titled `title`.
#[must_use]
pub fn render_dot(layout: &Layout, title: &str) -> String {
    let mut lines = vec![
        "digraph ontopath {".to_string(),
        "    rankdir=TB;".to_string(),
        format!("    label=\"{}\";", escape(title)),
        "    labelloc=t;".to_string(),
        "    node [shape=box, style=filled, fontname=\"Helvetica\"];".to_string(),
        String::new(),
    ];

    lines.extend(layout.nodes.iter().map(|node| {
        format!(
            "    \"{}\" [label=\"{}\\n{}\", fillcolor=\"{}\"];",
            escape(node.id.as_str()),
            escape(node.id.as_str()),
            escape(&node.name),
            fill_color(node.role)
        )
    }));

    lines.push(String::new());
    for level in 0..=layout.max_level() {
        let members: Vec<String> = layout
            .nodes_at(level)
            .map(|node| format!("\"{}\"", escape(node.id.as_str())))
            .collect();
        if !members.is_empty() {
            lines.push(format!("    {{ rank=same; {}; }}", members.join("; ")));
        }
    }

    lines.push(String::new());
    lines.extend(layout.edges.iter().map(|edge| {
        let style = if edge.on_path {
            "color=\"red\", penwidth=3.0"
        } else {
            "color=\"gray\", penwidth=1.0"
        };
        format!(
            "    \"{}\" -> \"{}\" [label=\"{}\", {style}];",
            escape(edge.source.as_str()),
            escape(edge.target.as_str()),
            escape(edge.relation.as_str()),
        )
    }));

    lines.push("}".to_string());
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
