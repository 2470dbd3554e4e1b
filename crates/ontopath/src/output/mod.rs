//! Output formatting for CLI commands.
//!
//! This module formats query results in human-readable text and in JSON for
//! programmatic use.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers (role colors, icons)
//! - [`dot`]: Graphviz rendering of a path neighborhood

pub mod color;
pub mod dot;

use crate::domain::RelationType;
use crate::graph::PathStep;
use crate::layout::{EdgeRecord, Layout, NodeRole};
use crate::query::QueryResult;
use serde::Serialize;
use std::env;
use std::io::{self, Write};

pub use dot::render_dot;

use color::{bold, colored_role_icon, colorize_id, dimmed};

// ============================================================================
// Output Configuration
// ============================================================================

const DEFAULT_TERMINAL_WIDTH: u16 = 80;
const DEFAULT_MAX_CONTENT_WIDTH: usize = 80;

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum content width for text wrapping.
    pub max_width: usize,
    /// Whether to use ASCII-only icons instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    #[must_use]
    pub fn new(max_width: usize, use_ascii: bool, use_colors: bool) -> Self {
        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `ONTOPATH_MAX_WIDTH`: Maximum content width (default: 80)
    /// - `ONTOPATH_ASCII`: Set to "1" or "true" for ASCII-only icons (default: false)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `ONTOPATH_COLOR`: Set to "0" or "false" to disable colors (default: true)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_width = if let Some(s) = lookup("ONTOPATH_MAX_WIDTH").filter(|s| !s.is_empty()) {
            s.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    env_var = "ONTOPATH_MAX_WIDTH",
                    value = %s,
                    default = DEFAULT_MAX_CONTENT_WIDTH,
                    "Invalid value, using default"
                );
                DEFAULT_MAX_CONTENT_WIDTH
            })
        } else {
            DEFAULT_MAX_CONTENT_WIDTH
        };

        let use_ascii = match lookup("ONTOPATH_ASCII") {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Some(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Some(v) => {
                tracing::warn!(
                    env_var = "ONTOPATH_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            None => false,
        };

        // Respect NO_COLOR (https://no-color.org/), then ONTOPATH_COLOR
        let use_colors = lookup("NO_COLOR").is_none()
            && lookup("ONTOPATH_COLOR")
                .is_none_or(|v| v != "0" && !v.eq_ignore_ascii_case("false"));

        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }

    /// Width available for text, capped by the terminal.
    fn content_width(&self) -> usize {
        self.max_width.min(get_terminal_width()).max(20)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_CONTENT_WIDTH,
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Get the current terminal width, falling back to default if detection fails.
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map_or(DEFAULT_TERMINAL_WIDTH, |(w, _)| w.0)
        .into()
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Flavor of the edge table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// Aligned columns for reading
    #[default]
    Aligned,
    /// Tab-separated values with a header row
    Tsv,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print the path of a query result
///
/// # Errors
///
/// Returns an error if writing to stdout fails or the JSON cannot be encoded.
pub fn print_path(result: &QueryResult, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_path_text(&mut handle, &result.steps, &config),
        OutputMode::Json => write_json(&mut handle, &PathJson::new(result)),
    }
}

/// Report that two terms are not connected
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_no_path(start: &str, end: &str, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => writeln!(handle, "No path found between {start} and {end}."),
        OutputMode::Json => write_json(
            &mut handle,
            &serde_json::json!({ "start": start, "end": end, "path": null }),
        ),
    }
}

/// Print the neighborhood layout grouped by level
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_layout(layout: &Layout, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_layout_text(&mut handle, layout, &config),
        OutputMode::Json => write_json(&mut handle, layout),
    }
}

/// Print the neighborhood as Graphviz DOT
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_dot(layout: &Layout, title: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(render_dot(layout, title).as_bytes())
}

/// Print the flat edge table
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_edge_table(
    rows: &[EdgeRecord],
    mode: OutputMode,
    format: TableFormat,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match (mode, format) {
        (OutputMode::Json, _) => write_json(&mut handle, &rows),
        (OutputMode::Text, TableFormat::Tsv) => print_edge_table_tsv(&mut handle, rows),
        (OutputMode::Text, TableFormat::Aligned) => print_edge_table_aligned(&mut handle, rows),
    }
}

fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

// ============================================================================
// JSON Shapes
// ============================================================================

#[derive(Serialize)]
struct PathJson<'a> {
    start: &'a str,
    end: &'a str,
    length: usize,
    steps: Vec<StepJson<'a>>,
}

#[derive(Serialize)]
struct StepJson<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    relation_to_next: Option<&'a str>,
}

impl<'a> PathJson<'a> {
    fn new(result: &'a QueryResult) -> Self {
        Self {
            start: result.start.as_str(),
            end: result.end.as_str(),
            length: result.path.len().saturating_sub(1),
            steps: result
                .steps
                .iter()
                .map(|step| StepJson {
                    id: step.id.as_str(),
                    name: &step.name,
                    relation_to_next: step.relation_to_next.as_ref().map(RelationType::as_str),
                })
                .collect(),
        }
    }
}

// ============================================================================
// Text Formatting
// ============================================================================

fn print_path_text<W: Write>(
    w: &mut W,
    steps: &[PathStep],
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "{} ({} step(s)):",
        bold("Shortest path", config),
        steps.len().saturating_sub(1)
    )?;

    let width = config.content_width();
    for (i, step) in steps.iter().enumerate() {
        let prefix = format!("{:>3}. ", i + 1);
        let line = format!("{} - {}", step.id, step.name);
        let mut lines = wrap_text(&line, width.saturating_sub(prefix.len()).max(10)).into_iter();

        if let Some(first) = lines.next() {
            // Recolor the identifier at the head of the first line
            let first = first
                .strip_prefix(step.id.as_str())
                .map_or_else(|| first.clone(), |rest| {
                    format!("{}{rest}", colorize_id(step.id.as_str(), config))
                });
            writeln!(w, "{prefix}{first}")?;
        }
        for rest in lines {
            writeln!(w, "{:width$}{rest}", "", width = prefix.len())?;
        }

        if let Some(relation) = &step.relation_to_next {
            writeln!(
                w,
                "{:width$}{}",
                "",
                dimmed(&format!("| {relation}"), config),
                width = prefix.len()
            )?;
        }
    }

    Ok(())
}

fn print_layout_text<W: Write>(
    w: &mut W,
    layout: &Layout,
    config: &OutputConfig,
) -> io::Result<()> {
    if layout.nodes.is_empty() {
        writeln!(w, "Empty neighborhood.")?;
        return Ok(());
    }

    writeln!(
        w,
        "{} ({} term(s), {} edge(s)):",
        bold("Neighborhood", config),
        layout.nodes.len(),
        layout.edges.len()
    )?;

    for level in 0..=layout.max_level() {
        let mut nodes = layout.nodes_at(level).peekable();
        if nodes.peek().is_none() {
            continue;
        }
        writeln!(w, "{}", dimmed(&format!("Level {level}"), config))?;
        for node in nodes {
            writeln!(
                w,
                "  {} {} {}{}",
                colored_role_icon(node.role, config),
                colorize_id(node.id.as_str(), config),
                node.name,
                role_suffix(node.role, config)
            )?;
        }
    }

    Ok(())
}

fn role_suffix(role: NodeRole, config: &OutputConfig) -> String {
    match role {
        NodeRole::Neighbor => String::new(),
        role => format!(" {}", dimmed(&format!("({role})"), config)),
    }
}

fn print_edge_table_tsv<W: Write>(w: &mut W, rows: &[EdgeRecord]) -> io::Result<()> {
    writeln!(w, "source_id\tsource_name\ttarget_id\ttarget_name\trelationship")?;
    for row in rows {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            row.source_id,
            tsv_field(&row.source_name),
            row.target_id,
            tsv_field(&row.target_name),
            row.relationship
        )?;
    }
    Ok(())
}

/// Tabs and newlines would break the row structure.
fn tsv_field(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}

fn print_edge_table_aligned<W: Write>(w: &mut W, rows: &[EdgeRecord]) -> io::Result<()> {
    if rows.is_empty() {
        writeln!(w, "No edges.")?;
        return Ok(());
    }

    let source_width = rows
        .iter()
        .map(|row| row.source_id.as_str().len())
        .max()
        .unwrap_or(0);
    let relation_width = rows
        .iter()
        .map(|row| row.relationship.len())
        .max()
        .unwrap_or(0);

    for row in rows {
        writeln!(
            w,
            "{:source_width$}  {:relation_width$}  {}",
            row.source_id.as_str(),
            row.relationship,
            row.target_id.as_str()
        )?;
    }
    Ok(())
}

/// Wrap text to fit within a given width, preserving existing line breaks.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| {
            if line.trim().is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, max_width)
                    .into_iter()
                    .map(std::borrow::Cow::into_owned)
                    .collect()
            }
        })
        .collect()
}
