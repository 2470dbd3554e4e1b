//! Command execution logic.

use anyhow::{Context, Result};
use std::path::Path;

use super::args::{EdgesArgs, InitArgs, NeighborhoodArgs, PathArgs, QueryArgs};
use crate::config::{self, LoadedConfig};
use crate::graph::{build_graphs, OntologyGraphs};
use crate::loader::{JsonlTermSource, TermSource};
use crate::output::{self, OutputMode, TableFormat};
use crate::query::{run_query, QueryResult};

/// Where the config and term records come from.
#[derive(Debug, Clone, Copy)]
pub(super) struct Sources<'a> {
    /// Explicit config file
    pub config: Option<&'a Path>,
    /// Explicit term file
    pub data: Option<&'a Path>,
}

/// Execute the path command
pub(super) async fn execute_path(
    sources: &Sources<'_>,
    args: &PathArgs,
    output_mode: OutputMode,
) -> Result<()> {
    if let Some(result) = prepare(sources, &args.query, output_mode).await? {
        output::print_path(&result, output_mode)?;
    }
    Ok(())
}

/// Execute the neighborhood command
pub(super) async fn execute_neighborhood(
    sources: &Sources<'_>,
    args: &NeighborhoodArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let Some(result) = prepare(sources, &args.query, output_mode).await? else {
        return Ok(());
    };

    let layout = result.layout();
    if args.dot && output_mode == OutputMode::Text {
        output::print_dot(&layout, &dot_title(&result))?;
    } else {
        output::print_layout(&layout, output_mode)?;
    }
    Ok(())
}

/// Execute the edges command
pub(super) async fn execute_edges(
    sources: &Sources<'_>,
    args: &EdgesArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let Some(result) = prepare(sources, &args.query, output_mode).await? else {
        return Ok(());
    };

    let format = if args.tsv {
        TableFormat::Tsv
    } else {
        TableFormat::Aligned
    };
    output::print_edge_table(&result.edge_table(), output_mode, format)?;
    Ok(())
}

/// Execute the init command
pub(super) async fn execute_init(args: &InitArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;

    let path = config::init(&current_dir, args.data_file.as_deref()).await?;

    if !args.quiet {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Load everything a query needs and run it.
///
/// Returns `None` after reporting "no path" when the terms are disconnected.
async fn prepare(
    sources: &Sources<'_>,
    query: &QueryArgs,
    output_mode: OutputMode,
) -> Result<Option<QueryResult>> {
    let current_dir = std::env::current_dir()?;
    let loaded = config::load_config(sources.config, &current_dir).await?;
    let (start, end) = loaded
        .config
        .resolve_query(query.start.clone(), query.end.clone())?;

    let graphs = load_graphs(&loaded, sources.data).await?;
    let result = run_query(&graphs, &start, &end)?;

    if result.is_none() {
        output::print_no_path(start.as_str(), end.as_str(), output_mode)?;
    }
    Ok(result)
}

/// Read the term file and build both graphs.
async fn load_graphs(loaded: &LoadedConfig, data: Option<&Path>) -> Result<OntologyGraphs> {
    let data_file = data.map_or_else(|| loaded.data_file(), Path::to_path_buf);
    let source = JsonlTermSource::new(&data_file);

    let terms = source
        .load()
        .await
        .with_context(|| format!("Failed to load terms from '{}'", data_file.display()))?;

    let graphs = build_graphs(&terms.terms);
    tracing::info!(
        terms = graphs.undirected.node_count(),
        links = graphs.undirected.edge_count(),
        is_a_edges = graphs.hierarchy.edge_count(),
        "Built ontology graphs"
    );
    Ok(graphs)
}

fn dot_title(result: &QueryResult) -> String {
    let name_of = |id: &crate::domain::TermId| {
        result
            .steps
            .iter()
            .find(|step| &step.id == id)
            .map(|step| step.name.clone())
            .unwrap_or_default()
    };
    format!(
        "{} ({}) to {} ({})",
        result.start,
        name_of(&result.start),
        result.end,
        name_of(&result.end)
    )
}
