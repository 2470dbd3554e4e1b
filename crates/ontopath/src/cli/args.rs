//! CLI argument structs for all commands.

use clap::{Args, Parser};
use std::path::PathBuf;

use super::validators::validate_term_id;
use crate::domain::TermId;

/// The pair of terms a query connects.
///
/// Either term may be omitted when the config file supplies it.
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// First term identifier (e.g., `GO:0097435`)
    #[arg(value_parser = validate_term_id)]
    pub start: Option<TermId>,

    /// Second term identifier (e.g., `GO:0034314`)
    #[arg(value_parser = validate_term_id)]
    pub end: Option<TermId>,
}

/// Arguments for the `path` command
#[derive(Parser, Debug, Clone)]
pub struct PathArgs {
    /// Terms to connect
    #[command(flatten)]
    pub query: QueryArgs,
}

/// Arguments for the `neighborhood` command
#[derive(Parser, Debug, Clone)]
pub struct NeighborhoodArgs {
    /// Terms to connect
    #[command(flatten)]
    pub query: QueryArgs,

    /// Emit Graphviz DOT instead of a level listing
    #[arg(long)]
    pub dot: bool,
}

/// Arguments for the `edges` command
#[derive(Parser, Debug, Clone)]
pub struct EdgesArgs {
    /// Terms to connect
    #[command(flatten)]
    pub query: QueryArgs,

    /// Emit tab-separated values with a header row
    #[arg(long)]
    pub tsv: bool,
}

/// Arguments for the `init` command
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Term file to record in the new config
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Suppress output messages
    #[arg(short, long)]
    pub quiet: bool,
}
