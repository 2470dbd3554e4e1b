//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `path`: Print the shortest path between two terms
//! - `neighborhood`: Print the path's one-hop hierarchy neighborhood by level
//! - `edges`: Print the neighborhood's edges as a flat table
//! - `init`: Write a default `ontopath.yaml`
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all query commands)
//! - `--config`: Use this config file instead of searching for one
//! - `--data`: Read terms from this file instead of the configured one
//!
//! # Example
//!
//! ```bash
//! ontopath path GO:0097435 GO:0034314
//! ontopath neighborhood GO:0097435 GO:0034314 --dot | dot -Tsvg > path.svg
//! ontopath --json edges GO:0097435 GO:0034314
//! ```

mod args;
mod execute;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{EdgesArgs, InitArgs, NeighborhoodArgs, PathArgs, QueryArgs};
pub use validators::validate_term_id;

/// Ontopath - shortest paths through an ontology
///
/// Finds how two ontology terms are connected and shows the surrounding
/// `is_a` hierarchy, arranged by depth.
#[derive(Parser, Debug)]
#[command(name = "ontopath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of the nearest `ontopath.yaml`
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Term records file (JSON Lines), overriding the config
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the shortest path between two terms
    ///
    /// Any relation counts as a link and links are followed in either
    /// direction.
    Path(PathArgs),

    /// Print the hierarchy neighborhood of the shortest path
    ///
    /// Shows every path term plus its direct `is_a` parents and children,
    /// grouped by depth. Use `--dot` to get a Graphviz drawing.
    Neighborhood(NeighborhoodArgs),

    /// Print the neighborhood's edges as a table
    Edges(EdgesArgs),

    /// Write a default config file in the current directory
    Init(InitArgs),
}

impl Cli {
    /// Parse CLI arguments from the environment
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments, `--help` or `--version`.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    ///
    /// # Errors
    ///
    /// Returns an error if config or term loading fails, a term is unknown,
    /// the hierarchy is cyclic, or output cannot be written.
    pub async fn execute(&self) -> Result<()> {
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        let sources = execute::Sources {
            config: self.config.as_deref(),
            data: self.data.as_deref(),
        };

        match &self.command {
            Some(Commands::Path(args)) => execute::execute_path(&sources, args, output_mode).await,
            Some(Commands::Neighborhood(args)) => {
                execute::execute_neighborhood(&sources, args, output_mode).await
            }
            Some(Commands::Edges(args)) => {
                execute::execute_edges(&sources, args, output_mode).await
            }
            Some(Commands::Init(args)) => execute::execute_init(args).await,
            None => {
                println!("ontopath {}", env!("CARGO_PKG_VERSION"));
                println!("Run 'ontopath --help' for usage information.");
                Ok(())
            }
        }
    }
}
