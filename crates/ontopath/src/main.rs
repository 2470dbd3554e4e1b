//! Ontopath CLI binary.

use anyhow::Result;
use ontopath::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the ontopath CLI.
///
/// Uses tokio's `current_thread` runtime; the only I/O is reading one file.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Controlled via RUST_LOG, e.g. RUST_LOG=ontopath=debug,ontopath_jsonl=trace
    // Logs go to stderr so piped DOT, TSV, and JSON output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ontopath=info,ontopath_jsonl=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting ontopath CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Ontopath CLI completed successfully");
    Ok(())
}
