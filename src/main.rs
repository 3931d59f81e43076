//! APS-Harvest main entry point
//!
//! Runs the full crawl-then-audit sequence to completion, or aborts with a
//! non-zero status on the first unhandled error.

use anyhow::Context;
use aps_harvest::config::{builtin_config, load_config};
use aps_harvest::crawler::run_harvest;
use aps_harvest::output::audit_tree;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// APS-Harvest: abstract harvester for APS DNP meetings
///
/// Crawls every configured meeting's epitome page, follows session and
/// abstract links, cross-validates the extracted fields, writes one flat
/// text record per abstract, and finishes with a format audit of the
/// persisted tree.
#[derive(Parser, Debug)]
#[command(name = "aps-harvest")]
#[command(version)]
#[command(about = "Abstract harvester for APS DNP meetings", long_about = None)]
struct Cli {
    /// TOML configuration file overriding the built-in meeting table
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Audit an existing output tree without crawling
    #[arg(long)]
    audit_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load the meeting table
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => builtin_config(),
    };

    let root = config.output.root_dir.clone();

    if !cli.audit_only {
        tracing::info!(
            "Harvesting {} meetings into {}",
            config.meetings.len(),
            root
        );
        run_harvest(config).await?;
    }

    // Post-crawl audit of the persisted tree
    let report = audit_tree(Path::new(&root))?;
    tracing::info!("Audit passed: {} records in {}", report.files_checked, root);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("aps_harvest=info,warn"),
            1 => EnvFilter::new("aps_harvest=debug,info"),
            2 => EnvFilter::new("aps_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
