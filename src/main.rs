//! Catwalk main entry point
//!
//! Command-line interface for the catalog ETL pipeline.

use catwalk::config::{load_config, Config};
use catwalk::pipeline;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Catwalk: a catalog ETL pipeline
///
/// Scrapes product listings from a paginated catalog site, normalizes
/// them into a canonical tabular schema, and loads the result into CSV,
/// SQLite, and spreadsheet sinks.
#[derive(Parser, Debug)]
#[command(name = "catwalk")]
#[command(version = "1.0.0")]
#[command(about = "Catalog scrape-transform-load pipeline", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Stop after writing the transformed CSV, without running the sinks
    #[arg(long)]
    skip_sinks: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    let report = match pipeline::run(&config, cli.skip_sinks).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Pipeline failed: {}", e);
            return Err(e.into());
        }
    };

    println!("Scraped rows:     {}", report.scraped_rows);
    println!("Transformed rows: {}", report.transformed_rows);
    for outcome in &report.sink_outcomes {
        match &outcome.result {
            Ok(rows) => println!("Sink '{}': {} rows written", outcome.sink, rows),
            Err(e) => println!("Sink '{}': FAILED ({})", outcome.sink, e),
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("catwalk=info,warn"),
            1 => EnvFilter::new("catwalk=debug,info"),
            2 => EnvFilter::new("catwalk=trace,debug"),
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
