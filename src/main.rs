//! Rockpool main entry point
//!
//! This is the command-line transport for the Rockpool crawler: it
//! validates the seed argument, runs the crawl, and prints the resulting
//! URL list as JSON. No crawl logic lives here.

use anyhow::Context;
use clap::Parser;
use rockpool::config::{load_config, validate_config, Config};
use rockpool::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Rockpool: a bounded same-origin web crawler
///
/// Rockpool fetches pages breadth-first within the seed URL's origin,
/// retries transient server failures a bounded number of times, and prints
/// the URLs that answered HTTP 200 as a JSON array.
#[derive(Parser, Debug)]
#[command(name = "rockpool")]
#[command(version = "1.0.0")]
#[command(about = "A bounded same-origin web crawler", long_about = None)]
struct Cli {
    /// Seed URL to crawl from
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the maximum number of frontier slots to examine
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // An empty seed must never reach the engine.
    if cli.url.trim().is_empty() {
        anyhow::bail!("seed URL must not be empty");
    }

    // Load configuration, falling back to defaults when no file is given
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(limit) = cli.limit {
        config.crawler.max_frontier_slots = limit;
        validate_config(&config).context("invalid --limit")?;
    }

    tracing::info!(
        "Crawling {} (at most {} frontier slots)",
        cli.url,
        config.crawler.max_frontier_slots
    );

    let urls = crawl(config.crawler, &cli.url)
        .await
        .context("crawl aborted")?;

    tracing::info!("Crawl complete: {} pages fetched", urls.len());

    let json = if cli.pretty {
        serde_json::to_string_pretty(&urls)?
    } else {
        serde_json::to_string(&urls)?
    };
    println!("{}", json);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("rockpool=info,warn"),
            1 => EnvFilter::new("rockpool=debug,info"),
            2 => EnvFilter::new("rockpool=trace,debug"),
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
