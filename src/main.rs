//! Offer-Harvest main entry point
//!
//! This is the command-line interface for the Offer-Harvest job-offer scraper.

use anyhow::Context;
use clap::{Parser, Subcommand};
use offer_harvest::config::{load_config_with_hash, Config};
use offer_harvest::crawler::{collect_listings, enrich_details};
use offer_harvest::storage::{CsvStore, DatasetStore, SqliteStore};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Offer-Harvest: a job-offer scraper for Tecnoempleo
///
/// Run `listings` first to collect the offers of a keyword search, then
/// `details` to enrich each collected offer from its own page.
#[derive(Parser, Debug)]
#[command(name = "offer-harvest")]
#[command(version)]
#[command(about = "Harvests job offers from Tecnoempleo", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl the listing pages of a keyword search and save the offers found
    Listings {
        /// Search keyword
        #[arg(short, long, default_value = "data")]
        keyword: String,

        /// Number of listing pages to visit
        #[arg(long)]
        max_pages: Option<u32>,

        /// Seconds to wait between requests
        #[arg(long, value_name = "SECONDS")]
        delay: Option<u64>,

        /// Listing dataset file to write
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Enrich every offer of a listing dataset from its detail page
    Details {
        /// Listing dataset file to read
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Seconds to wait between requests
        #[arg(long, value_name = "SECONDS")]
        delay: Option<u64>,

        /// Detail dataset file to write
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    match cli.command {
        Command::Listings {
            keyword,
            max_pages,
            delay,
            output,
        } => {
            if let Some(max_pages) = max_pages {
                config.crawler.max_pages = max_pages;
            }
            if let Some(delay) = delay {
                config.crawler.delay_ms = delay.saturating_mul(1000);
            }
            if let Some(output) = output {
                config.output.listings_path = output.display().to_string();
            }
            handle_listings(&config, &keyword).await
        }
        Command::Details {
            input,
            delay,
            output,
        } => {
            if let Some(input) = input {
                config.output.listings_path = input.display().to_string();
            }
            if let Some(delay) = delay {
                config.crawler.delay_ms = delay.saturating_mul(1000);
            }
            if let Some(output) = output {
                config.output.details_path = output.display().to_string();
            }
            handle_details(&config).await
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("offer_harvest=info,warn"),
            1 => EnvFilter::new("offer_harvest=debug,info"),
            2 => EnvFilter::new("offer_harvest=trace,debug"),
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

/// Handles the `listings` mode: crawl, deduplicate, save
async fn handle_listings(config: &Config, keyword: &str) -> anyhow::Result<()> {
    let (offers, _stats) = collect_listings(config, keyword).await?;

    let mut store = CsvStore::from_config(&config.output);
    let saved = store
        .save_listings(&offers)
        .with_context(|| format!("Failed to write {}", store.listings_path().display()))?;
    tracing::info!(
        "Saved {} job offers to {}",
        saved,
        store.listings_path().display()
    );

    if let Some(db_path) = &config.output.database_path {
        let mut mirror = open_mirror(db_path)?;
        mirror.save_listings(&offers)?;
        tracing::info!("Mirrored {} job offers to {}", saved, db_path);
    }

    Ok(())
}

/// Handles the `details` mode: load listings, enrich, save
async fn handle_details(config: &Config) -> anyhow::Result<()> {
    let mut store = CsvStore::from_config(&config.output);
    let identities = store
        .load_listings()
        .with_context(|| format!("Failed to read {}", store.listings_path().display()))?;
    tracing::info!(
        "Loaded {} URLs from {}",
        identities.len(),
        store.listings_path().display()
    );

    let (details, _stats) = enrich_details(config, &identities).await?;

    let saved = store
        .save_details(&details)
        .with_context(|| format!("Failed to write {}", store.details_path().display()))?;
    tracing::info!(
        "Saved {} detailed offers to {}",
        saved,
        store.details_path().display()
    );

    if let Some(db_path) = &config.output.database_path {
        let mut mirror = open_mirror(db_path)?;
        mirror.save_details(&details)?;
        tracing::info!("Mirrored {} detailed offers to {}", saved, db_path);
    }

    Ok(())
}

fn open_mirror(db_path: &str) -> anyhow::Result<SqliteStore> {
    SqliteStore::new(Path::new(db_path))
        .with_context(|| format!("Failed to open database {}", db_path))
}
