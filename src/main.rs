//! # Geodex CLI
//!
//! The `geodex` binary drives the metadata pipeline: database
//! initialization, corpus ingestion, statistics, and record inspection.
//!
//! ## Usage
//!
//! ```bash
//! geodex --config ./config/geodex.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `geodex init` | Create the SQLite database and the three structures |
//! | `geodex ingest` | Harvest the corpus into the database and build indexes |
//! | `geodex stats` | Print row counts and index overview |
//! | `geodex get <id>` | Print one stored record's structured payload |

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use geodex::{config, db, get, ingest, stats, store};

/// Geodex — geospatial metadata harvesting and multi-modal SQLite indexing.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/geodex.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "geodex",
    about = "Geodex — geospatial metadata harvesting and multi-modal SQLite indexing",
    version,
    long_about = "Geodex ingests harvested geospatial metadata documents, normalizes them \
    against a canonical vocabulary, and materializes one SQLite database supporting \
    structured, full-text, and spatial queries over the same corpus."
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/geodex.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Creates the SQLite file and the three structures (documents,
    /// bounds, records_fts). Idempotent — running it again is safe and
    /// never touches existing structures.
    Init,

    /// Ingest the harvested corpus.
    ///
    /// Scans the corpus directory, normalizes and sanitizes each record,
    /// derives its spatial bound, writes all three rows per record, and
    /// builds the structured indexes once at the end. Records that fail
    /// are logged and skipped; they never abort the run.
    Ingest {
        /// Show the record count without writing to the database.
        #[arg(long)]
        dry_run: bool,

        /// Maximum number of records to process.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print database statistics.
    ///
    /// Row counts for documents, bounds, and full-text structures, plus
    /// the number of generated structured indexes.
    Stats,

    /// Print one stored record's structured payload by identifier.
    Get {
        /// Record identifier (the canonical `id` field).
        id: String,
    },
}

fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    init_tracing(&cfg.log.filter);

    match cli.command {
        Commands::Init => {
            let pool = db::connect(&cfg).await?;
            store::ensure_schema(&pool).await?;
            pool.close().await;
            println!("Database initialized successfully.");
        }
        Commands::Ingest { dry_run, limit } => {
            ingest::run_ingest(&cfg, dry_run, limit).await?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg).await?;
        }
        Commands::Get { id } => {
            get::run_get(&cfg, &id).await?;
        }
    }

    Ok(())
}
