//! codelens - Entry Point
//!
//! Binary entry point for the `codelens` CLI. Lives in the facade crate to
//! avoid doc output filename collision with the library crate of the same
//! name (cargo issue #6313).
//!
//! ## Subcommands
//!
//! | Subcommand | Description |
//! |------------|-------------|
//! | `index`      | Build or incrementally update the index for a project root |
//! | `search`     | Run a semantic/structural query against an existing index |
//! | `duplicates` | Scan an indexed project for near-duplicate chunks |
//! | `watch`      | Index once, then keep the index in sync as files change |

// Force-link codelens-providers to ensure linkme inventory registrations are included
extern crate codelens_providers;

use clap::{Parser, Subcommand};
use codelens_infrastructure::config::Settings;
use std::path::PathBuf;

/// Command line interface for codelens
#[derive(Parser, Debug)]
#[command(name = "codelens")]
#[command(about = "A hybrid semantic and structural code search engine")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file; defaults to `codelens.toml` in the project root
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build or incrementally update the index for `root`
    Index {
        /// Project root to index
        root: PathBuf,
        /// Force a full rebuild, ignoring the existing sidecar
        #[arg(long)]
        force: bool,
    },
    /// Run a query against an already-indexed project
    Search {
        /// Project root to search
        root: PathBuf,
        /// Query text
        query: String,
        /// Maximum results to return
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Scan an indexed project for near-duplicate chunks
    Duplicates {
        /// Project root to scan
        root: PathBuf,
    },
    /// Index once, then keep the index in sync as files change
    Watch {
        /// Project root to watch
        root: PathBuf,
    },
}

/// Entry point: loads configuration, sets up logging, and dispatches to the
/// use case selected by [`Command`].
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    codelens_infrastructure::logging::init(&settings.logging)?;

    match cli.command {
        Command::Index { root, force } => codelens_infrastructure::cli::run_index(&settings, &root, force).await,
        Command::Search { root, query, limit } => {
            codelens_infrastructure::cli::run_search(&settings, &root, &query, limit).await
        }
        Command::Duplicates { root } => codelens_infrastructure::cli::run_duplicates(&settings, &root).await,
        Command::Watch { root } => codelens_infrastructure::cli::run_watch(&settings, &root).await,
    }
    .map_err(|e| Box::<dyn std::error::Error>::from(e.to_string()))
}
