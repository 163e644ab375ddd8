use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use srs_trainer::due::due;
use srs_trainer::init::init;
use srs_trainer::rate::rate;
use srs_trainer::stats::stats;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Spaced-repetition trainer over a JSON card box.
#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new empty card box
    Init {
        /// Path to card box (JSON file)
        path: PathBuf,
    },
    /// Apply a review rating to a card
    Rate {
        path: PathBuf,
        /// Card identifier
        id: String,
        /// One of: again, hard, good, easy
        rating: String,
    },
    /// List card ids due for review, most overdue first
    Due {
        path: PathBuf,
        /// Maximum number of ids to list
        #[arg(long, default_value_t = srs_core::DEFAULT_DUE_LIMIT)]
        limit: usize,
    },
    /// Show card box and study statistics
    Stats {
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Cli::parse();

    match args.command {
        Command::Init { path } => init(&path),
        Command::Rate { path, id, rating } => rate(&path, &id, &rating),
        Command::Due { path, limit } => due(&path, limit),
        Command::Stats { path } => stats(&path),
    }
}
