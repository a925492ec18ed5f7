//! wordquiz CLI: terminal vocabulary quiz.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "wordquiz", version, about = "Flashcard-style vocabulary quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a quiz session
    Play {
        /// Word file (`source;target` per line)
        #[arg(long)]
        words: Option<PathBuf>,

        /// Direction: forward (1) or reverse (2). Asked interactively if unset
        #[arg(long)]
        mode: Option<String>,

        /// Seed for a reproducible word order
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and sample word file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordquiz=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            words,
            mode,
            seed,
            config,
        } => commands::play::execute(words, mode, seed, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
