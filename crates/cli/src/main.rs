//! Delights CLI - data-file management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the data directory and empty collection files
//! delights-cli init
//!
//! # Seed the demo menu (file-backed store only)
//! delights-cli seed
//!
//! # Seed even when the menu already has items
//! delights-cli seed --force
//! ```
//!
//! Both commands honor `DATA_DIR` (and a `.env` file), like the server; pass
//! `--data-dir` to override.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "delights-cli")]
#[command(author, version, about = "Delights by Jummy CLI tools")]
struct Cli {
    /// Data directory holding the JSON collection files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and empty collection files
    Init,
    /// Write the demo menu through the file store
    Seed {
        /// Seed even when the menu already has items
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        let config = delights_server::config::AppConfig::from_env();
        config.map_or_else(|_| PathBuf::from("data"), |c| c.data_dir)
    });

    match cli.command {
        Commands::Init => commands::init::run(&data_dir)?,
        Commands::Seed { force } => commands::seed::run(&data_dir, force).await?,
    }
    Ok(())
}
