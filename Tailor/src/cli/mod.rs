//! Tailor CLI - Command-line interface for dye recipes and sprite tinting

pub mod commands;
pub mod progress;

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;

use crate::config::TailorConfig;

#[derive(Parser)]
#[command(name = "tailor")]
#[command(about = "Tailor: dye recipes and tinted clothing sprites", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Run the Tailor CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => TailorConfig::load_from(path)?,
        None => TailorConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Using default config: {}", e);
            TailorConfig::default()
        }),
    };
    cli.command.execute(&config)?;

    Ok(())
}
