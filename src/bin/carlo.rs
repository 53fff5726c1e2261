//! carlo CLI - Monte Carlo move selection toolkit for Tic-Tac-Toe
//!
//! This CLI provides a unified interface for:
//! - Playing against the Monte Carlo opponent
//! - Evaluating the selector against baseline opponents
//! - Analyzing score grids and tie-break behavior

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "carlo")]
#[command(version, about = "Monte Carlo move selection toolkit for Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the Monte Carlo opponent
    Play(carlo::cli::commands::play::PlayArgs),

    /// Evaluate the Monte Carlo agent against opponents
    Evaluate(carlo::cli::commands::evaluate::EvaluateArgs),

    /// Analyze score grids and tie-break behavior
    Analyze(carlo::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => carlo::cli::commands::play::execute(args),
        Commands::Evaluate(args) => carlo::cli::commands::evaluate::execute(args),
        Commands::Analyze(args) => carlo::cli::commands::analyze::execute(args),
    }
}
