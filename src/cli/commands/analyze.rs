//! Analyze command - inspect score grids and tie-break behavior

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::{SeedableRng, random, rngs::StdRng};

use crate::{
    analysis::{ScoreReport, selection_frequencies},
    cli::output::{create_spinner, print_kv, print_section},
    export::{write_score_grid_csv, write_square_scores_csv},
    montecarlo::{DEFAULT_TRIALS, MonteCarloConfig},
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Analyze selector behavior on a position")]
pub struct AnalyzeArgs {
    #[command(subcommand)]
    pub command: AnalyzeCommand,
}

#[derive(Subcommand, Debug)]
pub enum AnalyzeCommand {
    /// Show the accumulated score grid for a position
    Scores(ScoresArgs),

    /// Test tie-break fairness on a position
    Fairness(FairnessArgs),
}

#[derive(Parser, Debug)]
pub struct ScoresArgs {
    /// Board position as cell characters, e.g. 'XO. .X. ...'
    pub board: String,

    /// The deciding player (`x` or `o`)
    #[arg(long, short = 'p', default_value = "x")]
    pub player: String,

    /// Number of random playouts
    #[arg(long, short = 't', default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export per-square scores to a CSV file
    #[arg(long)]
    pub export_csv: Option<PathBuf>,

    /// Export the raw score grid as a CSV matrix
    #[arg(long)]
    pub grid_csv: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct FairnessArgs {
    /// Board position as cell characters, e.g. 'XO. .X. ...'
    pub board: String,

    /// The deciding player (`x` or `o`)
    #[arg(long, short = 'p', default_value = "x")]
    pub player: String,

    /// Number of random playouts per invocation
    #[arg(long, short = 't', default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Number of selector invocations to sample
    #[arg(long, short = 'n', default_value_t = 200)]
    pub invocations: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    match args.command {
        AnalyzeCommand::Scores(args) => execute_scores(args),
        AnalyzeCommand::Fairness(args) => execute_fairness(args),
    }
}

fn execute_scores(args: ScoresArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let player = Player::from_token(&args.player)?;
    let config = MonteCarloConfig::new(args.trials);
    let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or_else(random));

    let report = ScoreReport::generate(&board, player, &config, &mut rng)?;

    print_section("Score Grid");
    print_kv("Position", &report.board);
    print_kv("Deciding player", &player.to_string());
    print_kv("Trials", &report.trials.to_string());
    println!("\n{}", report.render());
    print_kv("Max score", &format!("{:.2}", report.max_score));
    print_kv(
        "Tied squares",
        &format!("{:?} ({} squares)", report.tied, report.tied.len()),
    );
    print_kv("Chosen", &format!("{:?}", report.chosen));

    if let Some(path) = &args.export_csv {
        write_square_scores_csv(&report, path)?;
        println!("\nPer-square scores exported to: {}", path.display());
    }
    if let Some(path) = &args.grid_csv {
        write_score_grid_csv(&report.scores, path)?;
        println!("Score grid exported to: {}", path.display());
    }

    Ok(())
}

fn execute_fairness(args: FairnessArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let player = Player::from_token(&args.player)?;
    let config = MonteCarloConfig::new(args.trials);
    let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or_else(random));

    let spinner = create_spinner(&format!(
        "Sampling {} selector invocations...",
        args.invocations
    ));
    let report = selection_frequencies(&board, player, &config, args.invocations, &mut rng)?;
    spinner.finish_and_clear();

    print_section("Tie-Break Fairness");
    print_kv("Position", &board.encode());
    print_kv("Deciding player", &player.to_string());
    print_kv("Invocations", &report.invocations.to_string());
    print_kv("Trials per invocation", &args.trials.to_string());

    println!();
    for ((row, col), count) in &report.counts {
        if *count > 0 {
            print_kv(
                &format!("({row}, {col})"),
                &format!(
                    "{count} ({:.1}%)",
                    *count as f64 / report.invocations as f64 * 100.0
                ),
            );
        }
    }

    println!();
    print_kv("Selected squares", &report.selected_squares.to_string());
    print_kv("Chi-square", &format!("{:.3}", report.chi_square));
    print_kv(
        "Degrees of freedom",
        &report.degrees_of_freedom.to_string(),
    );
    print_kv("p-value", &format!("{:.4}", report.p_value));

    Ok(())
}
