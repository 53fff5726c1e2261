//! Evaluate command - run the Monte Carlo agent against an opponent

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    agents::{BlockingAgent, MonteCarloAgent, RandomAgent},
    cli::output::{print_kv, print_section},
    montecarlo::{DEFAULT_TRIALS, MonteCarloConfig},
    pipeline::{
        JsonlObserver, MetricsObserver, ProgressObserver, SeriesConfig, SeriesResult, SeriesRunner,
    },
    ports::Agent,
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate the Monte Carlo agent against an opponent")]
pub struct EvaluateArgs {
    /// Opponent to evaluate against
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: String,

    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Board dimension
    #[arg(long, short = 'd', default_value_t = 3)]
    pub dim: usize,

    /// Trials per move for the evaluated agent
    #[arg(long, short = 't', default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Trials per move for a `montecarlo` opponent (defaults to --trials)
    #[arg(long)]
    pub opponent_trials: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which side the evaluated agent plays (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub agent_player: String,

    /// Which side makes the first move (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first_player: String,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Write a JSONL log of every game
    #[arg(long)]
    pub log_games: Option<PathBuf>,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let agent_player = Player::from_token(&args.agent_player)?;
    let first_player = Player::from_token(&args.first_player)?;

    let config = MonteCarloConfig::new(args.trials);
    config.validate()?;
    let mut agent = MonteCarloAgent::new("Monte Carlo".to_string(), config);

    let mut opponent: Box<dyn Agent> = match args.opponent.to_lowercase().as_str() {
        "random" => Box::new(RandomAgent::new("Random".to_string())),
        "blocking" => Box::new(BlockingAgent::new("Blocking".to_string())),
        "montecarlo" => {
            let trials = args.opponent_trials.unwrap_or(args.trials);
            let opponent_config = MonteCarloConfig::new(trials);
            opponent_config.validate()?;
            Box::new(MonteCarloAgent::new(
                format!("Monte Carlo ({trials} trials)"),
                opponent_config,
            ))
        }
        other => {
            anyhow::bail!(
                "Unknown opponent type: '{other}'. Supported: random, blocking, montecarlo"
            );
        }
    };

    print_section("Evaluation Configuration");
    print_kv("Agent", agent.name());
    print_kv("Opponent", opponent.name());
    print_kv("Board", &format!("{dim}x{dim}", dim = args.dim));
    print_kv("Trials per move", &args.trials.to_string());
    print_kv(
        "Agent plays as",
        &format!("{agent_player} (first player: {first_player})"),
    );
    print_kv("Games", &args.games.to_string());
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }

    let series_config = SeriesConfig {
        dim: args.dim,
        num_games: args.games,
        seed: args.seed,
        agent_player,
        first_player,
    };

    let metrics = MetricsObserver::new(agent_player);
    let metrics_handle = metrics.handle();

    let mut runner = SeriesRunner::new(series_config)
        .with_observer(Box::new(ProgressObserver::new(agent_player)))
        .with_observer(Box::new(metrics));
    if let Some(path) = &args.log_games {
        runner = runner.with_observer(Box::new(JsonlObserver::create(path)?));
    }

    println!();
    let result = runner.run(&mut agent, opponent.as_mut())?;

    print_section("Evaluation Results");
    print_kv("Total games", &result.total_games.to_string());
    print_kv(
        "Wins",
        &format!("{} ({:.1}%)", result.wins, result.win_rate * 100.0),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", result.draws, result.draw_rate * 100.0),
    );
    print_kv(
        "Losses",
        &format!("{} ({:.1}%)", result.losses, result.loss_rate * 100.0),
    );
    print_kv(
        "Avg game length",
        &format!("{:.1} moves", metrics_handle.average_game_length()),
    );

    if let Some(path) = &args.export {
        export_results(&result, &args, path)?;
        println!("\nResults exported to: {}", path.display());
    }
    if let Some(path) = &args.log_games {
        println!("Game log written to: {}", path.display());
    }

    Ok(())
}

/// Export evaluation results to JSON
fn export_results(result: &SeriesResult, args: &EvaluateArgs, path: &PathBuf) -> Result<()> {
    use std::fs::File;

    #[derive(Serialize)]
    struct EvaluationExport<'a> {
        configuration: ConfigurationSection<'a>,
        result: &'a SeriesResult,
    }

    #[derive(Serialize)]
    struct ConfigurationSection<'a> {
        opponent: &'a str,
        dim: usize,
        trials: usize,
        games: usize,
        agent_player: &'a str,
        first_player: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    }

    let export = EvaluationExport {
        configuration: ConfigurationSection {
            opponent: &args.opponent,
            dim: args.dim,
            trials: args.trials,
            games: args.games,
            agent_player: &args.agent_player,
            first_player: &args.first_player,
            seed: args.seed,
        },
        result,
    };

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}
