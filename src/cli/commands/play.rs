//! Play command - interactive game against the Monte Carlo opponent

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, random, rngs::StdRng};

use crate::{
    montecarlo::{DEFAULT_TRIALS, MonteCarloConfig, choose_move},
    tictactoe::{Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the Monte Carlo opponent")]
pub struct PlayArgs {
    /// Board dimension
    #[arg(long, short = 'd', default_value_t = 3)]
    pub dim: usize,

    /// Trials the computer runs per move (10 is easy, 100+ is hard)
    #[arg(long, short = 't', default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Which side you play (`x` or `o`); X always moves first
    #[arg(long, default_value = "x")]
    pub human: String,

    /// Random seed for the computer opponent
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human = Player::from_token(&args.human)?;
    let config = MonteCarloConfig::new(args.trials);
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or_else(random));
    let mut game = Game::new(args.dim, Player::X)?;

    println!(
        "You play {human} on a {dim}x{dim} board. Enter moves as 'row col' (0-based).",
        dim = args.dim
    );

    while game.outcome().is_none() {
        println!("\n{}", game.board());
        let current = game.to_move();

        if current == human {
            let (row, col) = read_move(current)?;
            if let Err(err) = game.play(row, col) {
                println!("{err}");
                continue;
            }
        } else {
            let (row, col) = choose_move(game.board(), current, &config, &mut rng)?;
            println!("{current} plays ({row}, {col})");
            game.play(row, col)?;
        }
    }

    println!("\n{}", game.board());
    match game.outcome() {
        Some(GameOutcome::Win(winner)) if winner == human => println!("\nYou win!"),
        Some(GameOutcome::Win(winner)) => println!("\n{winner} wins."),
        _ => println!("\nDraw."),
    }

    Ok(())
}

/// Prompt until the user enters a parseable 'row col' pair.
fn read_move(player: Player) -> Result<(usize, usize)> {
    let stdin = io::stdin();
    loop {
        print!("{player} move> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("input closed before the game finished");
        }

        let mut parts = line.split_whitespace().map(str::parse::<usize>);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(row)), Some(Ok(col)), None) => return Ok((row, col)),
            _ => println!("enter two numbers, e.g. '0 2'"),
        }
    }
}
