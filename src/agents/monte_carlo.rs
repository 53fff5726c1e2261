//! Monte Carlo agent

use rand::{SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    montecarlo::{MonteCarloConfig, choose_move},
    ports::Agent,
    tictactoe::{Board, Player},
};

/// Agent wrapper around the Monte Carlo move selector
pub struct MonteCarloAgent {
    name: String,
    config: MonteCarloConfig,
    rng: StdRng,
}

impl MonteCarloAgent {
    /// Create a new agent with the given selector configuration
    pub fn new(name: String, config: MonteCarloConfig) -> Self {
        Self {
            name,
            config,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new agent with a deterministic seed
    pub fn with_seed(name: String, config: MonteCarloConfig, seed: u64) -> Self {
        Self {
            name,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The selector configuration
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }
}

impl Agent for MonteCarloAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<(usize, usize)> {
        choose_move(board, player, &self.config, &mut self.rng)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
