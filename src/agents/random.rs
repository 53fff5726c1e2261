//! Random baseline agent

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    ports::Agent,
    tictactoe::{Board, Player},
};

/// Uniform random policy (baseline)
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _player: Player) -> Result<(usize, usize)> {
        let squares = board.empty_squares();
        if squares.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        Ok(squares[self.rng.random_range(0..squares.len())])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
