//! Blocking agent

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    ports::Agent,
    tictactoe::{Board, LineAnalyzer, Player},
};

/// Policy that blocks immediate opponent wins, otherwise plays randomly.
///
/// This agent will:
/// 1. Complete its own winning line if one square away
/// 2. Block the opponent's winning square if they are one square away
/// 3. Otherwise, play uniformly at random
pub struct BlockingAgent {
    name: String,
    rng: StdRng,
}

impl BlockingAgent {
    /// Create a new blocking agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a blocking agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn line_completion(board: &Board, player: Player) -> Option<(usize, usize)> {
        let analyzer = LineAnalyzer::new(board.dim());
        analyzer
            .winning_squares(board.cells(), player)
            .into_iter()
            .min()
    }
}

impl Agent for BlockingAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<(usize, usize)> {
        if let Some(square) = Self::line_completion(board, player) {
            return Ok(square);
        }
        if let Some(square) = Self::line_completion(board, player.opponent()) {
            return Ok(square);
        }

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
