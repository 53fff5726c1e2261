//! Move selection from accumulated trial scores

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    scores::{ScoreGrid, ScoreWeights, accumulate},
    trial::run_trial,
};
use crate::tictactoe::{Board, Player};

/// Number of trials played per move decision by default.
///
/// 10 is an easy opponent, 100 and up plays well.
pub const DEFAULT_TRIALS: usize = 100;

/// Configuration for the Monte Carlo move selector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    /// Number of random playouts per decision
    pub trials: usize,

    /// Scoring weights applied when folding each trial
    pub weights: ScoreWeights,
}

impl MonteCarloConfig {
    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            weights: ScoreWeights::default(),
        }
    }

    /// Validate the trial count and weights.
    ///
    /// # Errors
    ///
    /// Returns error if `trials` is zero or a weight is negative or
    /// non-finite.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.trials == 0 {
            return Err(crate::Error::InvalidTrialCount {
                trials: self.trials,
            });
        }
        self.weights.validate()
    }
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TRIALS)
    }
}

/// Run the configured number of trials from `board` and return the
/// accumulated score grid.
///
/// Each trial plays out a fresh clone of `board` starting with `player`
/// (the deciding player) and folds the terminal position into the grid.
/// The real board is never mutated.
///
/// # Errors
///
/// Returns error if the configuration is invalid.
pub fn score_squares<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    config: &MonteCarloConfig,
    rng: &mut R,
) -> Result<ScoreGrid, crate::Error> {
    config.validate()?;

    let mut scores = ScoreGrid::new(board.dim())?;
    for _ in 0..config.trials {
        let mut trial_board = board.clone();
        run_trial(&mut trial_board, player, rng)?;
        accumulate(&mut scores, &trial_board, player, &config.weights);
    }
    Ok(scores)
}

/// Pick the best move for `player` on `board`.
///
/// Runs the trial loop, then returns the empty square with the maximal
/// accumulated score. When several empty squares tie for the maximum, one
/// of them is chosen uniformly at random; a board with exactly one empty
/// square yields that square without ambiguity.
///
/// # Errors
///
/// Returns error if the configuration is invalid or the board has no
/// empty squares. Callers are expected to check for a finished game
/// before asking for a move.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use carlo::{
///     montecarlo::{MonteCarloConfig, choose_move},
///     tictactoe::{Board, Player},
/// };
///
/// let board = Board::from_string("XO. XO. ...").unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
/// let (row, col) = choose_move(&board, Player::X, &MonteCarloConfig::new(50), &mut rng).unwrap();
/// assert!(board.is_empty_square(row, col));
/// ```
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    config: &MonteCarloConfig,
    rng: &mut R,
) -> Result<(usize, usize), crate::Error> {
    let scores = score_squares(board, player, config, rng)?;
    best_square(board, &scores, rng)
}

/// Pick the highest-scoring empty square, breaking ties uniformly.
///
/// # Errors
///
/// Returns error if the board has no empty squares.
pub fn best_square<R: Rng + ?Sized>(
    board: &Board,
    scores: &ScoreGrid,
    rng: &mut R,
) -> Result<(usize, usize), crate::Error> {
    let (best, _) = tied_squares(board, scores)?;
    Ok(best[rng.random_range(0..best.len())])
}

/// All empty squares achieving the maximal score, with that score.
///
/// # Errors
///
/// Returns error if the board has no empty squares.
pub fn tied_squares(
    board: &Board,
    scores: &ScoreGrid,
) -> Result<(Vec<(usize, usize)>, f64), crate::Error> {
    let candidates = board.empty_squares();
    if candidates.is_empty() {
        return Err(crate::Error::NoValidMoves);
    }

    let max_score = candidates
        .iter()
        .map(|&(row, col)| scores.get(row, col))
        .fold(f64::NEG_INFINITY, f64::max);
    let best: Vec<(usize, usize)> = candidates
        .into_iter()
        .filter(|&(row, col)| scores.get(row, col) == max_score)
        .collect();

    Ok((best, max_score))
}
