//! Monte Carlo move selection
//!
//! The selector estimates the value of each empty square by playing many
//! random games to completion from the current position and crediting the
//! squares the eventual winner occupied (and debiting the loser's). The
//! empty square with the highest accumulated score is played, ties broken
//! uniformly at random.

pub mod scores;
pub mod selector;
pub mod trial;

pub use scores::{ScoreGrid, ScoreWeights, accumulate};
pub use selector::{
    DEFAULT_TRIALS, MonteCarloConfig, best_square, choose_move, score_squares, tied_squares,
};
pub use trial::run_trial;
