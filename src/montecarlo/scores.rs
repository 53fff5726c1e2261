//! Per-square score accumulation across trials

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Cell, GameOutcome, Player};

/// Weights applied when crediting squares after a trial.
///
/// `current` weights squares occupied by the deciding player, `other`
/// weights squares occupied by the opponent. Both default to 1.0; the
/// ratio is a tunable difficulty parameter with no asserted "correct"
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub current: f64,
    pub other: f64,
}

impl ScoreWeights {
    pub fn new(current: f64, other: f64) -> Self {
        Self { current, other }
    }

    /// Validate that both weights are non-negative and finite.
    ///
    /// # Errors
    ///
    /// Returns error naming the offending value otherwise.
    pub fn validate(&self) -> Result<(), crate::Error> {
        for value in [self.current, self.other] {
            if !value.is_finite() || value < 0.0 {
                return Err(crate::Error::InvalidWeight { value });
            }
        }
        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            current: 1.0,
            other: 1.0,
        }
    }
}

/// An NxN grid of accumulated square scores.
///
/// A fresh grid is created per move decision, folded across all trials,
/// and discarded once the move is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreGrid {
    dim: usize,
    values: Vec<f64>,
}

impl ScoreGrid {
    /// Create a zeroed grid of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns error if `dim` is zero.
    pub fn new(dim: usize) -> Result<Self, crate::Error> {
        if dim == 0 {
            return Err(crate::Error::InvalidDimension { dim });
        }
        Ok(ScoreGrid {
            dim,
            values: vec![0.0; dim * dim],
        })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Score at (row, col)
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.dim + col]
    }

    /// Add a delta to the score at (row, col)
    pub fn add(&mut self, row: usize, col: usize, delta: f64) {
        self.values[row * self.dim + col] += delta;
    }

    /// Iterate over all squares with their scores, row-major
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| ((i / self.dim, i % self.dim), v))
    }

    /// Sum of absolute scores across the grid
    pub fn total_magnitude(&self) -> f64 {
        self.values.iter().map(|v| v.abs()).sum()
    }
}

/// Fold one completed trial into the score grid.
///
/// A draw leaves the grid untouched. Otherwise every square occupied by
/// the winner gains `current * current_mod + other * other_mod` and every
/// square occupied by the loser loses `current * other_mod + other *
/// current_mod`, where `current_mod` is 1 when the winner is the deciding
/// player and 0 otherwise. Empty squares are never touched.
///
/// A board that is not yet terminal contributes nothing.
pub fn accumulate(scores: &mut ScoreGrid, board: &Board, decider: Player, weights: &ScoreWeights) {
    let winner = match board.outcome() {
        Some(GameOutcome::Win(winner)) => winner,
        Some(GameOutcome::Draw) | None => return,
    };

    let (current_mod, other_mod) = if winner == decider {
        (1.0, 0.0)
    } else {
        (0.0, 1.0)
    };
    let reward = weights.current * current_mod + weights.other * other_mod;
    let penalty = weights.current * other_mod + weights.other * current_mod;

    for row in 0..board.dim() {
        for col in 0..board.dim() {
            match board.get(row, col) {
                cell if cell == winner.to_cell() => scores.add(row, col, reward),
                Cell::Empty => {}
                _ => scores.add(row, col, -penalty),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_is_noop() {
        let board = Board::from_string("XOX XXO OXO").unwrap();
        let mut scores = ScoreGrid::new(3).unwrap();
        accumulate(&mut scores, &board, Player::X, &ScoreWeights::default());
        assert_eq!(scores, ScoreGrid::new(3).unwrap());
    }

    #[test]
    fn test_non_terminal_board_is_noop() {
        let board = Board::from_string("XO. ... ...").unwrap();
        let mut scores = ScoreGrid::new(3).unwrap();
        accumulate(&mut scores, &board, Player::X, &ScoreWeights::default());
        assert_eq!(scores.total_magnitude(), 0.0);
    }

    #[test]
    fn test_decider_win_rewards_winner_squares() {
        // X wins the top row; X decided
        let board = Board::from_string("XXX OO. ...").unwrap();
        let mut scores = ScoreGrid::new(3).unwrap();
        accumulate(&mut scores, &board, Player::X, &ScoreWeights::default());

        // current_mod = 1: X squares get +current, O squares get -other
        for col in 0..3 {
            assert_eq!(scores.get(0, col), 1.0);
        }
        assert_eq!(scores.get(1, 0), -1.0);
        assert_eq!(scores.get(1, 1), -1.0);
        assert_eq!(scores.get(2, 2), 0.0);
    }

    #[test]
    fn test_decider_loss_uses_other_weights() {
        // X wins, but O decided: X squares get +other, O squares get -current
        let board = Board::from_string("XXX OO. ...").unwrap();
        let weights = ScoreWeights::new(2.0, 0.5);
        let mut scores = ScoreGrid::new(3).unwrap();
        accumulate(&mut scores, &board, Player::O, &weights);

        for col in 0..3 {
            assert_eq!(scores.get(0, col), 0.5);
        }
        assert_eq!(scores.get(1, 0), -2.0);
        assert_eq!(scores.get(1, 1), -2.0);
    }

    #[test]
    fn test_accumulation_is_additive() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        let mut scores = ScoreGrid::new(3).unwrap();
        accumulate(&mut scores, &board, Player::X, &ScoreWeights::default());
        accumulate(&mut scores, &board, Player::X, &ScoreWeights::default());

        assert_eq!(scores.get(0, 0), 2.0);
        assert_eq!(scores.get(1, 0), -2.0);
    }

    #[test]
    fn test_weight_validation() {
        assert!(ScoreWeights::default().validate().is_ok());
        assert!(ScoreWeights::new(-1.0, 1.0).validate().is_err());
        assert!(ScoreWeights::new(1.0, f64::NAN).validate().is_err());
        assert!(ScoreWeights::new(f64::INFINITY, 1.0).validate().is_err());
    }
}
