//! Score grid reporting for a single position

use std::fmt::Write as _;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    montecarlo::{MonteCarloConfig, ScoreGrid, selector},
    tictactoe::{Board, Player},
};

/// Score of one empty square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquareScore {
    pub row: usize,
    pub col: usize,
    pub score: f64,
}

/// One move decision, fully instrumented.
///
/// Captures the accumulated score grid, the per-empty-square scores, the
/// maximal score with its tied set, and the square the selector chose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// The analyzed position, encoded row-major
    pub board: String,
    /// Board dimension
    pub dim: usize,
    /// The deciding player
    pub player: Player,
    /// Trials that went into the grid
    pub trials: usize,
    /// The accumulated score grid
    pub scores: ScoreGrid,
    /// Scores of the empty squares, row-major
    pub square_scores: Vec<SquareScore>,
    /// The maximal empty-square score
    pub max_score: f64,
    /// All empty squares achieving the maximum
    pub tied: Vec<(usize, usize)>,
    /// The square the selector picked
    pub chosen: (usize, usize),
}

impl ScoreReport {
    /// Run one instrumented move decision on `board`.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the board has no
    /// empty squares.
    pub fn generate<R: Rng + ?Sized>(
        board: &Board,
        player: Player,
        config: &MonteCarloConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let scores = selector::score_squares(board, player, config, rng)?;
        let (tied, max_score) = selector::tied_squares(board, &scores)?;
        let chosen = tied[rng.random_range(0..tied.len())];

        let square_scores = board
            .empty_squares()
            .into_iter()
            .map(|(row, col)| SquareScore {
                row,
                col,
                score: scores.get(row, col),
            })
            .collect();

        Ok(ScoreReport {
            board: board.encode(),
            dim: board.dim(),
            player,
            trials: config.trials,
            scores,
            square_scores,
            max_score,
            tied,
            chosen,
        })
    }

    /// Render the score grid as a text table, occupied squares shown as
    /// their marks.
    pub fn render(&self) -> String {
        let cells: Vec<char> = self.board.chars().collect();
        let width = 8;
        let mut out = String::new();

        for row in 0..self.dim {
            for col in 0..self.dim {
                match cells[row * self.dim + col] {
                    '.' => {
                        let _ = write!(out, "{:>width$.2}", self.scores.get(row, col));
                    }
                    mark => {
                        let _ = write!(out, "{mark:>width$}");
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_report_covers_empty_squares() {
        let board = Board::from_string("XO. .X. ...").unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let report =
            ScoreReport::generate(&board, Player::O, &MonteCarloConfig::new(30), &mut rng).unwrap();

        assert_eq!(report.square_scores.len(), board.empty_squares().len());
        assert!(report.tied.contains(&report.chosen));
        assert!(board.is_empty_square(report.chosen.0, report.chosen.1));
    }

    #[test]
    fn test_render_shows_marks_and_scores() {
        let board = Board::from_string("XO. ... ...").unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let report =
            ScoreReport::generate(&board, Player::X, &MonteCarloConfig::new(10), &mut rng).unwrap();

        let rendered = report.render();
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains('X'));
        assert!(rendered.contains('O'));
    }
}
