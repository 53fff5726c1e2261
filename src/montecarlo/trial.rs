//! Random playout of a single game

use rand::Rng;

use crate::tictactoe::{Board, Player};

/// Play one game to completion using uniformly random moves.
///
/// The board is mutated in place to its terminal state: starting with
/// `player`, an empty square is chosen uniformly at random and marked,
/// players alternating, until the board reports an outcome. A board that
/// is already terminal is left unchanged.
///
/// Termination is guaranteed: every placement fills a square and squares
/// never empty, so the loop runs at most `dim * dim` iterations.
///
/// # Errors
///
/// Returns error only if a placement fails, which indicates an internal
/// inconsistency between `empty_squares` and `place`.
pub fn run_trial<R: Rng + ?Sized>(
    board: &mut Board,
    player: Player,
    rng: &mut R,
) -> Result<(), crate::Error> {
    let mut current = player;
    while board.outcome().is_none() {
        let empty = board.empty_squares();
        let (row, col) = empty[rng.random_range(0..empty.len())];
        board.place(row, col, current)?;
        current = current.opponent();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_trial_reaches_terminal_state() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut board = Board::new(3).unwrap();
            run_trial(&mut board, Player::X, &mut rng).unwrap();
            assert!(board.outcome().is_some());
        }
    }

    #[test]
    fn test_trial_on_terminal_board_is_noop() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::from_string("XXX OO. ...").unwrap();
        let before = board.clone();
        run_trial(&mut board, Player::O, &mut rng).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_trial_only_fills_squares() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = Board::from_string("X.O .X. ...").unwrap();
        let mut board = start.clone();
        run_trial(&mut board, Player::O, &mut rng).unwrap();

        // Marks present before the trial are still there afterwards
        for (row, col) in [(0, 0), (0, 2), (1, 1)] {
            assert_eq!(board.get(row, col), start.get(row, col));
        }
        assert!(board.occupied_count() > start.occupied_count());
    }
}
