//! Observer port - abstraction for watching evaluation series

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, Player},
};

/// Observer trait for monitoring a series of games.
///
/// Observers compose: a progress bar, a metrics tally, and a game log can
/// all watch the same series without the runner knowing about any of them.
///
/// Methods are called in order: `on_series_start` once, then per game
/// `on_game_start`, `on_move` for each move, `on_game_end`, and finally
/// `on_series_end` once. All methods default to no-ops.
pub trait Observer: Send {
    /// Called once before the first game, with the planned game count.
    fn on_series_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts.
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called for each move, after it has been applied to the board.
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        _square: (usize, usize),
        _player: Player,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a game reaches a terminal state.
    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    /// Called once after the last game.
    fn on_series_end(&mut self) -> Result<()> {
        Ok(())
    }
}
