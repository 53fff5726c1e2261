//! Agent port - abstraction for move-selecting policies

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// A policy that picks moves for one side of a game.
///
/// The game loop supplies the live board and the player whose turn it is;
/// the agent returns a single (row, col) coordinate to be played. Agents
/// never mutate the board they are shown.
///
/// # Examples
///
/// ```no_run
/// use carlo::{
///     ports::Agent,
///     tictactoe::{Board, Player},
/// };
///
/// fn next_move(agent: &mut dyn Agent, board: &Board, player: Player) -> (usize, usize) {
///     agent.select_move(board, player).expect("non-terminal board")
/// }
/// ```
pub trait Agent: Send {
    /// Select a move for `player` on the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no empty squares. Callers check
    /// for a finished game before asking for a move.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<(usize, usize)>;

    /// The agent's name, used in reports and logs.
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator.
    ///
    /// Evaluation runs call this when supplied with a deterministic seed
    /// so results are reproducible. Deterministic agents can ignore it.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
