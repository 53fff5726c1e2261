//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// The winning player, if any
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Draw => None,
        }
    }
}

/// A game in progress: board, turn tracking, and move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game on an empty board.
    ///
    /// # Errors
    ///
    /// Returns error if `dim` is zero.
    pub fn new(dim: usize, first_player: Player) -> Result<Self, crate::Error> {
        Ok(Game {
            board: Board::new(dim)?,
            to_move: first_player,
            moves: Vec::new(),
            outcome: None,
        })
    }

    /// Current board state
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Final outcome, once the game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Moves played so far
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Play the current player's move at (row, col).
    ///
    /// # Errors
    ///
    /// Returns error if the game is already over or the square is
    /// out of bounds or occupied.
    pub fn play(&mut self, row: usize, col: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        self.board.place(row, col, self.to_move)?;
        self.moves.push(Move {
            row,
            col,
            player: self.to_move,
        });

        self.outcome = self.board.outcome();
        self.to_move = self.to_move.opponent();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_alternation() {
        let mut game = Game::new(3, Player::X).unwrap();
        assert_eq!(game.to_move(), Player::X);

        game.play(0, 0).unwrap();
        assert_eq!(game.to_move(), Player::O);

        game.play(1, 1).unwrap();
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_game_records_outcome() {
        let mut game = Game::new(3, Player::X).unwrap();
        // X wins on the top row
        game.play(0, 0).unwrap(); // X
        game.play(1, 0).unwrap(); // O
        game.play(0, 1).unwrap(); // X
        game.play(1, 1).unwrap(); // O
        game.play(0, 2).unwrap(); // X

        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::X)));
        assert_eq!(game.moves().len(), 5);
    }

    #[test]
    fn test_play_after_game_over() {
        let mut game = Game::new(3, Player::X).unwrap();
        game.play(0, 0).unwrap();
        game.play(1, 0).unwrap();
        game.play(0, 1).unwrap();
        game.play(1, 1).unwrap();
        game.play(0, 2).unwrap();

        let err = game.play(2, 2).unwrap_err();
        assert!(matches!(err, crate::Error::GameOver));
    }

    #[test]
    fn test_o_first_game() {
        let mut game = Game::new(3, Player::O).unwrap();
        game.play(1, 1).unwrap();
        assert_eq!(game.board().get(1, 1), crate::tictactoe::Cell::O);
    }
}
