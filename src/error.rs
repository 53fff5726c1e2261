//! Error types for the carlo crate

use thiserror::Error;

/// Main error type for the carlo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board dimension {dim} (must be at least 1)")]
    InvalidDimension { dim: usize },

    #[error("square ({row}, {col}) is out of bounds for a {dim}x{dim} board")]
    OutOfBounds { row: usize, col: usize, dim: usize },

    #[error("invalid move: square ({row}, {col}) is already occupied")]
    SquareOccupied { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("trial count must be at least 1, got {trials}")]
    InvalidTrialCount { trials: usize },

    #[error("score weight {value} must be non-negative and finite")]
    InvalidWeight { value: f64 },

    #[error("board string has {got} cells, which is not a square number, in '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player '{player}' (expected 'X' or 'O')")]
    InvalidPlayerToken { player: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
