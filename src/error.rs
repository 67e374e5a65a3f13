//! Error types for board construction and move application.

use thiserror::Error;

/// Errors that can occur while setting up or playing a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    /// Cell is not empty
    #[error("invalid move: ({row}, {col}) is already occupied")]
    InvalidMove { row: usize, col: usize },

    /// Coordinate is off the board
    #[error("invalid move: ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("invalid board size {size}: must be at least 1")]
    InvalidSize { size: usize },

    /// No move can be searched once the game is decided
    #[error("game already over")]
    GameOver,
}

/// Result type alias for game operations.
pub type Result<T> = std::result::Result<T, GameError>;
