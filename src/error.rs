//! Error types for the engine and the game controller

use thiserror::Error;

use crate::Cell;

/// Main error type for the crate
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("no empty cell left to play")]
    BoardFull,

    #[error("{mark:?} is not a playing mark (expected X or O)")]
    InvalidMark { mark: Cell },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid move: position {position} is already occupied")]
    Occupied { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("wrong board length: expected {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCellCharacter { character: char, position: usize },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
