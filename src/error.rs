//! Error types for board construction and parsing.

use thiserror::Error;

/// Errors raised when a board violates the permutation invariant or
/// cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("board has {got} tiles, expected {expected}")]
    WrongTileCount { expected: usize, got: usize },

    #[error("tile {value} at position {position} is out of range 0..={max}")]
    TileOutOfRange {
        value: u8,
        position: usize,
        max: u8,
    },

    #[error("tile {value} appears more than once")]
    DuplicateTile { value: u8 },

    #[error("invalid tile '{token}' in '{context}'")]
    InvalidToken { token: String, context: String },
}

pub type Result<T> = std::result::Result<T, Error>;
