//! Error types for board construction and move application.
//!
//! The search itself never produces these: it only applies moves it has just
//! enumerated. They exist for collaborators feeding unvalidated input in.

use thiserror::Error;

use crate::types::Move;

/// Rejected board input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Wrong number of rows
    #[error("expected 8 rows, found {0}")]
    Rows(usize),

    /// Wrong number of cells in a row
    #[error("row {row} has {len} cells, expected 8")]
    Columns { row: usize, len: usize },

    /// Numeric cell value outside {-1, 0, 1}
    #[error("cell ({row}, {col}) holds {value}, expected -1, 0 or 1")]
    CellValue { row: usize, col: usize, value: i8 },

    /// Unknown character in a text board
    #[error("cell ({row}, {col}) holds unknown character {ch:?}")]
    CellChar { row: usize, col: usize, ch: char },

    /// Malformed move notation
    #[error("invalid coordinate {0:?} (expected a1..h8)")]
    Coordinate(String),

    /// Malformed side name
    #[error("invalid side {0:?} (expected black or white)")]
    Side(String),
}

/// Rejected move application.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    #[error("move {0} is off the board")]
    OutOfBounds(Move),

    #[error("square {0} is already occupied")]
    Occupied(Move),

    #[error("move {0} flips nothing")]
    NoFlips(Move),
}
