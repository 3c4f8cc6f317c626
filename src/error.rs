//! Errors raised while building or loading a puzzle.
//!
//! An unsolvable or aborted search is not an error; see
//! [`crate::solver::SolveOutcome`].

use thiserror::Error;

use crate::pieces::PieceId;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("piece {id} has length {length}, expected 2 or 3")]
    InvalidLength { id: PieceId, length: u8 },

    #[error("piece {id} does not fit inside the 6x6 grid")]
    OutOfBounds { id: PieceId },

    #[error("pieces {first} and {second} overlap at ({row}, {col})")]
    Overlap {
        first: PieceId,
        second: PieceId,
        row: usize,
        col: usize,
    },

    #[error("piece id {id} is used more than once")]
    DuplicateId { id: PieceId },

    #[error("the puzzle has no prisoner piece")]
    MissingPrisoner,

    #[error("pieces {first} and {second} are both marked as the prisoner")]
    MultiplePrisoners { first: PieceId, second: PieceId },

    #[error("prisoner piece {id} must be horizontal")]
    VerticalPrisoner { id: PieceId },

    #[error("expected 6 board rows, found {found}")]
    RowCount { found: usize },

    #[error("row {row} has {width} cells, expected 6")]
    RowWidth { row: usize, width: usize },

    #[error("unknown cell {found:?} at ({row}, {col})")]
    UnknownCell { row: usize, col: usize, found: char },

    #[error("cells labelled {label:?} do not form a straight run of 2 or 3")]
    MalformedPiece { label: char },

    #[error("failed to write transcript")]
    Io(#[from] std::io::Error),
}
