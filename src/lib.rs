//! Unblock puzzle solver library.
//!
//! Finds the shortest sequence of one-cell slides that lets the prisoner
//! piece escape off the right edge of a 6x6 sliding-block board.

pub mod error;
pub mod grid;
pub mod movegen;
pub mod parse;
pub mod persistence;
pub mod pieces;
pub mod solver;

pub use error::PuzzleError;
pub use grid::{BoardKey, Grid, Tile};
pub use pieces::{Direction, Move, Orientation, Piece, PieceId, PieceKind, PieceSet};
pub use solver::{solve, solve_with_limits, SearchStats, Solution, SolveLimits, SolveOutcome};
