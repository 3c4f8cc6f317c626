//! One-step successor generation.
//!
//! Every piece tries the two directions of its axis. A direction is legal
//! when the single cell the piece would enter is on the board and empty;
//! pieces never jump over one another.

use crate::grid::Grid;
use crate::pieces::{Move, PieceSet};

/// Calls `emit` with `(registry index, move)` for every legal move, in
/// registry order and then axis order (left/right or up/down).
#[inline]
fn for_each_move(pieces: &PieceSet, grid: &Grid, mut emit: impl FnMut(usize, Move)) {
    for (index, piece) in pieces.pieces().iter().enumerate() {
        for direction in piece.orientation.directions() {
            let Some(target) = piece.entering_cell(direction) else {
                continue;
            };
            if grid.is_empty(target) {
                emit(index, Move::new(piece.id, direction));
            }
        }
    }
}

/// All legal moves from the given state.
///
/// `grid` must be the render of `pieces`.
pub fn legal_moves(pieces: &PieceSet, grid: &Grid) -> Vec<Move> {
    let mut moves = Vec::new();
    for_each_move(pieces, grid, |_, mv| moves.push(mv));
    moves
}

/// All one-step successor states, each paired with the move producing it.
///
/// Each successor is a deep copy of `pieces` with one anchor shifted.
pub fn successors(pieces: &PieceSet, grid: &Grid) -> Vec<(PieceSet, Move)> {
    let mut next_states = Vec::new();
    for_each_move(pieces, grid, |index, mv| {
        let mut next = pieces.clone();
        next.shift(index, mv.direction);
        next_states.push((next, mv));
    });
    next_states
}

/// Applies `mv` if it is legal in `pieces`, returning the new state.
///
/// Returns `None` for an unknown piece, a direction off the piece's axis,
/// or a blocked or off-board target cell.
pub fn apply(pieces: &PieceSet, mv: Move) -> Option<PieceSet> {
    let index = pieces.index_of(mv.piece)?;
    let target = pieces.pieces()[index].entering_cell(mv.direction)?;
    if !Grid::render(pieces).is_empty(target) {
        return None;
    }
    let mut next = pieces.clone();
    next.shift(index, mv.direction);
    Some(next)
}
