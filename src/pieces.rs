//! Piece definitions and the piece registry.
//!
//! A piece is a rigid 1xL (horizontal) or Lx1 (vertical) bar anchored at its
//! top-left cell. The registry ([`PieceSet`]) owns the pieces of one board
//! state and is the only thing that carries piece identity; occupancy keys
//! are derived from it in [`crate::grid`].

use std::fmt;

use rustc_hash::FxHashSet;

use crate::error::PuzzleError;

/// Width and height of the board.
pub const SIZE: usize = 6;

/// Stable identity of a piece, unique within a puzzle.
pub type PieceId = u8;

/// A board position as `(row, column)`.
pub type Square = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Ordinary,
    Prisoner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The two directions a piece with this orientation may slide in.
    #[inline]
    pub const fn directions(self) -> [Direction; 2] {
        match self {
            Orientation::Horizontal => [Direction::Left, Direction::Right],
            Orientation::Vertical => [Direction::Up, Direction::Down],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Row and column offset of a one-cell step.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub const fn orientation(self) -> Orientation {
        match self {
            Direction::Left | Direction::Right => Orientation::Horizontal,
            Direction::Up | Direction::Down => Orientation::Vertical,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

/// A one-cell slide of a single piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: PieceId,
    pub direction: Direction,
}

impl Move {
    pub const fn new(piece: PieceId, direction: Direction) -> Self {
        Self { piece, direction }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece {} {}", self.piece, self.direction)
    }
}

/// A piece placed on the board.
///
/// `row` and `col` address the top-left cell. Only these two fields change
/// during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub orientation: Orientation,
    pub length: u8,
    pub row: u8,
    pub col: u8,
}

impl Piece {
    pub const fn new(
        id: PieceId,
        kind: PieceKind,
        orientation: Orientation,
        length: u8,
        row: u8,
        col: u8,
    ) -> Self {
        Self {
            id,
            kind,
            orientation,
            length,
            row,
            col,
        }
    }

    /// A horizontal prisoner piece.
    pub const fn prisoner(id: PieceId, length: u8, row: u8, col: u8) -> Self {
        Self::new(id, PieceKind::Prisoner, Orientation::Horizontal, length, row, col)
    }

    pub const fn horizontal(id: PieceId, length: u8, row: u8, col: u8) -> Self {
        Self::new(id, PieceKind::Ordinary, Orientation::Horizontal, length, row, col)
    }

    pub const fn vertical(id: PieceId, length: u8, row: u8, col: u8) -> Self {
        Self::new(id, PieceKind::Ordinary, Orientation::Vertical, length, row, col)
    }

    #[inline]
    pub fn is_prisoner(&self) -> bool {
        self.kind == PieceKind::Prisoner
    }

    /// Cells covered by the piece, from the anchor outwards.
    pub fn cells(&self) -> impl Iterator<Item = Square> + '_ {
        let (row, col) = (self.row as usize, self.col as usize);
        (0..self.length as usize).map(move |i| match self.orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// The single cell this piece would enter by sliding one step in
    /// `direction`.
    ///
    /// Returns `None` when the direction does not match the orientation or
    /// the cell lies off the board.
    #[inline]
    pub fn entering_cell(&self, direction: Direction) -> Option<Square> {
        if direction.orientation() != self.orientation {
            return None;
        }
        let (row, col, length) = (self.row as usize, self.col as usize, self.length as usize);
        match direction {
            Direction::Left => (col > 0).then(|| (row, col - 1)),
            Direction::Right => (col + length < SIZE).then_some((row, col + length)),
            Direction::Up => (row > 0).then(|| (row - 1, col)),
            Direction::Down => (row + length < SIZE).then_some((row + length, col)),
        }
    }

    /// Moves the anchor one cell. The caller guarantees the result is on the
    /// board.
    #[inline]
    pub fn shift(&mut self, direction: Direction) {
        let (dy, dx) = direction.delta();
        self.row = (self.row as isize + dy) as u8;
        self.col = (self.col as isize + dx) as u8;
        debug_assert!(self.fits(), "piece {} shifted off the board", self.id);
    }

    fn fits(&self) -> bool {
        let end = match self.orientation {
            Orientation::Horizontal => self.col as usize + self.length as usize,
            Orientation::Vertical => self.row as usize + self.length as usize,
        };
        (self.row as usize) < SIZE && (self.col as usize) < SIZE && end <= SIZE
    }
}

/// The ordered pieces of one board state.
///
/// Construction validates the whole puzzle, so every `PieceSet` holds
/// in-bounds, non-overlapping pieces with unique ids and exactly one
/// horizontal prisoner. Cloning is the deep copy used to branch successor
/// states; ids survive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSet {
    pieces: Vec<Piece>,
    prisoner: usize,
}

impl PieceSet {
    pub fn new(pieces: Vec<Piece>) -> Result<Self, PuzzleError> {
        let mut seen_ids = FxHashSet::default();
        let mut owner: [[Option<PieceId>; SIZE]; SIZE] = [[None; SIZE]; SIZE];
        let mut prisoner: Option<usize> = None;

        for (index, piece) in pieces.iter().enumerate() {
            if !(2..=3).contains(&piece.length) {
                return Err(PuzzleError::InvalidLength {
                    id: piece.id,
                    length: piece.length,
                });
            }
            if !piece.fits() {
                return Err(PuzzleError::OutOfBounds { id: piece.id });
            }
            if !seen_ids.insert(piece.id) {
                return Err(PuzzleError::DuplicateId { id: piece.id });
            }
            for (row, col) in piece.cells() {
                if let Some(first) = owner[row][col] {
                    return Err(PuzzleError::Overlap {
                        first,
                        second: piece.id,
                        row,
                        col,
                    });
                }
                owner[row][col] = Some(piece.id);
            }
            if piece.is_prisoner() {
                if let Some(first) = prisoner {
                    return Err(PuzzleError::MultiplePrisoners {
                        first: pieces[first].id,
                        second: piece.id,
                    });
                }
                if piece.orientation != Orientation::Horizontal {
                    return Err(PuzzleError::VerticalPrisoner { id: piece.id });
                }
                prisoner = Some(index);
            }
        }

        let prisoner = prisoner.ok_or(PuzzleError::MissingPrisoner)?;
        Ok(Self { pieces, prisoner })
    }

    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[inline]
    pub fn prisoner(&self) -> &Piece {
        &self.pieces[self.prisoner]
    }

    /// Registry index of the piece with identity `id`.
    pub fn index_of(&self, id: PieceId) -> Option<usize> {
        self.pieces.iter().position(|piece| piece.id == id)
    }

    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.index_of(id).map(|index| &self.pieces[index])
    }

    /// Slides the piece at registry `index` by one cell without checking
    /// for collisions. Callers establish legality first.
    #[inline]
    pub(crate) fn shift(&mut self, index: usize, direction: Direction) {
        self.pieces[index].shift(direction);
    }

    /// Display letter for the piece at registry `index`: `Z` for the
    /// prisoner, otherwise `A`, `B`, ... by index.
    pub fn label(&self, index: usize) -> char {
        if index == self.prisoner {
            'Z'
        } else {
            // a 6x6 board holds at most 18 pieces, so this never reaches 'Z'
            char::from(b'A' + index as u8)
        }
    }

    /// Display letter for the piece with identity `id`.
    pub fn label_of(&self, id: PieceId) -> Option<char> {
        self.index_of(id).map(|index| self.label(index))
    }
}
