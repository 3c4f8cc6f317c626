//! Rendered occupancy grid and the packed board key.
//!
//! The grid is a pure function of a [`PieceSet`]: each cell is empty,
//! covered by an ordinary piece, or covered by the prisoner. Piece identity
//! is deliberately dropped here, so two piece lists that differ only by
//! which interchangeable piece sits where produce the same [`BoardKey`].

use crate::pieces::{Piece, PieceKind, PieceSet, Square, SIZE};

/// Number of cells on the board.
const CELLS: usize = SIZE * SIZE;

/// Bytes in a packed key: 36 cells at 2 bits each.
pub const KEY_BYTES: usize = CELLS.div_ceil(4);

/// What occupies a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Ordinary,
    Prisoner,
}

impl Tile {
    #[inline]
    const fn bits(self) -> u8 {
        match self {
            Tile::Empty => 0,
            Tile::Ordinary => 1,
            Tile::Prisoner => 2,
        }
    }

    #[inline]
    fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Tile::Empty,
            1 => Tile::Ordinary,
            2 => Tile::Prisoner,
            _ => unreachable!("tile bits {bits:#04b} are never packed"),
        }
    }
}

impl From<PieceKind> for Tile {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Ordinary => Tile::Ordinary,
            PieceKind::Prisoner => Tile::Prisoner,
        }
    }
}

/// Converts a cell to its linear index (row-major).
#[inline(always)]
const fn cell_to_idx((row, col): Square) -> usize {
    row * SIZE + col
}

/// A 6x6 occupancy view for quick cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    tiles: [Tile; CELLS],
}

impl Grid {
    pub const EMPTY: Self = Self {
        tiles: [Tile::Empty; CELLS],
    };

    /// Draws every piece of `pieces` into an empty grid.
    pub fn render(pieces: &PieceSet) -> Self {
        let mut grid = Grid::EMPTY;
        for piece in pieces.pieces() {
            let tile = Tile::from(piece.kind);
            for cell in piece.cells() {
                grid.tiles[cell_to_idx(cell)] = tile;
            }
        }
        grid
    }

    #[inline]
    pub fn tile(&self, cell: Square) -> Tile {
        self.tiles[cell_to_idx(cell)]
    }

    #[inline]
    pub fn is_empty(&self, cell: Square) -> bool {
        self.tile(cell) == Tile::Empty
    }

    /// Packs the grid into its fixed-size key.
    pub fn key(&self) -> BoardKey {
        let mut bytes = [0u8; KEY_BYTES];
        for (index, tile) in self.tiles.iter().enumerate() {
            bytes[index / 4] |= tile.bits() << ((index % 4) * 2);
        }
        BoardKey(bytes)
    }

    /// True when every cell right of `prisoner` on its row is empty, i.e. the
    /// prisoner can slide off the right edge.
    pub fn is_goal(&self, prisoner: &Piece) -> bool {
        let row = prisoner.row as usize;
        let first_free = prisoner.col as usize + prisoner.length as usize;
        (first_free..SIZE).all(|col| self.is_empty((row, col)))
    }
}

/// Canonical, identity-free encoding of a board's occupancy.
///
/// Cell `i` (row-major) occupies bits `2 * (i % 4)..` of byte `i / 4`.
/// Equal keys mean identical occupancy, labelled by tile kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardKey([u8; KEY_BYTES]);

impl BoardKey {
    /// Renders `pieces` and packs the result.
    #[inline]
    pub fn render(pieces: &PieceSet) -> Self {
        Grid::render(pieces).key()
    }

    /// Decodes a single cell back out of the key.
    pub fn tile(&self, cell: Square) -> Tile {
        let index = cell_to_idx(cell);
        Tile::from_bits((self.0[index / 4] >> ((index % 4) * 2)) & 0b11)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_BYTES] {
        &self.0
    }
}

/// Formats a board as ASCII art.
///
/// Ordinary pieces are lettered by registry index, the prisoner is `Z` and
/// empty cells show as `.`. The exit on the prisoner's row is drawn as `>`.
pub fn format_board(pieces: &PieceSet) -> String {
    let mut letters = [['.'; SIZE]; SIZE];
    for (index, piece) in pieces.pieces().iter().enumerate() {
        let letter = pieces.label(index);
        for (row, col) in piece.cells() {
            letters[row][col] = letter;
        }
    }

    let exit_row = pieces.prisoner().row as usize;
    let border = format!("+{}+\n", "-".repeat(2 * SIZE + 1));

    let mut output = border.clone();
    for (row, line) in letters.iter().enumerate() {
        output.push('|');
        for &letter in line {
            output.push(' ');
            output.push(letter);
        }
        output.push(' ');
        output.push(if row == exit_row { '>' } else { '|' });
        output.push('\n');
    }
    output.push_str(&border);

    output
}
