//! Text board parser.
//!
//! A board is six rows of six characters. `.` is an empty cell, `Z` marks
//! the prisoner and any other uppercase letter marks an ordinary piece; all
//! cells sharing a letter form one piece. Blank lines and `#` comments are
//! skipped:
//!
//! ```text
//! # beginner card
//! AA...O
//! P..Q.O
//! PZZQ.O
//! P..Q..
//! B...CC
//! B.RRR.
//! ```
//!
//! Piece ids follow the order in which letters first appear in a row-major
//! scan, so the same text always yields the same registry.

use crate::error::PuzzleError;
use crate::pieces::{Orientation, Piece, PieceId, PieceKind, PieceSet, Square, SIZE};

/// Letter reserved for the prisoner.
pub const PRISONER_LABEL: char = 'Z';

/// Parses and validates a text board.
pub fn parse_board(text: &str) -> Result<PieceSet, PuzzleError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    if rows.len() != SIZE {
        return Err(PuzzleError::RowCount { found: rows.len() });
    }

    // letters in first-appearance order, each with its cells in scan order
    let mut labelled: Vec<(char, Vec<Square>)> = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        let width = line.chars().count();
        if width != SIZE {
            return Err(PuzzleError::RowWidth { row, width });
        }
        for (col, found) in line.chars().enumerate() {
            match found {
                '.' => {}
                'A'..='Z' => match labelled.iter_mut().find(|(label, _)| *label == found) {
                    Some((_, cells)) => cells.push((row, col)),
                    None => labelled.push((found, vec![(row, col)])),
                },
                _ => return Err(PuzzleError::UnknownCell { row, col, found }),
            }
        }
    }

    let pieces = labelled
        .iter()
        .enumerate()
        .map(|(id, (label, cells))| piece_from_cells(id as PieceId, *label, cells))
        .collect::<Result<Vec<_>, _>>()?;
    PieceSet::new(pieces)
}

/// Builds a piece from its cells, which arrive in row-major order so the
/// first one is the anchor.
fn piece_from_cells(id: PieceId, label: char, cells: &[Square]) -> Result<Piece, PuzzleError> {
    let malformed = || PuzzleError::MalformedPiece { label };
    if !(2..=3).contains(&cells.len()) {
        return Err(malformed());
    }

    let (row, col) = cells[0];
    let orientation = if cells.iter().all(|&(r, _)| r == row) {
        Orientation::Horizontal
    } else if cells.iter().all(|&(_, c)| c == col) {
        Orientation::Vertical
    } else {
        return Err(malformed());
    };

    let contiguous = cells.iter().enumerate().all(|(i, &cell)| {
        cell == match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }
    });
    if !contiguous {
        return Err(malformed());
    }

    let kind = if label == PRISONER_LABEL {
        PieceKind::Prisoner
    } else {
        PieceKind::Ordinary
    };
    Ok(Piece::new(
        id,
        kind,
        orientation,
        cells.len() as u8,
        row as u8,
        col as u8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = "
        # beginner card
        AA...O
        P..Q.O
        PZZQ.O

        P..Q..
        B...CC
        B.RRR.
    ";

    #[test]
    fn test_parse_assigns_ids_in_scan_order() {
        let pieces = parse_board(CARD).unwrap();
        let summary: Vec<_> = pieces
            .pieces()
            .iter()
            .map(|p| (p.id, p.orientation, p.length, p.row, p.col))
            .collect();
        assert_eq!(
            summary,
            vec![
                (0, Orientation::Horizontal, 2, 0, 0),
                (1, Orientation::Vertical, 3, 0, 5),
                (2, Orientation::Vertical, 3, 1, 0),
                (3, Orientation::Vertical, 3, 1, 3),
                (4, Orientation::Horizontal, 2, 2, 1),
                (5, Orientation::Vertical, 2, 4, 0),
                (6, Orientation::Horizontal, 2, 4, 4),
                (7, Orientation::Horizontal, 3, 5, 2),
            ]
        );
        assert_eq!(pieces.prisoner().id, 4);
        assert_eq!(pieces.prisoner().kind, PieceKind::Prisoner);
    }

    #[test]
    fn test_rejects_wrong_row_count() {
        let err = parse_board("......\n......\n").unwrap_err();
        assert!(matches!(err, PuzzleError::RowCount { found: 2 }));
    }

    #[test]
    fn test_rejects_wrong_row_width() {
        let err = parse_board("......\n.......\n......\n......\n......\n......").unwrap_err();
        assert!(matches!(err, PuzzleError::RowWidth { row: 1, width: 7 }));
    }

    #[test]
    fn test_rejects_unknown_cell() {
        let err = parse_board("......\n......\nZZ.x..\n......\n......\n......").unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::UnknownCell {
                row: 2,
                col: 3,
                found: 'x'
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_pieces() {
        let bent = "AA....\n.A....\nZZ....\n......\n......\n......";
        assert!(matches!(
            parse_board(bent).unwrap_err(),
            PuzzleError::MalformedPiece { label: 'A' }
        ));

        let gapped = "A.A...\n......\nZZ....\n......\n......\n......";
        assert!(matches!(
            parse_board(gapped).unwrap_err(),
            PuzzleError::MalformedPiece { label: 'A' }
        ));

        let too_long = "BBBB..\n......\nZZ....\n......\n......\n......";
        assert!(matches!(
            parse_board(too_long).unwrap_err(),
            PuzzleError::MalformedPiece { label: 'B' }
        ));

        let single = "C.....\n......\nZZ....\n......\n......\n......";
        assert!(matches!(
            parse_board(single).unwrap_err(),
            PuzzleError::MalformedPiece { label: 'C' }
        ));
    }

    #[test]
    fn test_validation_errors_pass_through() {
        let no_prisoner = "AA....\n......\n......\n......\n......\n......";
        assert!(matches!(
            parse_board(no_prisoner).unwrap_err(),
            PuzzleError::MissingPrisoner
        ));

        let upright = "Z.....\nZ.....\n......\n......\n......\n......";
        assert!(matches!(
            parse_board(upright).unwrap_err(),
            PuzzleError::VerticalPrisoner { id: 0 }
        ));
    }
}
