//! Solution transcripts.
//!
//! A transcript lists the starting board, then every move followed by the
//! board it produces. Pieces are named by the letters [`format_board`] draws.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::PuzzleError;
use crate::grid::format_board;
use crate::pieces::{Move, PieceSet};
use crate::solver::Solution;

/// Describes a move using the letter of the piece in `state`.
pub fn format_move(state: &PieceSet, mv: Move) -> String {
    match state.label_of(mv.piece) {
        Some(letter) => format!("{letter} {}", mv.direction),
        None => mv.to_string(),
    }
}

/// Formats a full solution as a human-readable transcript.
pub fn format_solution(solution: &Solution) -> String {
    let count = solution.len();
    let mut output = format!(
        "Solved in {count} {}.\n\nStart\n",
        if count == 1 { "move" } else { "moves" }
    );
    output.push_str(&format_board(solution.initial()));

    for (step, (mv, state)) in solution.moves.iter().zip(&solution.states[1..]).enumerate() {
        output.push_str(&format!("\nMove {}: {}\n", step + 1, format_move(state, *mv)));
        output.push_str(&format_board(state));
    }

    output
}

/// Saves the transcript of `solution` to `path`, replacing any existing file.
pub fn save_transcript(path: impl AsRef<Path>, solution: &Solution) -> Result<(), PuzzleError> {
    let mut file = File::create(path)?;
    file.write_all(format_solution(solution).as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_board;
    use crate::pieces::Direction;
    use crate::solver::solve;

    fn capped_blocker() -> Solution {
        let initial = parse_board(
            "
            ...AA.
            ...B..
            ZZ.B..
            ...B..
            ......
            ......
            ",
        )
        .unwrap();
        solve(&initial).into_solution().unwrap()
    }

    #[test]
    fn test_format_move_uses_board_letters() {
        let solution = capped_blocker();
        let state = solution.initial();
        assert_eq!(format_move(state, Move::new(1, Direction::Down)), "B down");
        assert_eq!(format_move(state, Move::new(2, Direction::Right)), "Z right");
        assert_eq!(format_move(state, Move::new(9, Direction::Up)), "piece 9 up");
    }

    #[test]
    fn test_transcript_snapshot() {
        insta::assert_snapshot!(format_solution(&capped_blocker()), @r"
        Solved in 2 moves.

        Start
        +-------------+
        | . . . A A . |
        | . . . B . . |
        | Z Z . B . . >
        | . . . B . . |
        | . . . . . . |
        | . . . . . . |
        +-------------+

        Move 1: B down
        +-------------+
        | . . . A A . |
        | . . . . . . |
        | Z Z . B . . >
        | . . . B . . |
        | . . . B . . |
        | . . . . . . |
        +-------------+

        Move 2: B down
        +-------------+
        | . . . A A . |
        | . . . . . . |
        | Z Z . . . . >
        | . . . B . . |
        | . . . B . . |
        | . . . B . . |
        +-------------+
        ");
    }

    #[test]
    fn test_save_transcript_writes_file() {
        let solution = capped_blocker();
        let path = std::env::temp_dir().join(format!("unblock-transcript-{}.txt", std::process::id()));

        save_transcript(&path, &solution).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written, format_solution(&solution));
    }

    #[test]
    fn test_save_transcript_reports_io_errors() {
        let solution = capped_blocker();
        let path = std::env::temp_dir()
            .join("unblock-missing-dir")
            .join("nested")
            .join("transcript.txt");
        let err = save_transcript(&path, &solution).unwrap_err();
        assert!(matches!(err, PuzzleError::Io(_)));
    }
}
