//! Unblock Puzzle Solver
//!
//! Reads a 6x6 sliding-block board from a text file, finds the shortest
//! sequence of moves that frees the prisoner piece and shows every
//! intermediate board, optionally one keypress at a time.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use unblock::grid::format_board;
use unblock::persistence::{format_move, format_solution, save_transcript};
use unblock::{parse, solver, PieceSet, Solution, SolveLimits, SolveOutcome};

/// Solves 6x6 sliding-block escape puzzles in the fewest moves.
#[derive(Parser)]
#[command(name = "unblock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raise log verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle and print the winning moves.
    Solve {
        /// Board file, or `-` to read standard input.
        #[arg(default_value = "-")]
        puzzle: PathBuf,
        /// Give up after discovering this many distinct boards.
        #[arg(long)]
        max_states: Option<usize>,
        /// Wait for ENTER before showing each move.
        #[arg(long)]
        step: bool,
        /// Also save the transcript to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a puzzle and print its board and pieces.
    Show {
        /// Board file, or `-` to read standard input.
        #[arg(default_value = "-")]
        puzzle: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Solve {
            puzzle,
            max_states,
            step,
            output,
        } => run_solve(&puzzle, SolveLimits { max_states }, step, output.as_deref()),
        Command::Show { puzzle } => run_show(&puzzle),
    }
}

/// Sets up `env_logger`; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Reads and parses a board from a file or, for `-`, standard input.
fn load_puzzle(path: &Path) -> Result<PieceSet> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read puzzle from stdin")?;
        text
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read puzzle {}", path.display()))?
    };

    parse::parse_board(&text).with_context(|| format!("invalid puzzle {}", path.display()))
}

/// Solves the puzzle and presents the result.
fn run_solve(path: &Path, limits: SolveLimits, step: bool, output: Option<&Path>) -> Result<()> {
    let pieces = load_puzzle(path)?;

    match solver::solve_with_limits(&pieces, limits) {
        SolveOutcome::Solved { solution, stats } => {
            if step {
                present_interactively(&solution)?;
            } else {
                print!("{}", format_solution(&solution));
            }
            println!(
                "Run free, prisoner, run! ({} boards explored)",
                stats.states_expanded
            );

            if let Some(output) = output {
                save_transcript(output, &solution)
                    .with_context(|| format!("failed to save {}", output.display()))?;
                println!("Wrote {}", output.display());
            }
        }
        SolveOutcome::Unsolvable { stats } => {
            println!(
                "No escape: explored all {} reachable boards.",
                stats.states_expanded
            );
        }
        SolveOutcome::Aborted { stats } => {
            println!(
                "Gave up after discovering {} boards (depth {}); raise --max-states to search further.",
                stats.states_discovered, stats.depth
            );
        }
    }

    Ok(())
}

/// Shows one board at a time, waiting for ENTER in between.
fn present_interactively(solution: &Solution) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    println!("Solved in {} moves.", solution.len());
    print!("{}", format_board(solution.initial()));

    for (mv, state) in solution.moves.iter().zip(&solution.states[1..]) {
        print!("Press ENTER for next move");
        io::stdout().flush()?;
        line.clear();
        input.read_line(&mut line)?;

        println!("{}", format_move(state, *mv));
        print!("{}", format_board(state));
    }

    Ok(())
}

/// Prints the parsed board and its piece list.
fn run_show(path: &Path) -> Result<()> {
    let pieces = load_puzzle(path)?;
    print!("{}", describe(&pieces));
    Ok(())
}

/// Board drawing followed by one line per piece.
fn describe(pieces: &PieceSet) -> String {
    let mut output = format_board(pieces);
    for (index, piece) in pieces.pieces().iter().enumerate() {
        output.push_str(&format!(
            "{} id={} {:?} length={} at ({}, {})\n",
            pieces.label(index),
            piece.id,
            piece.orientation,
            piece.length,
            piece.row,
            piece.col
        ));
    }
    output
}
