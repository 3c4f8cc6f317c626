//! Benchmarks for the Unblock solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use unblock::grid::{format_board, BoardKey, Grid};
use unblock::movegen::successors;
use unblock::parse::parse_board;
use unblock::{solve, PieceSet};

const CARD: &str = include_str!("../puzzles/card01.txt");
const LOCKED: &str = include_str!("../puzzles/locked.txt");

fn card() -> PieceSet {
    parse_board(CARD).expect("bundled card parses")
}

/// Benchmark the full search on the beginner card.
fn bench_solve_card(c: &mut Criterion) {
    let pieces = card();
    c.bench_function("solve_card01", |b| b.iter(|| solve(black_box(&pieces))));
}

/// Benchmark exhausting a small unsolvable state space.
fn bench_solve_locked(c: &mut Criterion) {
    let pieces = parse_board(LOCKED).expect("bundled board parses");
    c.bench_function("solve_locked", |b| b.iter(|| solve(black_box(&pieces))));
}

/// Benchmark rendering and packing a board key.
fn bench_board_key(c: &mut Criterion) {
    let pieces = card();
    c.bench_function("board_key", |b| {
        b.iter(|| BoardKey::render(black_box(&pieces)))
    });
}

/// Benchmark successor generation from the starting position.
fn bench_successors(c: &mut Criterion) {
    let pieces = card();
    let grid = Grid::render(&pieces);
    c.bench_function("successors", |b| {
        b.iter(|| successors(black_box(&pieces), black_box(&grid)))
    });
}

/// Benchmark formatting a board for display.
fn bench_format_board(c: &mut Criterion) {
    let pieces = card();
    c.bench_function("format_board", |b| {
        b.iter(|| format_board(black_box(&pieces)))
    });
}

criterion_group!(
    benches,
    bench_solve_card,
    bench_solve_locked,
    bench_board_key,
    bench_successors,
    bench_format_board
);
criterion_main!(benches);
