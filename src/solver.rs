//! Breadth-first puzzle solver.
//!
//! Key points:
//! - States are deduplicated by [`BoardKey`], which ignores piece identity,
//!   so interchangeable pieces are explored once
//! - The frontier stores whole piece lists; the visited set and parent map
//!   store only 9-byte keys
//! - A state is enqueued on first discovery, the same moment its parent
//!   entry is written, so parent entries always point along a shortest path
//! - The winning path is rebuilt by walking parent entries backwards and
//!   undoing each move on the piece that made it

use std::collections::hash_map::Entry;
use std::collections::VecDeque;

use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::grid::{BoardKey, Grid};
use crate::movegen::successors;
use crate::pieces::{Move, PieceSet};

/// Bounds on how much work a search may do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveLimits {
    /// Abort once more than this many distinct states have been discovered.
    /// `None` searches until the state space is exhausted.
    pub max_states: Option<usize>,
}

impl SolveLimits {
    pub const fn max_states(max_states: usize) -> Self {
        Self {
            max_states: Some(max_states),
        }
    }
}

/// Counters reported with every outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States dequeued and expanded (size of the visited set).
    pub states_expanded: usize,
    /// States ever reached (size of the parent map).
    pub states_discovered: usize,
    /// Largest frontier length seen.
    pub max_frontier: usize,
    /// Depth of the last expanded state; the move count when solved.
    pub depth: usize,
}

/// A winning line: `states[0]` is the input, each `states[i + 1]` follows
/// from `states[i]` by `moves[i]`, and the last state is solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub states: Vec<PieceSet>,
    pub moves: Vec<Move>,
}

impl Solution {
    /// Number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when the input was already solved.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn initial(&self) -> &PieceSet {
        &self.states[0]
    }

    pub fn goal(&self) -> &PieceSet {
        &self.states[self.states.len() - 1]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved {
        solution: Solution,
        stats: SearchStats,
    },
    /// The reachable state space holds no solved board.
    Unsolvable { stats: SearchStats },
    /// [`SolveLimits`] stopped the search first.
    Aborted { stats: SearchStats },
}

impl SolveOutcome {
    pub fn stats(&self) -> &SearchStats {
        match self {
            SolveOutcome::Solved { stats, .. }
            | SolveOutcome::Unsolvable { stats }
            | SolveOutcome::Aborted { stats } => stats,
        }
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveOutcome::Solved { solution, .. } => Some(solution),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SolveOutcome::Solved { solution, .. } => Some(solution),
            _ => None,
        }
    }
}

/// How a state was first reached.
#[derive(Debug, Clone, Copy)]
enum Parent {
    /// The initial state.
    Root,
    Step { from: BoardKey, mv: Move },
}

/// Write-once map from a state to the state and move that first reached it.
type ParentMap = FxHashMap<BoardKey, Parent>;

/// Finds a minimum-move solution with no resource limits.
pub fn solve(initial: &PieceSet) -> SolveOutcome {
    solve_with_limits(initial, SolveLimits::default())
}

/// Finds a minimum-move solution, or reports that none exists.
///
/// Searches layer by layer, so the first solved state dequeued is at
/// minimum depth. Among equally short solutions the one returned depends
/// only on the registry order of `initial`.
pub fn solve_with_limits(initial: &PieceSet, limits: SolveLimits) -> SolveOutcome {
    let mut parents: ParentMap = FxHashMap::default();
    parents.insert(BoardKey::render(initial), Parent::Root);

    let mut visited: FxHashSet<BoardKey> = FxHashSet::default();
    let mut frontier: VecDeque<(PieceSet, usize)> = VecDeque::from([(initial.clone(), 0)]);
    let mut stats = SearchStats {
        states_discovered: 1,
        max_frontier: 1,
        ..SearchStats::default()
    };
    let mut layer = 0;

    info!(
        "searching from a board with {} pieces (limit: {:?})",
        initial.pieces().len(),
        limits.max_states
    );

    while let Some((pieces, depth)) = frontier.pop_front() {
        if depth > layer {
            layer = depth;
            debug!(
                "layer {layer}: {} queued, {} expanded",
                frontier.len() + 1,
                visited.len()
            );
        }

        let grid = Grid::render(&pieces);
        let key = grid.key();

        // skip states that were already expanded
        if !visited.insert(key) {
            continue;
        }
        stats.states_expanded = visited.len();
        stats.depth = depth;

        if grid.is_goal(pieces.prisoner()) {
            let solution = reconstruct_path(pieces, &parents);
            info!(
                "solved in {} moves after expanding {} of {} discovered states",
                solution.len(),
                stats.states_expanded,
                stats.states_discovered
            );
            return SolveOutcome::Solved { solution, stats };
        }

        for (next, mv) in successors(&pieces, &grid) {
            if let Entry::Vacant(slot) = parents.entry(BoardKey::render(&next)) {
                slot.insert(Parent::Step { from: key, mv });
                frontier.push_back((next, depth + 1));
            }
        }
        stats.states_discovered = parents.len();
        stats.max_frontier = stats.max_frontier.max(frontier.len());

        if limits.max_states.is_some_and(|max| parents.len() > max) {
            info!(
                "aborted at depth {depth} after discovering {} states",
                stats.states_discovered
            );
            return SolveOutcome::Aborted { stats };
        }
    }

    info!(
        "no solution: exhausted {} states down to depth {}",
        stats.states_expanded, stats.depth
    );
    SolveOutcome::Unsolvable { stats }
}

/// Rebuilds the path from the initial state to `goal`.
///
/// Each parent entry names the move that first produced a state; undoing
/// that move on the piece with the same id yields the exact predecessor
/// piece list, because the predecessor is the list that was enqueued when
/// the entry was written.
fn reconstruct_path(goal: PieceSet, parents: &ParentMap) -> Solution {
    let mut states = vec![goal.clone()];
    let mut moves = Vec::new();
    let mut current = goal;

    loop {
        let key = BoardKey::render(&current);
        let parent = parents
            .get(&key)
            .expect("every reached state has a parent entry");
        match *parent {
            Parent::Root => break,
            Parent::Step { from, mv } => {
                let index = current
                    .index_of(mv.piece)
                    .expect("piece ids are stable across states");
                current.shift(index, mv.direction.opposite());
                debug_assert_eq!(BoardKey::render(&current), from);

                moves.push(mv);
                states.push(current.clone());
            }
        }
    }

    states.reverse();
    moves.reverse();
    Solution { states, moves }
}
