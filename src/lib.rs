//! 8-Puzzle Solver Library
//!
//! Greedy best-first search over 3x3 sliding-tile boards, guided by one of
//! three interchangeable heuristics.

pub mod board;
pub mod error;
pub mod heuristics;
pub mod moves;
pub mod report;
pub mod solver;

pub use board::{Board, GOAL, INITIAL};
pub use error::Error;
pub use heuristics::{Heuristic, HeuristicKind};
pub use moves::Move;
pub use solver::{gbfs, Outcome, SearchResult, SearchStats};

/// Solves `initial` toward `goal` once per heuristic in `kinds`.
///
/// Each run owns its own frontier and visited set; nothing is shared between
/// heuristics.
pub fn compare(
    initial: &Board,
    goal: &Board,
    kinds: &[HeuristicKind],
) -> Vec<(HeuristicKind, SearchResult)> {
    kinds
        .iter()
        .map(|&kind| (kind, gbfs(initial, goal, &kind)))
        .collect()
}
