//! Text formatting for search results.
//!
//! Everything here returns strings; printing is left to the binary.

use std::fmt::Write;

use crate::board::Board;
use crate::heuristics::{Heuristic, HeuristicKind};
use crate::moves::Move;
use crate::solver::{Outcome, SearchStats};

/// Joins move labels with ", ".
pub fn format_path(path: &[Move]) -> String {
    path.iter()
        .map(|direction| direction.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats the result lines for one heuristic.
///
/// A found path gives a solution line and a move count line. When no path
/// exists only the "no solution" line is written; there is no count to report.
pub fn format_outcome(kind: HeuristicKind, outcome: &Outcome) -> String {
    let i = kind.index();
    match outcome {
        Outcome::Found(path) => format!(
            "Solution using h{i}: {}\nNumber of moves using h{i}: {}\n",
            format_path(path),
            path.len()
        ),
        Outcome::NotFound => format!("No solution found using h{i}.\n"),
    }
}

/// Formats the result lines for several heuristics, in the order given.
pub fn format_comparison(results: &[(HeuristicKind, Outcome)]) -> String {
    results
        .iter()
        .map(|(kind, outcome)| format_outcome(*kind, outcome))
        .collect()
}

/// Formats the search counters for one heuristic as a single line.
pub fn format_stats(kind: HeuristicKind, stats: &SearchStats) -> String {
    format!(
        "{}: expanded {}, generated {}, frontier peak {}",
        kind.name(),
        stats.expanded,
        stats.generated,
        stats.frontier_peak
    )
}

/// Renders every board visited along `path`, starting with `initial`.
///
/// Stops early if a move is illegal, which cannot happen for paths returned
/// by the solver.
pub fn format_trace(initial: &Board, path: &[Move]) -> String {
    let mut output = format!("Start:\n{initial}\n");
    let mut board = *initial;

    for (step, &direction) in path.iter().enumerate() {
        let Some(next) = board.apply(direction) else {
            break;
        };
        board = next;
        // writing into a String cannot fail
        let _ = write!(output, "\nStep {} ({direction}):\n{board}\n", step + 1);
    }

    output
}

/// Formats the value of each built-in heuristic for `board` against `goal`.
pub fn format_estimates(board: &Board, goal: &Board) -> String {
    HeuristicKind::ALL
        .iter()
        .map(|kind| format!("{}: {}\n", kind.name(), kind.estimate(board, goal)))
        .collect()
}
