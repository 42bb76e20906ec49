//! Distance estimates that guide the search.
//!
//! Each heuristic maps `(board, goal)` to a non-negative score; lower means
//! closer to the goal. All three are pure and cheap enough to call on every
//! generated successor.

use clap::ValueEnum;

use crate::board::{idx_to_cell, Board, BLANK};

/// A scoring function usable by the search engine.
pub trait Heuristic {
    /// Short identifier shown in reports.
    fn name(&self) -> &'static str;

    /// Estimates the remaining distance from `board` to `goal`.
    fn estimate(&self, board: &Board, goal: &Board) -> f64;
}

/// h1: number of cells whose tile differs from the goal.
///
/// The blank is counted like any other tile.
pub fn misplaced_tiles(board: &Board, goal: &Board) -> f64 {
    board
        .tiles()
        .iter()
        .zip(goal.tiles())
        .filter(|(tile, wanted)| tile != wanted)
        .count() as f64
}

/// h2: sum of Manhattan distances of each non-blank tile to its goal cell.
pub fn manhattan(board: &Board, goal: &Board) -> f64 {
    tile_offsets(board, goal)
        .map(|(rows, cols)| rows.abs() + cols.abs())
        .sum::<i32>() as f64
}

/// h3: sum of straight-line distances of each non-blank tile to its goal cell.
pub fn euclidean(board: &Board, goal: &Board) -> f64 {
    tile_offsets(board, goal)
        .map(|(rows, cols)| f64::from(rows * rows + cols * cols).sqrt())
        .sum()
}

/// Yields the (row, col) offset between each non-blank tile and its goal cell,
/// in board cell order.
fn tile_offsets<'a>(board: &'a Board, goal: &Board) -> impl Iterator<Item = (i32, i32)> + 'a {
    let goal_positions = goal.positions();

    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != BLANK)
        .map(move |(cell_index, &tile)| {
            let (row, col) = idx_to_cell(cell_index);
            let (goal_row, goal_col) = idx_to_cell(goal_positions[tile as usize]);
            (
                row as i32 - goal_row as i32,
                col as i32 - goal_col as i32,
            )
        })
}

/// Selects one of the built-in heuristics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HeuristicKind {
    /// Misplaced tiles.
    H1,
    /// Manhattan distance.
    H2,
    /// Euclidean distance.
    H3,
}

impl HeuristicKind {
    /// All built-in heuristics in report order.
    pub const ALL: [HeuristicKind; 3] = [HeuristicKind::H1, HeuristicKind::H2, HeuristicKind::H3];

    /// 1-based number used in report lines (`h1`, `h2`, `h3`).
    pub const fn index(self) -> usize {
        match self {
            HeuristicKind::H1 => 1,
            HeuristicKind::H2 => 2,
            HeuristicKind::H3 => 3,
        }
    }
}

impl Heuristic for HeuristicKind {
    fn name(&self) -> &'static str {
        match self {
            HeuristicKind::H1 => "h1",
            HeuristicKind::H2 => "h2",
            HeuristicKind::H3 => "h3",
        }
    }

    fn estimate(&self, board: &Board, goal: &Board) -> f64 {
        match self {
            HeuristicKind::H1 => misplaced_tiles(board, goal),
            HeuristicKind::H2 => manhattan(board, goal),
            HeuristicKind::H3 => euclidean(board, goal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GOAL, INITIAL};
    use crate::moves::successors;

    fn sample_boards() -> Vec<Board> {
        vec![
            INITIAL,
            GOAL,
            Board::new([8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap(),
            Board::new([0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap(),
            Board::new([2, 8, 3, 1, 6, 4, 7, 0, 5]).unwrap(),
        ]
    }

    #[test]
    fn test_zero_on_goal() {
        for board in sample_boards() {
            for kind in HeuristicKind::ALL {
                assert_eq!(kind.estimate(&board, &board), 0.0, "{} on {board:?}", kind.name());
            }
        }
    }

    #[test]
    fn test_bounds() {
        for board in sample_boards() {
            for goal in sample_boards() {
                let h1 = misplaced_tiles(&board, &goal);
                assert!((0.0..=9.0).contains(&h1));
                assert!(manhattan(&board, &goal) >= 0.0);
                assert!(euclidean(&board, &goal) >= 0.0);
            }
        }
    }

    #[test]
    fn test_fixed_example_values() {
        // cells 4..=8 all differ, blank included
        assert_eq!(misplaced_tiles(&INITIAL, &GOAL), 5.0);
        // tiles 5, 7, 8 are one step away, tile 6 is (1, 2) away
        assert_eq!(manhattan(&INITIAL, &GOAL), 6.0);
        let expected = 3.0 + 5.0_f64.sqrt();
        assert!((euclidean(&INITIAL, &GOAL) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_misplaced_counts_blank() {
        let board = Board::new([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert_eq!(misplaced_tiles(&board, &GOAL), 2.0);
        assert_eq!(manhattan(&board, &GOAL), 1.0);
        assert_eq!(euclidean(&board, &GOAL), 1.0);
    }

    #[test]
    fn test_euclidean_never_exceeds_manhattan() {
        for board in sample_boards() {
            assert!(euclidean(&board, &GOAL) <= manhattan(&board, &GOAL) + 1e-12);
        }
    }

    #[test]
    fn test_manhattan_changes_by_one_per_move() {
        for board in sample_boards() {
            let here = manhattan(&board, &GOAL);
            for (_, next) in successors(&board) {
                assert_eq!((manhattan(&next, &GOAL) - here).abs(), 1.0);
            }
        }
    }

    #[test]
    fn test_index_matches_name() {
        for kind in HeuristicKind::ALL {
            assert_eq!(kind.name(), format!("h{}", kind.index()));
        }
    }
}
