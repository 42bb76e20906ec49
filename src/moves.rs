//! Blank-tile moves and the successor relation.
//!
//! A move names the direction the blank travels. Swapping the blank with a
//! neighbour keeps the board a permutation, so successors never need
//! revalidation.

use std::fmt;

use crate::board::{cell_to_idx, idx_to_cell, Board, SIDE};

/// Direction the blank tile moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in expansion order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column offset applied to the blank.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    pub const fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Upper-case label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Move::Up => "UP",
            Move::Down => "DOWN",
            Move::Left => "LEFT",
            Move::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Board {
    /// Slides the blank one step in `direction`.
    ///
    /// Returns `None` if the blank would leave the grid.
    pub fn apply(&self, direction: Move) -> Option<Board> {
        let blank = self.blank_index();
        let (row, col) = idx_to_cell(blank);
        let (delta_row, delta_col) = direction.delta();

        let new_row = row.checked_add_signed(delta_row).filter(|&r| r < SIDE)?;
        let new_col = col.checked_add_signed(delta_col).filter(|&c| c < SIDE)?;

        Some(self.swapped(blank, cell_to_idx(new_row, new_col)))
    }

    /// Replays `path` from this board, returning the final board.
    ///
    /// Returns `None` as soon as a move is illegal.
    pub fn apply_path(&self, path: &[Move]) -> Option<Board> {
        path.iter()
            .try_fold(*self, |board, &direction| board.apply(direction))
    }
}

/// Returns every board one blank move away, tagged with the move taken.
///
/// Order follows [`Move::ALL`] so search output is reproducible.
pub fn successors(board: &Board) -> impl Iterator<Item = (Move, Board)> + '_ {
    Move::ALL
        .into_iter()
        .filter_map(move |direction| board.apply(direction).map(|next| (direction, next)))
}
