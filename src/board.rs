//! Board representation for the 3x3 sliding-tile puzzle.
//!
//! A board is a flat row-major array of nine tile values, a permutation of
//! `0..=8`, where 0 marks the blank cell.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Cells per row and per column.
pub const SIDE: usize = 3;

/// Total number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Tile value used for the blank cell.
pub const BLANK: u8 = 0;

/// Largest tile value on the board.
const MAX_TILE: u8 = (CELLS - 1) as u8;

/// Start position solved by the default run.
pub const INITIAL: Board = Board::literal([1, 2, 3, 4, 0, 5, 6, 7, 8]);

/// Goal position solved by the default run.
pub const GOAL: Board = Board::literal([1, 2, 3, 4, 5, 6, 7, 8, 0]);

/// Converts a linear cell index to (row, col).
#[inline(always)]
pub const fn idx_to_cell(cell_index: usize) -> (usize, usize) {
    (cell_index / SIDE, cell_index % SIDE)
}

/// Converts (row, col) to a linear cell index.
///
/// Index order is row-major: `idx = row * SIDE + col`.
#[inline(always)]
pub const fn cell_to_idx(row: usize, col: usize) -> usize {
    row * SIDE + col
}

/// An immutable puzzle state.
///
/// Construction always checks the permutation invariant, so every `Board`
/// holds each value in `0..=8` exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board([u8; CELLS]);

impl Board {
    /// Creates a board after checking that `tiles` is a permutation of `0..=8`.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self> {
        let mut seen = [false; CELLS];

        for (position, &value) in tiles.iter().enumerate() {
            if value > MAX_TILE {
                return Err(Error::TileOutOfRange {
                    value,
                    position,
                    max: MAX_TILE,
                });
            }
            if seen[value as usize] {
                return Err(Error::DuplicateTile { value });
            }
            seen[value as usize] = true;
        }

        Ok(Self(tiles))
    }

    /// Creates a board from a constant, checking the invariant at compile time.
    pub const fn literal(tiles: [u8; CELLS]) -> Self {
        let mut seen = [false; CELLS];
        let mut i = 0;
        while i < CELLS {
            let value = tiles[i] as usize;
            assert!(value < CELLS, "tile out of range");
            assert!(!seen[value], "duplicate tile");
            seen[value] = true;
            i += 1;
        }
        Self(tiles)
    }

    /// Returns the tile values in row-major order.
    pub const fn tiles(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// Returns the cell index of the blank.
    pub fn blank_index(&self) -> usize {
        self.index_of(BLANK)
    }

    /// Returns the cell index holding `tile`.
    ///
    /// Every valid board contains every tile, so the lookup cannot miss.
    pub fn index_of(&self, tile: u8) -> usize {
        self.positions()[tile as usize]
    }

    /// Returns a table mapping each tile value to its cell index.
    pub fn positions(&self) -> [usize; CELLS] {
        let mut positions = [0; CELLS];
        for (cell_index, &tile) in self.0.iter().enumerate() {
            positions[tile as usize] = cell_index;
        }
        positions
    }

    /// Returns a copy with the cells at `a` and `b` exchanged.
    pub(crate) fn swapped(&self, a: usize, b: usize) -> Self {
        let mut tiles = self.0;
        tiles.swap(a, b);
        Self(tiles)
    }

    /// Counts pairs of non-blank tiles that appear in reverse order.
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.0.iter().copied().filter(|&t| t != BLANK).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| b < a).count())
            .sum()
    }

    /// Returns true if `goal` lies in the same half of the state space.
    ///
    /// On an odd-width board a blank move never changes inversion parity,
    /// so two boards are mutually reachable iff their parities match.
    pub fn can_reach(&self, goal: &Board) -> bool {
        self.inversions() % 2 == goal.inversions() % 2
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses nine tile values separated by commas and/or whitespace.
    fn from_str(input: &str) -> Result<Self> {
        let tokens: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.len() != CELLS {
            return Err(Error::WrongTileCount {
                expected: CELLS,
                got: tokens.len(),
            });
        }

        let mut tiles = [0u8; CELLS];
        for (slot, token) in tiles.iter_mut().zip(&tokens) {
            *slot = token.parse().map_err(|_| Error::InvalidToken {
                token: token.to_string(),
                context: input.to_string(),
            })?;
        }

        Board::new(tiles)
    }
}

impl fmt::Display for Board {
    /// Renders three rows of space-separated tiles; the blank shows as '.'.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..SIDE {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.0[cell_to_idx(row, col)] {
                    BLANK => write!(f, ".")?,
                    tile => write!(f, "{tile}")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_conversion_roundtrip() {
        for idx in 0..CELLS {
            let (row, col) = idx_to_cell(idx);
            assert!(row < SIDE && col < SIDE, "idx {idx} out of grid");
            assert_eq!(cell_to_idx(row, col), idx, "Roundtrip failed for index {idx}");
        }
    }

    #[test]
    fn test_new_accepts_permutation() {
        let board = Board::new([8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
        assert_eq!(board.blank_index(), 8);
        assert_eq!(board.index_of(8), 0);
    }

    #[test]
    fn test_new_rejects_out_of_range_tile() {
        let err = Board::new([1, 2, 3, 4, 9, 5, 6, 7, 8]).unwrap_err();
        assert_eq!(
            err,
            Error::TileOutOfRange {
                value: 9,
                position: 4,
                max: 8
            }
        );
    }

    #[test]
    fn test_new_rejects_duplicate_tile() {
        let err = Board::new([1, 1, 3, 4, 0, 5, 6, 7, 8]).unwrap_err();
        assert_eq!(err, Error::DuplicateTile { value: 1 });
    }

    #[test]
    fn test_parse_accepts_commas_and_spaces() {
        let board: Board = "1, 2, 3 4 0 5,6,7,8".parse().unwrap();
        assert_eq!(board, INITIAL);
    }

    #[test]
    fn test_parse_rejects_wrong_count() {
        let err = "1,2,3".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            Error::WrongTileCount {
                expected: 9,
                got: 3
            }
        );
    }

    #[test]
    fn test_parse_rejects_garbage_token() {
        let err = "1,2,3,4,x,5,6,7,8".parse::<Board>().unwrap_err();
        assert!(matches!(err, Error::InvalidToken { ref token, .. } if token == "x"));
    }

    #[test]
    fn test_display_marks_blank() {
        assert_eq!(INITIAL.to_string(), "1 2 3\n4 . 5\n6 7 8");
    }

    #[test]
    fn test_positions_table_inverts_tiles() {
        let positions = GOAL.positions();
        for (idx, &tile) in GOAL.tiles().iter().enumerate() {
            assert_eq!(positions[tile as usize], idx);
        }
    }

    #[test]
    fn test_inversion_parity() {
        assert_eq!(INITIAL.inversions(), 0);
        assert!(INITIAL.can_reach(&GOAL));

        let swapped = Board::new([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert_eq!(swapped.inversions(), 1);
        assert!(!swapped.can_reach(&GOAL));
    }
}
