// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Band configurations: the first three rows of a Sudoku grid.
//!
//! - `constants`: Dimensions and index helpers
//! - `codec`: Decoding compact labels such as `[456789,789123,123456]`
//! - `validity`: The row and block uniqueness check

pub mod codec;
pub mod constants;
pub mod validity;

pub use codec::{decode, LabelError};
pub use constants::*;
pub use validity::is_valid;

use std::fmt;
use std::ops::Index;

/// A band configuration of 27 cells, stored row-major.
///
/// Cells hold values in `1..=MAX_VALUE`. A grid is not necessarily valid;
/// see [`is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grid([u8; CELLS]);

impl Grid {
    /// Value at (`row`, `column`).
    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.0[cell(row, column)]
    }

    /// Check the row and block constraints.
    pub fn is_valid(&self) -> bool {
        validity::is_valid(self)
    }

    /// Exchange two cells.
    pub(crate) fn swap_cells(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }

    /// Replace every value `v` by `table[v]`.
    pub(crate) fn relabel(&mut self, table: &[u8; MAX_VALUE as usize + 1]) {
        for value in self.0.iter_mut() {
            *value = table[*value as usize];
        }
    }
}

impl Index<usize> for Grid {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

/// Rows separated by `/`, e.g. `123456789/456789123/789123456`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            if row > 0 {
                write!(f, "/")?;
            }
            for column in 0..COLUMNS {
                write!(f, "{}", self.get(row, column))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_access() {
        let grid = decode("[456789,789123,123456]").unwrap();
        assert_eq!(grid.get(1, 0), 4);
        assert_eq!(grid.get(2, 3), 1);
        assert_eq!(grid[26], 6);
    }

    #[test]
    fn test_relabel() {
        let mut grid = decode("[456789,789123,123456]").unwrap();
        let mut table = [0u8; MAX_VALUE as usize + 1];
        for v in 1..=MAX_VALUE {
            table[v as usize] = MAX_VALUE + 1 - v;
        }
        grid.relabel(&table);
        assert_eq!(grid.to_string(), "987654321/654321987/321987654");
    }

    #[test]
    fn test_grid_display() {
        let grid = decode("[456789,789123,123456]").unwrap();
        assert_eq!(grid.to_string(), "123456789/456789123/789123456");
    }
}
