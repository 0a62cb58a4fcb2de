// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! In-place symmetry operations on a band configuration.
//!
//! Rows, row indices and block indices are zero-based here. Swapping whole
//! rows, two columns of one block, or two whole blocks maps a valid
//! configuration to a valid one with the same number of completions. The
//! partial variants (some columns of two rows, or two columns of different
//! blocks) only do so when the result happens to be valid, so callers must
//! check validity afterwards.

use crate::grid::constants::{cell, BLOCK_WIDTH, COLUMNS, ROWS};
use crate::grid::Grid;

/// Every column, for swapping whole rows.
pub const ALL_COLUMNS: [usize; COLUMNS] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

/// Exchange rows `r1` and `r2`.
pub fn swap_row(grid: &mut Grid, r1: usize, r2: usize) {
    swap_partial_row(grid, r1, r2, &ALL_COLUMNS);
}

/// Exchange the cells of rows `r1` and `r2` in the given columns only.
pub fn swap_partial_row(grid: &mut Grid, r1: usize, r2: usize, columns: &[usize]) {
    for &column in columns {
        grid.swap_cells(cell(r1, column), cell(r2, column));
    }
}

/// Exchange columns `c1` and `c2`.
pub fn swap_column(grid: &mut Grid, c1: usize, c2: usize) {
    for row in 0..ROWS {
        grid.swap_cells(cell(row, c1), cell(row, c2));
    }
}

/// Exchange blocks `b1` and `b2`, column by column.
pub fn swap_box(grid: &mut Grid, b1: usize, b2: usize) {
    for k in 0..BLOCK_WIDTH {
        swap_column(grid, b1 * BLOCK_WIDTH + k, b2 * BLOCK_WIDTH + k);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::decode;

    fn band() -> Grid {
        decode("[457689,189723,623154]").unwrap()
    }

    #[test]
    fn test_swap_row_involution() {
        let original = band();
        for (r1, r2) in [(0, 1), (0, 2), (1, 2)] {
            let mut grid = original;
            swap_row(&mut grid, r1, r2);
            assert_ne!(grid, original);
            swap_row(&mut grid, r1, r2);
            assert_eq!(grid, original);
        }
    }

    #[test]
    fn test_swap_column_involution() {
        let original = band();
        for c2 in 1..COLUMNS {
            let mut grid = original;
            swap_column(&mut grid, 0, c2);
            swap_column(&mut grid, 0, c2);
            assert_eq!(grid, original);
        }
    }

    #[test]
    fn test_swap_box_involution() {
        let original = band();
        let mut grid = original;
        swap_box(&mut grid, 1, 2);
        assert_ne!(grid, original);
        swap_box(&mut grid, 1, 2);
        assert_eq!(grid, original);
    }

    #[test]
    fn test_swap_row_moves_whole_rows() {
        let mut grid = band();
        swap_row(&mut grid, 0, 2);
        assert_eq!(grid.to_string(), "789623154/456189723/123457689");
    }

    #[test]
    fn test_swap_partial_row_touches_only_given_columns() {
        let mut grid = band();
        swap_partial_row(&mut grid, 0, 1, &[3, 6]);
        assert_eq!(grid.to_string(), "123157789/456489623/789623154");
    }

    #[test]
    fn test_swap_box_moves_columns_in_order() {
        let mut grid = band();
        swap_box(&mut grid, 0, 2);
        assert_eq!(grid.to_string(), "689457123/723189456/154623789");
    }

    #[test]
    fn test_whole_swaps_preserve_validity() {
        let original = band();
        assert!(original.is_valid());

        let mut grid = original;
        swap_row(&mut grid, 1, 2);
        assert!(grid.is_valid());

        let mut grid = original;
        swap_column(&mut grid, 3, 5);
        assert!(grid.is_valid());

        let mut grid = original;
        swap_box(&mut grid, 0, 1);
        assert!(grid.is_valid());
    }
}
