// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validity of a band configuration.
//!
//! A configuration is valid when each of its three rows and each of its three
//! blocks holds nine different values. Columns need no separate check: the
//! three cells of a column lie in one block.

use super::constants::{block_cell, cell, BLOCKS, COLUMNS, ROWS};
use super::Grid;

/// Check that no row and no block repeats a value.
pub fn is_valid(grid: &Grid) -> bool {
    for i in 0..COLUMNS {
        for j in (i + 1)..COLUMNS {
            for row in 0..ROWS {
                if grid[cell(row, i)] == grid[cell(row, j)] {
                    return false;
                }
            }
            for block in 0..BLOCKS {
                if grid[block_cell(block, i)] == grid[block_cell(block, j)] {
                    return false;
                }
            }
        }
    }
    true
}
