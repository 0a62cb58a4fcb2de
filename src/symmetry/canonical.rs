// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical form of a band configuration.
//!
//! Every configuration is reduced to a representative of its class in three
//! steps, each of which leaves the number of completions unchanged:
//!
//! 1. Relabel the values so that block 0, read row by row, becomes 1..9.
//! 2. Order the columns of blocks 1 and 2 by their top cell.
//! 3. Swap blocks 1 and 2 if block 2 starts with the smaller top cell.
//!
//! Blocks 1 and 2 can then be written down as the six-digit groups of a label.

use super::transform::{swap_box, swap_column};
use crate::grid::constants::{block_cell, BLOCK_WIDTH, MAX_VALUE};
use crate::grid::Grid;

/// Reduce a valid configuration to its canonical form, in place.
///
/// The result is valid whenever the input is. Canonizing twice gives the same
/// grid as canonizing once.
pub fn canonize(grid: &mut Grid) {
    let mut relabel = [0u8; MAX_VALUE as usize + 1];
    for k in 0..9 {
        relabel[grid[block_cell(0, k)] as usize] = k as u8 + 1;
    }
    grid.relabel(&relabel);

    sort_block_columns(grid, 1);
    sort_block_columns(grid, 2);

    if grid[BLOCK_WIDTH] > grid[2 * BLOCK_WIDTH] {
        swap_box(grid, 1, 2);
    }
}

/// Canonical form of `grid`, leaving `grid` untouched.
pub fn canonical_form(grid: &Grid) -> Grid {
    let mut reduced = *grid;
    canonize(&mut reduced);
    reduced
}

/// Three compare-swaps that order the columns of `block` by their row-0 value.
fn sort_block_columns(grid: &mut Grid, block: usize) {
    let first = block * BLOCK_WIDTH;
    for c in [first, first + 1, first] {
        if grid[c] > grid[c + 1] {
            swap_column(grid, c, c + 1);
        }
    }
}
