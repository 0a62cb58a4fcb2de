// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dimensions of a band configuration and of its compact label.
//!
//! A configuration covers the first three rows of a Sudoku grid, which is the
//! first band of three 3×3 blocks. Cells are stored row-major:
//!
//! ```text
//!  0  1  2 |  3  4  5 |  6  7  8
//!  9 10 11 | 12 13 14 | 15 16 17
//! 18 19 20 | 21 22 23 | 24 25 26
//! ```

/// Number of rows in a band.
pub const ROWS: usize = 3;

/// Number of columns in a band (and in a full Sudoku grid).
pub const COLUMNS: usize = 9;

/// Number of cells in a band configuration.
pub const CELLS: usize = ROWS * COLUMNS;

/// Number of 3×3 blocks in a band.
pub const BLOCKS: usize = 3;

/// Width (and height) of one block.
pub const BLOCK_WIDTH: usize = 3;

/// Largest value a cell may hold; values run from 1 to `MAX_VALUE`.
pub const MAX_VALUE: u8 = 9;

/// Length of a compact label such as `[456789,789123,123456]`.
pub const LABEL_LENGTH: usize = 22;

/// Number of digits a label gives for each row (the cells of blocks 1 and 2).
pub const GROUP_LENGTH: usize = 6;

/// Number of configurations with block 0 fixed to the identity block and the
/// columns of blocks 1 and 2 reduced. A complete forest has one node per
/// configuration.
pub const CONFIGURATIONS: usize = 36288;

/// Index of cell (`row`, `column`).
pub const fn cell(row: usize, column: usize) -> usize {
    row * COLUMNS + column
}

/// Index of the `k`-th cell of `block`, counting the block's nine cells
/// row by row.
///
/// `k / BLOCK_WIDTH` must truncate: the quotient picks the row inside the
/// block, the remainder the column. Any rounding here silently mixes up
/// block membership.
pub const fn block_cell(block: usize, k: usize) -> usize {
    (k % BLOCK_WIDTH) + (k / BLOCK_WIDTH) * COLUMNS + BLOCK_WIDTH * block
}
