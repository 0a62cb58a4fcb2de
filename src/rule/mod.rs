// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rules connecting a node of the forest to its parent.
//!
//! A rule token is either `ROOT`, which labels the root of each tree, or a
//! transform such as `R(1,2)` or `4x2(1,6,9,8/2,3)`, optionally followed by
//! `'`. Without the apostrophe the transform maps the parent to the node;
//! with it, the node to the parent. Either way the result is compared after
//! canonicalization.
//!
//! Surface forms use 1-based indices; [`Transform`] stores them 0-based.

pub mod parser;

pub use parser::{Axis, RuleError};

use crate::grid::Grid;
use crate::symmetry::{swap_box, swap_column, swap_partial_row, swap_row};
use std::fmt;

/// The rule token of a tree root.
pub const ROOT: &str = "ROOT";

/// Which way a rule is applied along its edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Parent to node.
    Forward,
    /// Node to parent (token ends in `'`).
    Reversed,
}

/// Split off the trailing `'` of a rule token.
pub fn split_direction(token: &str) -> (&str, Direction) {
    match token.strip_suffix('\'') {
        Some(body) => (body, Direction::Reversed),
        None => (token, Direction::Forward),
    }
}

/// A symmetry operation named by a rule, with 0-based parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transform {
    /// `R(a,b)`: swap two rows.
    RowSwap(usize, usize),
    /// `C(a,b)`: swap two columns.
    ColumnSwap(usize, usize),
    /// `B(a,b)`: swap two blocks.
    BoxSwap(usize, usize),
    /// `2x2`, `3x2`, `4x2`: swap two rows in the listed columns only.
    PartialRowSwap {
        columns: Vec<usize>,
        rows: (usize, usize),
    },
    /// `2x3(a,b/1,2,3)`: swap two columns, which may lie in different blocks.
    ColumnSwapRestricted(usize, usize),
}

impl Transform {
    /// Apply the transform to `grid` in place.
    ///
    /// The result may be invalid; see [`crate::symmetry::transform`].
    pub fn apply(&self, grid: &mut Grid) {
        match self {
            Transform::RowSwap(r1, r2) => swap_row(grid, *r1, *r2),
            Transform::ColumnSwap(c1, c2) | Transform::ColumnSwapRestricted(c1, c2) => {
                swap_column(grid, *c1, *c2)
            }
            Transform::BoxSwap(b1, b2) => swap_box(grid, *b1, *b2),
            Transform::PartialRowSwap { columns, rows } => {
                swap_partial_row(grid, rows.0, rows.1, columns)
            }
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::RowSwap(a, b) => write!(f, "R({},{})", a + 1, b + 1),
            Transform::ColumnSwap(a, b) => write!(f, "C({},{})", a + 1, b + 1),
            Transform::BoxSwap(a, b) => write!(f, "B({},{})", a + 1, b + 1),
            Transform::PartialRowSwap { columns, rows } => {
                write!(f, "{}x2(", columns.len())?;
                for (i, column) in columns.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", column + 1)?;
                }
                write!(f, "/{},{})", rows.0 + 1, rows.1 + 1)
            }
            Transform::ColumnSwapRestricted(a, b) => {
                write!(f, "2x3({},{}/1,2,3)", a + 1, b + 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::decode;

    #[test]
    fn test_split_direction() {
        assert_eq!(split_direction("R(1,2)"), ("R(1,2)", Direction::Forward));
        assert_eq!(split_direction("R(1,2)'"), ("R(1,2)", Direction::Reversed));
        assert_eq!(split_direction("ROOT"), ("ROOT", Direction::Forward));
    }

    #[test]
    fn test_display_uses_one_based_indices() {
        assert_eq!(Transform::RowSwap(0, 2).to_string(), "R(1,3)");
        assert_eq!(Transform::BoxSwap(1, 2).to_string(), "B(2,3)");
        assert_eq!(
            Transform::PartialRowSwap {
                columns: vec![0, 5, 8, 7],
                rows: (1, 2)
            }
            .to_string(),
            "4x2(1,6,9,8/2,3)"
        );
        assert_eq!(
            Transform::ColumnSwapRestricted(0, 6).to_string(),
            "2x3(1,7/1,2,3)"
        );
    }

    #[test]
    fn test_apply_restricted_column_swap() {
        let mut grid = decode("[456789,789123,123456]").unwrap();
        Transform::ColumnSwapRestricted(0, 6).apply(&mut grid);
        assert_eq!(grid.to_string(), "723456189/156789423/489123756");
        assert!(grid.is_valid());
    }

    #[test]
    fn test_apply_partial_row_swap() {
        let mut grid = decode("[457689,189723,623154]").unwrap();
        Transform::PartialRowSwap {
            columns: vec![0, 3],
            rows: (0, 1),
        }
        .apply(&mut grid);
        assert_eq!(grid.to_string(), "423157689/156489723/789623154");
    }
}
