// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grammar of rule tokens (without the trailing `'`).
//!
//! ```text
//! transform := keyword "(" group ("/" group)? ")"
//! group     := index ("," index)*
//! index     := digit+                      (1-based)
//!
//! R(a,b)              rows a, b
//! C(a,b)              columns a, b
//! B(a,b)              blocks a, b
//! 2x2(a,b/r,s)        columns a, b of rows r, s
//! 3x2(a,b,c/r,s)      columns a, b, c of rows r, s
//! 4x2(a,b,c,d/r,s)    columns a, b, c, d of rows r, s
//! 2x3(a,b/1,2,3)      columns a, b; the suffix is literally 1,2,3
//! ```
//!
//! Every index is range checked, and the indices within one group must differ.

use super::Transform;
use crate::grid::constants::{BLOCKS, COLUMNS, ROWS};
use std::str::FromStr;
use strum_macros::Display;
use thiserror::Error;

/// What an index counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
    Block,
}

impl Axis {
    fn max(self) -> usize {
        match self {
            Axis::Row => ROWS,
            Axis::Column => COLUMNS,
            Axis::Block => BLOCKS,
        }
    }
}

/// Why a rule token does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("empty rule")]
    Empty,

    #[error("unknown rule {0:?}")]
    UnknownKeyword(String),

    #[error("expected parenthesised parameters after {0}")]
    BadParameters(String),

    #[error("{keyword} takes parameter groups of sizes {expected:?}, found {found:?}")]
    Arity {
        keyword: String,
        expected: &'static [usize],
        found: Vec<usize>,
    },

    #[error("bad index {0:?}")]
    BadNumber(String),

    #[error("{axis} {value} out of range 1..={max}")]
    OutOfRange { axis: Axis, value: usize, max: usize },

    #[error("{axis} {value} listed twice")]
    Repeated { axis: Axis, value: usize },

    #[error("2x3 rule must end in /1,2,3, found /{0}")]
    RestrictedSuffix(String),
}

/// Suffix that makes a `2x3` rule a plain column swap.
const RESTRICTED_SUFFIX: &str = "1,2,3";

impl FromStr for Transform {
    type Err = RuleError;

    fn from_str(text: &str) -> Result<Self, RuleError> {
        if text.is_empty() {
            return Err(RuleError::Empty);
        }
        let keyword = match text.find('(') {
            Some(open) => &text[..open],
            None => text,
        };
        let expected: &'static [usize] = match keyword {
            "R" | "C" | "B" => &[2],
            "2x2" => &[2, 2],
            "3x2" => &[3, 2],
            "4x2" => &[4, 2],
            "2x3" => &[2, 3],
            _ => return Err(RuleError::UnknownKeyword(text.to_string())),
        };
        let params = text[keyword.len()..]
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| RuleError::BadParameters(keyword.to_string()))?;
        let groups: Vec<&str> = params.split('/').collect();
        let found: Vec<usize> = groups.iter().map(|g| g.split(',').count()).collect();
        if found != expected {
            return Err(RuleError::Arity {
                keyword: keyword.to_string(),
                expected,
                found,
            });
        }

        match keyword {
            "R" => {
                let (a, b) = pair(groups[0], Axis::Row)?;
                Ok(Transform::RowSwap(a, b))
            }
            "C" => {
                let (a, b) = pair(groups[0], Axis::Column)?;
                Ok(Transform::ColumnSwap(a, b))
            }
            "B" => {
                let (a, b) = pair(groups[0], Axis::Block)?;
                Ok(Transform::BoxSwap(a, b))
            }
            "2x3" => {
                if groups[1] != RESTRICTED_SUFFIX {
                    return Err(RuleError::RestrictedSuffix(groups[1].to_string()));
                }
                let (a, b) = pair(groups[0], Axis::Column)?;
                Ok(Transform::ColumnSwapRestricted(a, b))
            }
            _ => {
                let columns = indices(groups[0], Axis::Column)?;
                let rows = pair(groups[1], Axis::Row)?;
                Ok(Transform::PartialRowSwap { columns, rows })
            }
        }
    }
}

/// Parse a comma-separated group of distinct 1-based indices, returning them
/// 0-based.
fn indices(group: &str, axis: Axis) -> Result<Vec<usize>, RuleError> {
    let mut values = Vec::new();
    for part in group.split(',') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RuleError::BadNumber(part.to_string()));
        }
        let value: usize = part
            .parse()
            .map_err(|_| RuleError::BadNumber(part.to_string()))?;
        if value == 0 || value > axis.max() {
            return Err(RuleError::OutOfRange {
                axis,
                value,
                max: axis.max(),
            });
        }
        if values.contains(&(value - 1)) {
            return Err(RuleError::Repeated { axis, value });
        }
        values.push(value - 1);
    }
    Ok(values)
}

fn pair(group: &str, axis: Axis) -> Result<(usize, usize), RuleError> {
    let values = indices(group, axis)?;
    Ok((values[0], values[1]))
}
