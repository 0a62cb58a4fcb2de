// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compact configuration labels.
//!
//! ```text
//!  position  0123456789012345678901
//!  label     [abcdef,ghijkl,mnopqr]
//!  grid      123abcdef 456ghijkl 789mnopqr
//! ```
//!
//! Block 0 is always the identity block and is left out of the label; each
//! comma-separated group holds the six cells of blocks 1 and 2 in one row.

use super::constants::{BLOCK_WIDTH, CELLS, COLUMNS, GROUP_LENGTH, LABEL_LENGTH, ROWS};
use super::Grid;
use thiserror::Error;

/// Why a label could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// The line holds no `[`, so there is no label to read.
    #[error("no label found")]
    Missing,

    #[error("found {0} characters, expected {}", LABEL_LENGTH)]
    WrongLength(usize),

    #[error("expected '{expected}' at position {position}, found '{found}'")]
    UnexpectedCharacter {
        position: usize,
        expected: char,
        found: char,
    },

    #[error("expected a digit 1-9 at position {position}, found '{found}'")]
    BadDigit { position: usize, found: char },

    /// The label runs straight into the rule field.
    #[error("expected whitespace after the label, found '{0}'")]
    NoSeparator(char),
}

/// Character expected at a punctuation position of a label.
fn punctuation(position: usize) -> Option<char> {
    match position {
        0 => Some('['),
        7 | 14 => Some(','),
        21 => Some(']'),
        _ => None,
    }
}

/// Decode a label into its 27-cell grid.
///
/// The grid is not checked for validity.
pub fn decode(label: &str) -> Result<Grid, LabelError> {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() != LABEL_LENGTH {
        return Err(LabelError::WrongLength(chars.len()));
    }

    let mut cells = [0u8; CELLS];
    for (position, &found) in chars.iter().enumerate() {
        if let Some(expected) = punctuation(position) {
            if found != expected {
                return Err(LabelError::UnexpectedCharacter {
                    position,
                    expected,
                    found,
                });
            }
            continue;
        }
        let value = match found.to_digit(10) {
            Some(d) if d >= 1 => d as u8,
            _ => return Err(LabelError::BadDigit { position, found }),
        };
        let row = (position - 1) / (GROUP_LENGTH + 1);
        let column = BLOCK_WIDTH + (position - 1) % (GROUP_LENGTH + 1);
        cells[row * COLUMNS + column] = value;
    }

    // Block 0 reads 1..9 row by row.
    for row in 0..ROWS {
        for column in 0..BLOCK_WIDTH {
            cells[row * COLUMNS + column] = (row * BLOCK_WIDTH + column + 1) as u8;
        }
    }

    Ok(Grid(cells))
}

impl Grid {
    /// Render the compact label, or None if block 0 is not the identity block
    /// (such a grid has no label).
    pub fn label(&self) -> Option<String> {
        let mut label = String::with_capacity(LABEL_LENGTH);
        label.push('[');
        for row in 0..ROWS {
            for column in 0..BLOCK_WIDTH {
                if self.get(row, column) as usize != row * BLOCK_WIDTH + column + 1 {
                    return None;
                }
            }
            if row > 0 {
                label.push(',');
            }
            for column in BLOCK_WIDTH..COLUMNS {
                label.push(char::from(b'0' + self.get(row, column)));
            }
        }
        label.push(']');
        Some(label)
    }
}
