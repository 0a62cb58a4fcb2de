// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lines of the forest text.
//!
//! ```text
//! # comment
//! [456789,789123,123465] (ROOT)
//!   [456789,789123,132456] (R(1,2))
//!     [456789,789132,123465] (R(1,3))
//! ```
//!
//! Depth is the position of the first `[` divided by two, rounding down. The
//! label is read at offset `2 * depth`, so odd indentation shows up as a
//! malformed label. After the label comes at least one whitespace character,
//! then the rule, which may be wrapped in parentheses.

use crate::grid::constants::LABEL_LENGTH;
use crate::grid::LabelError;

/// One node of the forest, borrowed from its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub depth: usize,
    /// Up to `LABEL_LENGTH` characters; shorter only if the line is.
    pub label: &'a str,
    /// The rule token, without parentheses or surrounding whitespace.
    pub rule: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment(&'a str),
    Record(Record<'a>),
}

/// Split one input line (without its newline) into its parts.
///
/// Fails when the line has no `[`, or when the label is followed by anything
/// other than whitespace.
pub fn parse_line(line: &str) -> Result<Line<'_>, LabelError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.starts_with('#') {
        return Ok(Line::Comment(line));
    }
    if line.trim().is_empty() {
        return Ok(Line::Blank);
    }

    let bracket = line.find('[').ok_or(LabelError::Missing)?;
    let depth = bracket / 2;
    // A start inside a multi-byte character leaves no label to read.
    let rest = line.get(2 * depth..).unwrap_or("");
    let end = rest
        .char_indices()
        .nth(LABEL_LENGTH)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    let (label, tail) = rest.split_at(end);
    if let Some(found) = tail.chars().next().filter(|c| !c.is_whitespace()) {
        return Err(LabelError::NoSeparator(found));
    }

    Ok(Line::Record(Record {
        depth,
        label,
        rule: unwrap_rule(tail.trim()),
    }))
}

fn unwrap_rule(field: &str) -> &str {
    field
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .map(str::trim)
        .unwrap_or(field)
}
