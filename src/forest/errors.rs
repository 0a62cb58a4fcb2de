// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for forest verification.
//!
//! Every error is fatal: the verifier stops at the first one. Each variant
//! carries the input line and the labels and rule involved, enough to
//! reproduce the failure by hand.

use crate::grid::LabelError;
use crate::rule::RuleError;
use std::io;
use strum_macros::{AsRefStr, EnumCount as EnumCountMacro};
use thiserror::Error;

/// Result type for verification.
pub type VerifyResult<T> = Result<T, VerifyError>;

/// The kind of a [`VerifyError`], as printed in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumCountMacro)]
pub enum ErrorKind {
    MalformedLabel,
    MalformedRule,
    RuleMisuse,
    InvalidConfiguration,
    Mismatch,
    MissingParent,
    CanonicalFormInvalid,
    Incomplete,
    Halted,
    Io,
}

/// When a configuration was found to be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Stage {
    #[strum(to_string = "before applying the rule")]
    BeforeTransform,
    #[strum(to_string = "after applying the rule")]
    AfterTransform,
}

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("line {line}: malformed label {label:?}: {reason}")]
    MalformedLabel {
        line: usize,
        label: String,
        reason: LabelError,
    },

    #[error("line {line}: malformed rule {rule:?} at depth {depth}: {reason}")]
    MalformedRule {
        line: usize,
        depth: usize,
        rule: String,
        reason: RuleError,
    },

    /// `ROOT` below depth 0, or any other rule at depth 0.
    #[error("line {line}: rule {rule} used at depth {depth}; ROOT labels exactly the depth-0 nodes")]
    RuleMisuse {
        line: usize,
        depth: usize,
        rule: String,
    },

    #[error(
        "line {line}: invalid configuration {stage}: {parent} (line {parent_line}) -> {node} by {rule}"
    )]
    InvalidConfiguration {
        line: usize,
        depth: usize,
        stage: Stage,
        parent: String,
        parent_line: usize,
        node: String,
        rule: String,
    },

    #[error(
        "line {line}: {rule} does not connect {parent} (line {parent_line}) and {node}: derived {derived}, expected {expected}"
    )]
    Mismatch {
        line: usize,
        depth: usize,
        parent: String,
        parent_line: usize,
        node: String,
        rule: String,
        derived: String,
        expected: String,
    },

    /// A node below depth 0 with nothing on the stack above it.
    #[error("line {line}: node {label} at depth {depth} has no parent")]
    MissingParent {
        line: usize,
        depth: usize,
        label: String,
    },

    /// Canonicalization of a valid grid produced an invalid one.
    #[error("line {line}: canonical form {derived} is invalid after {rule}")]
    CanonicalFormInvalid {
        line: usize,
        rule: String,
        derived: String,
    },

    #[error(
        "forest is incomplete: {nodes} nodes, {distinct} distinct configurations, expected {expected} of each"
    )]
    Incomplete {
        nodes: usize,
        distinct: usize,
        expected: usize,
    },

    #[error("verifier already halted on {0:?}")]
    Halted(ErrorKind),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl VerifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VerifyError::MalformedLabel { .. } => ErrorKind::MalformedLabel,
            VerifyError::MalformedRule { .. } => ErrorKind::MalformedRule,
            VerifyError::RuleMisuse { .. } => ErrorKind::RuleMisuse,
            VerifyError::InvalidConfiguration { .. } => ErrorKind::InvalidConfiguration,
            VerifyError::Mismatch { .. } => ErrorKind::Mismatch,
            VerifyError::MissingParent { .. } => ErrorKind::MissingParent,
            VerifyError::CanonicalFormInvalid { .. } => ErrorKind::CanonicalFormInvalid,
            VerifyError::Incomplete { .. } => ErrorKind::Incomplete,
            VerifyError::Halted(_) => ErrorKind::Halted,
            VerifyError::Io(_) => ErrorKind::Io,
        }
    }

    /// Input line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            VerifyError::MalformedLabel { line, .. }
            | VerifyError::MalformedRule { line, .. }
            | VerifyError::RuleMisuse { line, .. }
            | VerifyError::InvalidConfiguration { line, .. }
            | VerifyError::Mismatch { line, .. }
            | VerifyError::MissingParent { line, .. }
            | VerifyError::CanonicalFormInvalid { line, .. } => Some(*line),
            VerifyError::Incomplete { .. } | VerifyError::Halted(_) | VerifyError::Io(_) => None,
        }
    }
}
