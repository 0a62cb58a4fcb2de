// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Verifier for the equivalence forest of Sudoku band configurations.
//!
//! Counting the completions of a Sudoku grid reduces to counting them for
//! each way of filling the first band (the first three rows). With block 0
//! fixed to 1..9 and the columns of blocks 1 and 2 ordered, there are 36288
//! such configurations. Many of them have the same number of completions
//! because one is carried to the other by a symmetry: swapping rows, columns
//! within a block, whole blocks, or a few cells that form a closed rectangle.
//!
//! An external enumerator collects these relations as a forest, one tree per
//! equivalence class. This crate checks that forest.
//!
//! # Architecture
//!
//! - [`grid`]: The 27-cell configuration, its compact label and the validity check
//! - [`symmetry`]: The swaps, and reduction to canonical form
//! - [`rule`]: The rule grammar (`R(1,2)`, `2x3(1,7/1,2,3)'`, ...)
//! - [`state`]: The ancestor stack and counters owned by the verifier
//! - [`forest`]: Line parsing and the verifier itself
//!
//! # Verification
//!
//! For every node below a root, the rule on the node is applied to the parent
//! (or, for a reversed rule, to the node), the result is canonicalized, and it
//! must equal the other end of the edge. Both ends must be valid before the
//! rule is applied and the result must be valid after it. The first failure
//! stops the run.
//!
//! # References
//!
//! - Felgenhauer, B. and Jarvis, F. (2006). "Mathematics of Sudoku I."
//!   Mathematical Spectrum 39, 15–22.

pub mod forest;
pub mod grid;
pub mod rule;
pub mod state;
pub mod symmetry;

// Re-export commonly used types
pub use forest::{verify, ErrorKind, ForestVerifier, Report, VerifyError, VerifyOptions};
pub use grid::{decode, is_valid, Grid};
pub use rule::{Direction, Transform};
pub use symmetry::canonize;
