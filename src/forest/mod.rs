// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Verification of an equivalence forest.
//!
//! The enumerator groups the 36288 reduced band configurations into
//! equivalence classes and prints one tree per class, depth-first, each node
//! labelled with the rule that links it to its parent. This module replays
//! every rule and reports the size of each class.
//!
//! ## Module Structure
//!
//! - `record`: Splitting input lines into depth, label and rule
//! - `verifier`: The line-by-line verifier and its options and report
//! - `errors`: Error kinds, all fatal

pub mod errors;
pub mod record;
pub mod verifier;

pub use errors::{ErrorKind, Stage, VerifyError, VerifyResult};
pub use record::{parse_line, Line, Record};
pub use verifier::{ForestVerifier, Report, VerifyOptions, HEADER};

use std::io::{BufRead, Write};

/// Verify a whole forest read from `input`, writing the job list to `output`.
///
/// Stops at the first error. Summary lines of classes closed before the error
/// have already been written.
pub fn verify<R: BufRead, W: Write>(
    input: R,
    output: W,
    options: VerifyOptions,
) -> VerifyResult<Report> {
    let mut verifier = ForestVerifier::new(output, options)?;
    for line in input.lines() {
        verifier.process_line(&line?)?;
    }
    verifier.finish()
}
