// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable verifier state.
//!
//! - `ancestors`: The depth-indexed ancestor stack and the running class size
//! - `statistics`: Counters over verified nodes and rules
//!
//! Both are owned by one verifier and rebuilt from the input stream; nothing
//! here is persisted.

pub mod ancestors;
pub mod statistics;

pub use ancestors::{ClassSummary, Node, VerifierState};
pub use statistics::{Counters, Statistics};
