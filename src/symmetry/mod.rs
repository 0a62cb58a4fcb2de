// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry operations on band configurations and their canonical form.
//!
//! ## Module Structure
//!
//! - `transform`: Row, column and block swaps, applied in place
//! - `canonical`: Reduction to the canonical representative
//! - `mod`: Public API and re-exports

pub mod canonical;
pub mod transform;

pub use canonical::{canonical_form, canonize};
pub use transform::{swap_box, swap_column, swap_partial_row, swap_row, ALL_COLUMNS};
