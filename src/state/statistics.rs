// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters over the nodes and rules seen by the verifier. They are kept in
//! the verifier and handed back in its report.

use crate::rule::{Direction, Transform};
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{AsRefStr, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, AsRefStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    Nodes,
    Roots,
    Reversed,
    RowSwaps,
    ColumnSwaps,
    BoxSwaps,
    PartialRowSwaps2,
    PartialRowSwaps3,
    PartialRowSwaps4,
    RestrictedColumnSwaps,
}

impl From<&Transform> for Counters {
    fn from(transform: &Transform) -> Self {
        match transform {
            Transform::RowSwap(..) => Counters::RowSwaps,
            Transform::ColumnSwap(..) => Counters::ColumnSwaps,
            Transform::BoxSwap(..) => Counters::BoxSwaps,
            Transform::PartialRowSwap { columns, .. } => match columns.len() {
                2 => Counters::PartialRowSwaps2,
                3 => Counters::PartialRowSwaps3,
                _ => Counters::PartialRowSwaps4,
            },
            Transform::ColumnSwapRestricted(..) => Counters::RestrictedColumnSwaps,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one verified edge: its transform kind, and whether it was reversed.
    pub fn record_edge(&mut self, transform: &Transform, direction: Direction) {
        self.increment_counter(Counters::from(transform));
        if direction == Direction::Reversed {
            self.increment_counter(Counters::Reversed);
        }
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// All counters with their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Counters, u64)> + '_ {
        Counters::iter().map(|counter| (counter, self.get(counter)))
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (counter, value) in self.iter() {
            writeln!(f, "{:<24}{:>8}", counter.as_ref(), value)?;
        }
        Ok(())
    }
}
