// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters gathered while building a dictionary. They are stored on the
//! dictionary itself and reported through `tracing` once a build finishes.

use std::fmt;

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// States taken off the BFS queue, or (state, layer) pairs expanded.
    StatesVisited,
    /// XOR edges examined from visited states.
    EdgesExamined,
    /// Codewords reconstructed into the final mapping.
    CodewordsEmitted,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildStatistics {
    stats: [u64; Counters::COUNT],
}

impl BuildStatistics {
    pub fn new() -> Self {
        BuildStatistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for BuildStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use strum::IntoEnumIterator;

        for (i, counter) in Counters::iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}
