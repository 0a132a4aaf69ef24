//! Iterator adapters for working with [`Run`] sequences.
//!
//! This module provides utilities for manipulating iterators of [`Run`],
//! including expanding runs back into indices and shifting and scaling runs
//! (used to turn logical item runs into byte spans).
//!
//! # Provided Adapters
//!
//! - [`ExpandRuns`]: Yields the members of each run, concatenated in order.
//! - [`ShiftRuns`]: Shifts every run start by a signed offset (with overflow checking).
//! - [`ScaleRuns`]: Multiplies run starts and counts by a factor (with overflow checking).
//!
//! The [`RunIteratorsExt`] trait is implemented for all iterators over [`Run`],
//! providing convenient methods to construct these adapters.
//!
//! [`Run`]: crate::Run
//! [`ExpandRuns`]: expand::ExpandRuns
//! [`ShiftRuns`]: shift::ShiftRuns
//! [`ScaleRuns`]: scale::ScaleRuns

use crate::run::Run;

pub mod expand;
pub mod scale;
pub mod shift;

/// Extension trait for more idiomatic usage of the run iterator adapters.
pub trait RunIteratorsExt: Iterator<Item = Run> + Sized {
    /// Adapts an iterator of runs into the concatenation of their members.
    fn expand_runs(self) -> expand::ExpandRuns<Self> {
        expand::ExpandRuns::new(self)
    }

    /// Adapts an iterator of runs to yield runs shifted by `offset`.
    ///
    /// # Panics
    ///
    /// Panics if a shifted start or end does not fit in `i64`.
    fn shift_runs(self, offset: i64) -> shift::ShiftRuns<Self> {
        shift::ShiftRuns::new(self, offset)
    }

    /// Adapts an iterator of runs to yield runs with start and count multiplied
    /// by `factor`.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is 0 or a scaled value overflows.
    fn scale_runs(self, factor: usize) -> scale::ScaleRuns<Self> {
        scale::ScaleRuns::new(self, factor)
    }
}

impl<I: Iterator<Item = Run>> RunIteratorsExt for I {}
