//! Contiguous runs of indices and the streaming algorithms around them.
//!
//! This crate provides utilities for working with sequences of [`Run`] values,
//! a `(start, count)` description of consecutive `i64` indices. It offers:
//!
//! - **Run-length reduction**: [`RangeCompressor`] turns any enumeration of indices
//!   into the shortest ordered list of runs that reproduces it.
//! - **Run transformations**: Iterator adapters for expanding, shifting and scaling
//!   runs (see [`RunIteratorsExt`]).
//!
//! # Key Types
//!
//! - [`Run`] - A contiguous run of indices
//! - [`RangeCompressor`] - Lazy run-length reduction over an index iterator
//! - [`RunIteratorsExt`] - Extension trait providing run transformation methods

pub mod compress;
pub mod run;
pub mod transform;

pub use compress::{IndexIteratorsExt, RangeCompressor, compress_runs};
pub use run::Run;
pub use transform::RunIteratorsExt;
