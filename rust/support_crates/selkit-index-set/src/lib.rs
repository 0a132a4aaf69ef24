//! Immutable index sets over the `i64` index domain and the builder that
//! composes them.
//!
//! An [`IndexSet`] is one of a closed family of representations (empty,
//! singleton, dense range, 2-D box, explicit list, hash-indexed list), each
//! chosen for a different access pattern. All of them share the same contract:
//! bounds, exact count, membership, positional access, translation and ordered
//! enumeration. [`SelectionBuilder`] accumulates unions, differences and
//! concatenations of sets and materializes the result into a list-backed set.

pub mod selection_builder;
pub mod set;
#[cfg(test)]
mod tests;

pub use selection_builder::SelectionBuilder;
pub use set::{
    IndexSet, IndexSetKind, boxed::BoxSet, empty::EmptySet, hash_list::HashListSet,
    iter::Iter, list::ListSet, range::RangeSet, singleton::SingletonSet,
};
