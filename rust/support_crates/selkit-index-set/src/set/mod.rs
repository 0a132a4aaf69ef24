//! Index sets describe a subset of the `i64` index domain.
//! - Every set is immutable; "mutation" (translation, normalization) returns a new set.
//! - Representations trade generality for speed: Empty, Singleton, Range (dense run),
//!   Box (2-D sub-grid of a row-major layout), List (explicit order), HashList
//!   (explicit order plus a hash index).
//! - Constructors validate their arguments and fully initialize derived state, so a
//!   constructed set is always consistent and freely shareable across threads.
//! - Enumeration order is variant-defined: ascending for Range, row-major for Box,
//!   insertion order for List and HashList.

use std::ops::RangeInclusive;

use selkit_common::{Result, error::Error};
use selkit_ranges::{RangeCompressor, Run};

use crate::set::{
    boxed::BoxSet, empty::EmptySet, hash_list::HashListSet, iter::Iter, list::ListSet,
    range::RangeSet, singleton::SingletonSet,
};

pub mod boxed;
pub mod empty;
pub mod hash_list;
pub mod iter;
pub mod list;
pub mod range;
#[cfg(feature = "serde")]
mod serde_repr;
pub mod singleton;

/// A subset of the `i64` index domain, stored in one of several representations.
///
/// Overview
/// - `count()` is the exact cardinality (a `List` may hold repeated indices, each
///   of which counts).
/// - `min_index()`/`max_index()` are the inclusive bounds, `None` when the set is
///   empty.
/// - `get(i)` returns the `i`-th member in enumeration order, or an out-of-range
///   error when `i >= count()`.
/// - `iter()` is a fresh, restartable traversal of exactly `count()` members.
///
/// Costs
/// - `contains` is O(1) for every variant except `List`, which scans.
/// - `translate` is O(1) for Empty/Singleton/Range/Box and O(count) for the
///   list-backed variants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "serde_repr::IndexSetRepr", try_from = "serde_repr::IndexSetRepr")
)]
pub enum IndexSet {
    Empty(EmptySet),
    Singleton(SingletonSet),
    Range(RangeSet),
    Box(BoxSet),
    List(ListSet),
    HashList(HashListSet),
}

/// Identifies the representation used by an `IndexSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexSetKind {
    Empty,
    Singleton,
    Range,
    Box,
    List,
    HashList,
}

impl IndexSet {
    pub fn empty() -> IndexSet {
        IndexSet::Empty(EmptySet)
    }

    pub fn singleton(index: i64) -> IndexSet {
        IndexSet::Singleton(SingletonSet::new(index))
    }

    /// A dense run of `count` indices starting at `start`.
    pub fn range(start: i64, count: usize) -> Result<IndexSet> {
        RangeSet::new(start, count).map(IndexSet::Range)
    }

    /// A `box_width × box_height` box of a row-major layout with `row_stride`.
    pub fn boxed(
        start: i64,
        box_width: usize,
        box_height: usize,
        row_stride: usize,
    ) -> Result<IndexSet> {
        BoxSet::new(start, box_width, box_height, row_stride).map(IndexSet::Box)
    }

    pub fn list(indices: impl Into<std::sync::Arc<[i64]>>) -> IndexSet {
        IndexSet::List(ListSet::new(indices))
    }

    pub fn hash_list(indices: impl Into<std::sync::Arc<[i64]>>) -> IndexSet {
        IndexSet::HashList(HashListSet::new(indices))
    }

    /// Builds the tightest representation of the concatenation of `runs`:
    /// empty, a singleton, a single range, or a list.
    ///
    /// Fails with an invalid-argument error if a run does not fit in `i64`.
    pub fn from_runs(runs: impl IntoIterator<Item = Run>) -> Result<IndexSet> {
        let mut runs = runs.into_iter().filter(|run| !run.is_empty()).peekable();
        let Some(first) = runs.next() else {
            return Ok(IndexSet::empty());
        };
        if runs.peek().is_none() {
            return Ok(IndexSet::Range(RangeSet::from_run(first)?).normalized());
        }
        let mut indices = Vec::new();
        for run in std::iter::once(first).chain(runs) {
            let range = RangeSet::from_run(run)?;
            indices.extend((0..range.count()).map(|pos| range.at(pos)));
        }
        Ok(IndexSet::list(indices))
    }

    pub fn kind(&self) -> IndexSetKind {
        match self {
            IndexSet::Empty(_) => IndexSetKind::Empty,
            IndexSet::Singleton(_) => IndexSetKind::Singleton,
            IndexSet::Range(_) => IndexSetKind::Range,
            IndexSet::Box(_) => IndexSetKind::Box,
            IndexSet::List(_) => IndexSetKind::List,
            IndexSet::HashList(_) => IndexSetKind::HashList,
        }
    }

    /// Exact number of members (repeated list entries included).
    pub fn count(&self) -> usize {
        match self {
            IndexSet::Empty(set) => set.count(),
            IndexSet::Singleton(set) => set.count(),
            IndexSet::Range(set) => set.count(),
            IndexSet::Box(set) => set.count(),
            IndexSet::List(set) => set.count(),
            IndexSet::HashList(set) => set.count(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn min_index(&self) -> Option<i64> {
        match self {
            IndexSet::Empty(_) => None,
            IndexSet::Singleton(set) => Some(set.index()),
            IndexSet::Range(set) => set.min_index(),
            IndexSet::Box(set) => set.min_index(),
            IndexSet::List(set) => set.min_index(),
            IndexSet::HashList(set) => set.min_index(),
        }
    }

    pub fn max_index(&self) -> Option<i64> {
        match self {
            IndexSet::Empty(_) => None,
            IndexSet::Singleton(set) => Some(set.index()),
            IndexSet::Range(set) => set.max_index(),
            IndexSet::Box(set) => set.max_index(),
            IndexSet::List(set) => set.max_index(),
            IndexSet::HashList(set) => set.max_index(),
        }
    }

    /// Inclusive bounds, `None` for an empty set.
    pub fn bounds(&self) -> Option<RangeInclusive<i64>> {
        Some(self.min_index()?..=self.max_index()?)
    }

    pub fn contains(&self, index: i64) -> bool {
        match self {
            IndexSet::Empty(set) => set.contains(index),
            IndexSet::Singleton(set) => set.contains(index),
            IndexSet::Range(set) => set.contains(index),
            IndexSet::Box(set) => set.contains(index),
            IndexSet::List(set) => set.contains(index),
            IndexSet::HashList(set) => set.contains(index),
        }
    }

    /// Returns the member at position `pos` of the enumeration order.
    ///
    /// Fails with an out-of-range error when `pos >= count()`; for an empty set
    /// this is every position.
    pub fn get(&self, pos: usize) -> Result<i64> {
        let count = self.count();
        if pos < count {
            Ok(self.at(pos))
        } else {
            Err(Error::out_of_range(pos, count))
        }
    }

    /// Member at `pos`; the caller guarantees `pos < count()`.
    #[inline]
    pub(crate) fn at(&self, pos: usize) -> i64 {
        match self {
            IndexSet::Empty(_) => unreachable!("empty set has no members"),
            IndexSet::Singleton(set) => set.index(),
            IndexSet::Range(set) => set.at(pos),
            IndexSet::Box(set) => set.at(pos),
            IndexSet::List(set) => set.at(pos),
            IndexSet::HashList(set) => set.at(pos),
        }
    }

    /// Returns a set of the same representation with every member moved by
    /// `offset`. The receiver is not modified.
    ///
    /// Panics if a translated member does not fit in `i64`.
    pub fn translate(&self, offset: i64) -> IndexSet {
        match self {
            IndexSet::Empty(set) => IndexSet::Empty(set.translate(offset)),
            IndexSet::Singleton(set) => IndexSet::Singleton(set.translate(offset)),
            IndexSet::Range(set) => IndexSet::Range(set.translate(offset)),
            IndexSet::Box(set) => IndexSet::Box(set.translate(offset)),
            IndexSet::List(set) => IndexSet::List(set.translate(offset)),
            IndexSet::HashList(set) => IndexSet::HashList(set.translate(offset)),
        }
    }

    /// Ordered traversal of the members.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Lazy run-length reduction of the enumeration.
    pub fn runs(&self) -> RangeCompressor<Iter<'_>> {
        RangeCompressor::new(self.iter())
    }

    /// The shortest ordered list of contiguous runs whose concatenation
    /// reproduces the enumeration.
    pub fn to_runs(&self) -> Vec<Run> {
        match self {
            IndexSet::Empty(_) => Vec::new(),
            IndexSet::Range(set) if !set.is_empty() => vec![set.to_run()],
            _ => self.runs().collect(),
        }
    }

    /// True when both sets enumerate the same indices in the same order,
    /// regardless of representation.
    pub fn same_sequence(&self, other: &IndexSet) -> bool {
        self.count() == other.count() && self.iter().eq(other.iter())
    }

    /// Collapses trivial sets: zero members become `Empty`, one member becomes
    /// `Singleton`. Other sets are returned unchanged.
    pub fn normalized(self) -> IndexSet {
        match self.count() {
            0 => IndexSet::empty(),
            1 if self.kind() != IndexSetKind::Singleton => IndexSet::singleton(self.at(0)),
            _ => self,
        }
    }

    /// Replaces a `List` with a `HashList` over the same storage. Other
    /// representations already test membership in O(1) and are returned as is.
    pub fn with_hash_index(self) -> IndexSet {
        match self {
            IndexSet::List(list) => IndexSet::HashList(HashListSet::from_list(list)),
            other => other,
        }
    }
}

impl Default for IndexSet {
    fn default() -> Self {
        IndexSet::empty()
    }
}

impl<'a> IntoIterator for &'a IndexSet {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl From<EmptySet> for IndexSet {
    fn from(set: EmptySet) -> Self {
        IndexSet::Empty(set)
    }
}

impl From<SingletonSet> for IndexSet {
    fn from(set: SingletonSet) -> Self {
        IndexSet::Singleton(set)
    }
}

impl From<RangeSet> for IndexSet {
    fn from(set: RangeSet) -> Self {
        IndexSet::Range(set)
    }
}

impl From<BoxSet> for IndexSet {
    fn from(set: BoxSet) -> Self {
        IndexSet::Box(set)
    }
}

impl From<ListSet> for IndexSet {
    fn from(set: ListSet) -> Self {
        IndexSet::List(set)
    }
}

impl From<HashListSet> for IndexSet {
    fn from(set: HashListSet) -> Self {
        IndexSet::HashList(set)
    }
}

/// Moves a single index by `offset`.
///
/// Panics if the result does not fit in `i64`.
#[inline]
pub(crate) fn translate_index(index: i64, offset: i64) -> i64 {
    index.checked_add(offset).unwrap_or_else(|| {
        panic!("Arithmetic overflow: cannot translate index {index} by {offset}")
    })
}
