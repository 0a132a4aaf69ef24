//! Mutable accumulator that composes index sets.

use std::borrow::Cow;

use ahash::AHashMap;
use selkit_common::{Result, error::Error};

use crate::set::{IndexSet, IndexSetKind, list::ListSet};

/// Composes [`IndexSet`]s through union ([`add`](Self::add)), difference
/// ([`remove`](Self::remove)) and multiset concatenation
/// ([`concat`](Self::concat)), then materializes the result with
/// [`build`](Self::build).
///
/// The working collection is maintained eagerly: an ordered list of indices in
/// composition order plus a hash map of multiplicities. `add` appends only the
/// indices that are not present yet, so as long as `concat` is not used the
/// collection is a true set.
///
/// A builder is not meant to be shared between threads; all mutating methods
/// take `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct SelectionBuilder {
    indices: Vec<i64>,
    multiplicity: AHashMap<i64, usize>,
}

impl SelectionBuilder {
    pub fn new() -> SelectionBuilder {
        SelectionBuilder::default()
    }

    /// Number of indices in the working collection (repeats included).
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn contains(&self, index: i64) -> bool {
        self.multiplicity.contains_key(&index)
    }

    /// Unions the members of `set` into the working collection, keeping the
    /// first occurrence of every index.
    pub fn add(&mut self, set: &IndexSet) -> &mut Self {
        self.indices.reserve(set.count());
        for index in set {
            let count = self.multiplicity.entry(index).or_insert(0);
            if *count == 0 {
                *count = 1;
                self.indices.push(index);
            }
        }
        log::trace!("add {:?} set of {}: {} indices", set.kind(), set.count(), self.len());
        self
    }

    /// Appends every member of `set`, including indices that are already
    /// present and repeats within `set`.
    pub fn concat(&mut self, set: &IndexSet) -> &mut Self {
        self.indices.reserve(set.count());
        for index in set {
            *self.multiplicity.entry(index).or_insert(0) += 1;
            self.indices.push(index);
        }
        log::trace!("concat {:?} set of {}: {} indices", set.kind(), set.count(), self.len());
        self
    }

    /// Removes every occurrence of the members of `set` from the working
    /// collection.
    pub fn remove(&mut self, set: &IndexSet) -> &mut Self {
        if set.is_empty() || self.is_empty() {
            return self;
        }
        // Linear membership on a plain list would make this quadratic.
        let set = if set.kind() == IndexSetKind::List {
            Cow::Owned(set.clone().with_hash_index())
        } else {
            Cow::Borrowed(set)
        };
        self.indices.retain(|&index| !set.contains(index));
        self.multiplicity.retain(|&index, _| !set.contains(index));
        log::trace!("remove {:?} set of {}: {} indices", set.kind(), set.count(), self.len());
        self
    }

    pub fn add_index(&mut self, index: i64) -> &mut Self {
        self.add(&IndexSet::singleton(index))
    }

    /// Adds `count` consecutive indices starting at `start`.
    ///
    /// On an invalid range the working collection is left unchanged.
    pub fn add_range(&mut self, start: i64, count: usize) -> Result<&mut Self> {
        let set = IndexSet::range(start, count)?;
        Ok(self.add(&set))
    }

    /// Adds a `box_width × box_height` box of a row-major layout.
    ///
    /// On invalid box arguments the working collection is left unchanged.
    pub fn add_box(
        &mut self,
        start: i64,
        box_width: usize,
        box_height: usize,
        row_stride: usize,
    ) -> Result<&mut Self> {
        let set = IndexSet::boxed(start, box_width, box_height, row_stride)?;
        Ok(self.add(&set))
    }

    pub fn remove_index(&mut self, index: i64) -> &mut Self {
        self.remove(&IndexSet::singleton(index))
    }

    pub fn remove_range(&mut self, start: i64, count: usize) -> Result<&mut Self> {
        let set = IndexSet::range(start, count)?;
        Ok(self.remove(&set))
    }

    /// Resets the working collection. Previously built sets are unaffected.
    pub fn clear(&mut self) {
        self.indices.clear();
        self.multiplicity.clear();
    }

    /// Fails with a consistency error if any index occurs more than once.
    pub fn assert_unique(&self) -> Result<()> {
        if self.multiplicity.len() == self.indices.len() {
            return Ok(());
        }
        let duplicate = self.indices.iter().find_map(|index| {
            let count = self.multiplicity.get(index).copied().unwrap_or(0);
            (count > 1).then_some((*index, count))
        });
        match duplicate {
            Some((index, count)) => Err(Error::consistency(format!(
                "index {index} occurs {count} times in the selection"
            ))),
            None => Ok(()),
        }
    }

    /// Materializes the working collection into a [`ListSet`] in composition
    /// order. When `clear_after` is set the builder is reset afterwards.
    pub fn build(&mut self, clear_after: bool) -> IndexSet {
        IndexSet::List(self.build_list(clear_after))
    }

    /// Like [`build`](Self::build), but produces a hash-indexed list.
    pub fn build_hashed(&mut self, clear_after: bool) -> IndexSet {
        IndexSet::List(self.build_list(clear_after)).with_hash_index()
    }

    fn build_list(&mut self, clear_after: bool) -> ListSet {
        log::debug!(
            "materializing selection of {} indices ({} distinct)",
            self.indices.len(),
            self.multiplicity.len()
        );
        if clear_after {
            let indices = std::mem::take(&mut self.indices);
            self.multiplicity.clear();
            ListSet::new(indices)
        } else {
            ListSet::new(self.indices.as_slice())
        }
    }
}
