//! A list-backed set with a hash index for constant-time membership.

use std::{fmt, sync::Arc};

use ahash::AHashSet;

use super::list::ListSet;

/// A [`ListSet`] paired with a hash index over its members.
///
/// The list is the source of truth for order, count and positional access; the
/// hash index is derived from it once, at construction. Both are immutable, so
/// they cannot drift apart: every operation that produces a different list
/// (such as [`translate`](Self::translate)) rebuilds the index from scratch.
///
/// Behaves exactly like the underlying `ListSet`, with O(1) amortized
/// [`contains`](Self::contains).
#[derive(Clone)]
pub struct HashListSet {
    list: ListSet,
    lookup: Arc<AHashSet<i64>>,
}

impl HashListSet {
    pub fn new(indices: impl Into<Arc<[i64]>>) -> HashListSet {
        HashListSet::from_list(ListSet::new(indices))
    }

    /// Builds the hash index over an existing list, sharing its storage.
    pub fn from_list(list: ListSet) -> HashListSet {
        let lookup = list.as_slice().iter().copied().collect::<AHashSet<_>>();
        HashListSet {
            list,
            lookup: Arc::new(lookup),
        }
    }

    #[inline]
    pub fn as_list(&self) -> &ListSet {
        &self.list
    }

    #[inline]
    pub fn into_list(self) -> ListSet {
        self.list
    }

    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        self.list.as_slice()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.list.count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Number of distinct indices in the list.
    #[inline]
    pub fn distinct_count(&self) -> usize {
        self.lookup.len()
    }

    #[inline]
    pub fn min_index(&self) -> Option<i64> {
        self.list.min_index()
    }

    #[inline]
    pub fn max_index(&self) -> Option<i64> {
        self.list.max_index()
    }

    #[inline]
    pub fn contains(&self, index: i64) -> bool {
        self.lookup.contains(&index)
    }

    #[inline]
    pub(crate) fn at(&self, pos: usize) -> i64 {
        self.list.at(pos)
    }

    /// Panics if any translated index does not fit in `i64`.
    pub fn translate(&self, offset: i64) -> HashListSet {
        HashListSet::from_list(self.list.translate(offset))
    }
}

impl PartialEq for HashListSet {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl Eq for HashListSet {}

impl fmt::Debug for HashListSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashListSet")
            .field("indices", &self.list.as_slice())
            .field("distinct", &self.lookup.len())
            .finish()
    }
}

impl FromIterator<i64> for HashListSet {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> HashListSet {
        HashListSet::from_list(ListSet::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_matches_list() {
        let indices = vec![9, 4, 4, -1, 30, 12];
        let list = ListSet::new(indices.clone());
        let hashed = HashListSet::new(indices);
        for index in -5..40 {
            assert_eq!(hashed.contains(index), list.contains(index), "index {index}");
        }
        assert_eq!(hashed.count(), 6);
        assert_eq!(hashed.distinct_count(), 5);
    }

    #[test]
    fn test_translate_rebuilds_index() {
        let hashed = HashListSet::from_iter([1, 2, 3]);
        let moved = hashed.translate(100);
        assert!(moved.contains(101));
        assert!(!moved.contains(1));
        assert_eq!(moved.as_slice(), &[101, 102, 103]);
        // The original is untouched.
        assert!(hashed.contains(1));
    }
}
