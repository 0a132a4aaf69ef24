//! A set that stores its indices as an explicit list.

use std::sync::Arc;

use super::translate_index;

/// A set that stores its indices as an explicit, immutable list.
///
/// `ListSet` is the representation of last resort: it can describe any
/// enumeration, including unsorted ones and ones with repeated indices.
/// Enumeration follows insertion order.
///
/// # Invariants
///
/// - `bounds` holds the true minimum and maximum of `indices`, or `None` when
///   the list is empty.
///
/// Membership is a linear scan; use [`HashListSet`] when membership is tested
/// frequently.
///
/// [`HashListSet`]: crate::HashListSet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListSet {
    indices: Arc<[i64]>,
    bounds: Option<(i64, i64)>,
}

impl ListSet {
    pub fn new(indices: impl Into<Arc<[i64]>>) -> ListSet {
        let indices = indices.into();
        let bounds = compute_bounds(&indices);
        ListSet { indices, bounds }
    }

    pub fn empty() -> ListSet {
        ListSet::new(Vec::<i64>::new())
    }

    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.indices
    }

    /// Returns the shared storage of the list.
    #[inline]
    pub fn indices(&self) -> &Arc<[i64]> {
        &self.indices
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn min_index(&self) -> Option<i64> {
        self.bounds.map(|(min, _)| min)
    }

    #[inline]
    pub fn max_index(&self) -> Option<i64> {
        self.bounds.map(|(_, max)| max)
    }

    /// O(count) scan, short-circuited by the bounds.
    pub fn contains(&self, index: i64) -> bool {
        match self.bounds {
            Some((min, max)) if (min..=max).contains(&index) => self.indices.contains(&index),
            _ => false,
        }
    }

    #[inline]
    pub(crate) fn at(&self, pos: usize) -> i64 {
        self.indices[pos]
    }

    /// Returns a list with every index moved by `offset`, in the same order.
    ///
    /// Panics if any translated index does not fit in `i64`.
    pub fn translate(&self, offset: i64) -> ListSet {
        let indices = self
            .indices
            .iter()
            .map(|&index| translate_index(index, offset))
            .collect::<Vec<_>>();
        ListSet {
            indices: indices.into(),
            bounds: self.bounds.map(|(min, max)| (min + offset, max + offset)),
        }
    }
}

impl FromIterator<i64> for ListSet {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> ListSet {
        ListSet::new(iter.into_iter().collect::<Vec<_>>())
    }
}

fn compute_bounds(indices: &[i64]) -> Option<(i64, i64)> {
    let (&first, rest) = indices.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(min, max), &index| (min.min(index), max.max(index))),
    )
}
