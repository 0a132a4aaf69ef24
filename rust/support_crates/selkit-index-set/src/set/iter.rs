//! Ordered traversal of an [`IndexSet`].

use std::iter::FusedIterator;

use crate::set::IndexSet;

/// Iterator over the members of an [`IndexSet`] in its enumeration order.
///
/// Positional: the `i`-th item is computed directly (arithmetic for Range and
/// Box, a slice lookup for the list-backed sets), so the iterator is
/// double-ended and exact-size for every representation.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    set: &'a IndexSet,
    front: usize,
    back: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(set: &'a IndexSet) -> Iter<'a> {
        Iter {
            set,
            front: 0,
            back: set.count(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        if self.front < self.back {
            let index = self.set.at(self.front);
            self.front += 1;
            Some(index)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<i64> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<i64> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.set.at(self.back))
        } else {
            None
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
