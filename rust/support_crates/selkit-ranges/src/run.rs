//! A contiguous run of indices.

use std::{iter::FusedIterator, ops::Range};

/// A maximal (or at least contiguous) sequence of consecutive indices,
/// described as `(start, count)`.
///
/// A run with `count == 0` is empty. Runs produced by [`RangeCompressor`]
/// are never empty.
///
/// [`RangeCompressor`]: crate::RangeCompressor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    pub start: i64,
    pub count: usize,
}

impl Run {
    #[inline]
    pub const fn new(start: i64, count: usize) -> Run {
        Run { start, count }
    }

    #[inline]
    pub const fn single(index: i64) -> Run {
        Run::new(index, 1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Exclusive end of the run.
    ///
    /// Panics if the end is not representable as `i64`.
    #[inline]
    pub fn end(&self) -> i64 {
        i64::try_from(self.count)
            .ok()
            .and_then(|count| self.start.checked_add(count))
            .unwrap_or_else(|| {
                panic!(
                    "Arithmetic overflow: run end of {} + {}",
                    self.start, self.count
                )
            })
    }

    /// Last index of a non-empty run.
    ///
    /// Unlike [`end`](Self::end), this is representable for a run ending at
    /// `i64::MAX`. Panics if the last index itself overflows.
    #[inline]
    pub fn last(&self) -> Option<i64> {
        if self.is_empty() {
            return None;
        }
        let last = i64::try_from(self.count - 1)
            .ok()
            .and_then(|span| self.start.checked_add(span))
            .unwrap_or_else(|| {
                panic!(
                    "Arithmetic overflow: run of {} indices starting at {}",
                    self.count, self.start
                )
            });
        Some(last)
    }

    #[inline]
    pub fn contains(&self, index: i64) -> bool {
        index >= self.start && (index.wrapping_sub(self.start) as u64) < self.count as u64
    }

    /// Half-open form of the run.
    ///
    /// Panics if the exclusive end is not representable; use
    /// [`iter`](Self::iter) to enumerate runs at the edge of the domain.
    #[inline]
    pub fn to_range(&self) -> Range<i64> {
        self.start..self.end()
    }

    /// Members of the run in ascending order. Never computes the exclusive end.
    #[inline]
    pub fn iter(&self) -> RunIter {
        RunIter {
            next: self.start,
            remaining: self.count,
        }
    }
}

impl From<Range<i64>> for Run {
    fn from(range: Range<i64>) -> Run {
        if range.is_empty() {
            Run::new(range.start, 0)
        } else {
            Run::new(range.start, range.end.wrapping_sub(range.start) as u64 as usize)
        }
    }
}

impl IntoIterator for Run {
    type Item = i64;
    type IntoIter = RunIter;

    fn into_iter(self) -> RunIter {
        self.iter()
    }
}

/// Iterator over the members of a [`Run`].
#[derive(Debug, Clone, Default)]
pub struct RunIter {
    next: i64,
    remaining: usize,
}

impl Iterator for RunIter {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next += 1;
        }
        Some(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RunIter {}

impl FusedIterator for RunIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_basics() {
        let run = Run::new(5, 3);
        assert_eq!(run.end(), 8);
        assert_eq!(run.last(), Some(7));
        assert_eq!(run.iter().collect::<Vec<_>>(), vec![5, 6, 7]);
        assert!(run.contains(5));
        assert!(run.contains(7));
        assert!(!run.contains(8));
        assert!(!run.contains(4));
    }

    #[test]
    fn test_empty_run() {
        let run = Run::new(-3, 0);
        assert!(run.is_empty());
        assert_eq!(run.last(), None);
        assert!(!run.contains(-3));
        assert_eq!(run.into_iter().count(), 0);
    }

    #[test]
    fn test_from_range() {
        assert_eq!(Run::from(-2..3), Run::new(-2, 5));
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 10..4;
        assert_eq!(Run::from(reversed), Run::new(10, 0));
    }

    #[test]
    fn test_run_at_domain_edge() {
        let run = Run::new(i64::MAX - 1, 2);
        assert_eq!(run.last(), Some(i64::MAX));
        assert!(run.contains(i64::MAX));
        assert_eq!(run.iter().collect::<Vec<_>>(), vec![i64::MAX - 1, i64::MAX]);
        assert_eq!(Run::single(i64::MAX).into_iter().collect::<Vec<_>>(), vec![i64::MAX]);
        assert_eq!(Run::single(i64::MIN).iter().len(), 1);
    }

    #[test]
    #[should_panic(expected = "Arithmetic overflow: run of 3 indices")]
    fn test_last_overflow() {
        let _ = Run::new(i64::MAX - 1, 3).last();
    }

    #[test]
    #[should_panic(expected = "Arithmetic overflow")]
    fn test_end_overflow() {
        let _ = Run::new(i64::MAX, 2).end();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Run::new(10, 2)).unwrap();
        assert_eq!(json, r#"{"start":10,"count":2}"#);
        let run: Run = serde_json::from_str(&json).unwrap();
        assert_eq!(run, Run::new(10, 2));
    }
}
