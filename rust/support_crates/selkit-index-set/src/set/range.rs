//! A dense, contiguous run of indices.

use selkit_common::{Result, error::Error};
use selkit_ranges::Run;

use super::translate_index;

/// A contiguous run `start, start + 1, ..., start + count - 1`, enumerated in
/// ascending order.
///
/// # Invariants
///
/// - `count == max_index - min_index + 1` whenever `count > 0`.
/// - The last member `start + count - 1` is representable as `i64`.
///
/// Membership, positional access and translation are all O(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeSet {
    start: i64,
    count: usize,
}

impl RangeSet {
    /// Creates a range of `count` indices starting at `start`.
    ///
    /// Fails with an invalid-argument error if the last member overflows `i64`.
    pub fn new(start: i64, count: usize) -> Result<RangeSet> {
        if count > 0 {
            last_index(start, count).ok_or_else(|| {
                Error::invalid_arg(
                    "count",
                    format!("range of {count} indices starting at {start} overflows i64"),
                )
            })?;
        }
        Ok(RangeSet { start, count })
    }

    pub fn from_run(run: Run) -> Result<RangeSet> {
        RangeSet::new(run.start, run.count)
    }

    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn min_index(&self) -> Option<i64> {
        (!self.is_empty()).then_some(self.start)
    }

    #[inline]
    pub fn max_index(&self) -> Option<i64> {
        if self.is_empty() {
            None
        } else {
            last_index(self.start, self.count)
        }
    }

    #[inline]
    pub fn contains(&self, index: i64) -> bool {
        index >= self.start && (index.wrapping_sub(self.start) as u64) < self.count as u64
    }

    /// Member at `pos`; the caller guarantees `pos < count`.
    #[inline]
    pub(crate) fn at(&self, pos: usize) -> i64 {
        debug_assert!(pos < self.count);
        self.start.wrapping_add(pos as i64)
    }

    /// Panics if any translated member does not fit in `i64`.
    pub fn translate(&self, offset: i64) -> RangeSet {
        let start = translate_index(self.start, offset);
        if let Some(max) = self.max_index() {
            translate_index(max, offset);
        }
        RangeSet {
            start,
            count: self.count,
        }
    }

    #[inline]
    pub fn to_run(&self) -> Run {
        Run::new(self.start, self.count)
    }
}

#[inline]
fn last_index(start: i64, count: usize) -> Option<i64> {
    let span = i64::try_from(count - 1).ok()?;
    start.checked_add(span)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let range = RangeSet::new(-2, 5).unwrap();
        assert_eq!(range.min_index(), Some(-2));
        assert_eq!(range.max_index(), Some(2));
        assert_eq!(range.to_run(), Run::new(-2, 5));
    }

    #[test]
    fn test_overflow_rejected() {
        let err = RangeSet::new(i64::MAX - 1, 3).unwrap_err();
        assert!(err.is_invalid_arg());
        assert!(RangeSet::new(i64::MAX - 1, 2).is_ok());
    }
}
