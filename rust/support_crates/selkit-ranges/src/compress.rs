//! Run-length reduction of an index enumeration.
//!
//! [`RangeCompressor`] scans indices left to right and closes the current run
//! whenever the next index is not exactly `previous + 1`. Concatenating the
//! produced runs reproduces the input exactly, including its order and any
//! repeated values; the runs are the shortest such list.

use std::iter::FusedIterator;

use crate::run::Run;

/// An iterator adapter that turns an iterator of indices into contiguous runs.
///
/// - Empty input yields no runs (never a zero-length run).
/// - A single index yields exactly one run of count 1.
/// - O(n) time, O(1) additional memory.
#[derive(Debug, Clone)]
pub struct RangeCompressor<I>
where
    I: Iterator<Item = i64>,
{
    /// The underlying iterator of indices.
    inner: I,
    /// The run currently being extended, if any.
    current: Option<Run>,
}

impl<I> RangeCompressor<I>
where
    I: Iterator<Item = i64>,
{
    pub fn new(inner: I) -> Self {
        RangeCompressor {
            inner,
            current: None,
        }
    }
}

impl<I> Iterator for RangeCompressor<I>
where
    I: Iterator<Item = i64>,
{
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let mut run = match self.current.take() {
            Some(run) => run,
            None => Run::single(self.inner.next()?),
        };
        for index in self.inner.by_ref() {
            if extends(&run, index) {
                run.count += 1;
            } else {
                self.current = Some(Run::single(index));
                return Some(run);
            }
        }
        Some(run)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.current.is_some());
        let (lower, upper) = self.inner.size_hint();
        (
            usize::from(pending > 0 || lower > 0),
            upper.and_then(|n| n.checked_add(pending)),
        )
    }
}

impl<I> FusedIterator for RangeCompressor<I> where I: FusedIterator<Item = i64> {}

#[inline]
fn extends(run: &Run, index: i64) -> bool {
    i64::try_from(run.count)
        .ok()
        .and_then(|count| run.start.checked_add(count))
        == Some(index)
}

/// Compresses an enumeration of indices into its contiguous runs.
pub fn compress_runs<I>(indices: I) -> RangeCompressor<I::IntoIter>
where
    I: IntoIterator<Item = i64>,
{
    RangeCompressor::new(indices.into_iter())
}

/// Extension trait exposing [`RangeCompressor`] on any iterator of indices.
pub trait IndexIteratorsExt: Iterator<Item = i64> + Sized {
    fn compress_runs(self) -> RangeCompressor<Self> {
        RangeCompressor::new(self)
    }
}

impl<I: Iterator<Item = i64>> IndexIteratorsExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::RunIteratorsExt;

    fn runs(indices: &[i64]) -> Vec<(i64, usize)> {
        compress_runs(indices.iter().copied())
            .map(|r| (r.start, r.count))
            .collect()
    }

    #[test]
    fn test_basic_compression() {
        assert_eq!(
            runs(&[5, 6, 7, 10, 11, 20]),
            vec![(5, 3), (10, 2), (20, 1)]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(runs(&[]).is_empty());
    }

    #[test]
    fn test_single_element() {
        assert_eq!(runs(&[42]), vec![(42, 1)]);
    }

    #[test]
    fn test_unordered_and_repeated() {
        assert_eq!(
            runs(&[3, 2, 2, 3, 4, 0]),
            vec![(3, 1), (2, 1), (2, 3), (0, 1)]
        );
    }

    #[test]
    fn test_negative_indices() {
        assert_eq!(runs(&[-3, -2, -1, 0, 1, 5]), vec![(-3, 5), (5, 1)]);
    }

    #[test]
    fn test_domain_edge() {
        assert_eq!(
            runs(&[i64::MAX - 1, i64::MAX, i64::MIN]),
            vec![(i64::MAX - 1, 2), (i64::MIN, 1)]
        );
    }

    #[test]
    fn test_round_trip_random() {
        fastrand::seed(8327104);
        for _ in 0..200 {
            let len = fastrand::usize(0..64);
            let mut indices = Vec::with_capacity(len);
            let mut next = fastrand::i64(-100..100);
            for _ in 0..len {
                indices.push(next);
                next = match fastrand::u8(0..4) {
                    0 => next - fastrand::i64(0..5),
                    _ => next + fastrand::i64(1..3),
                };
            }
            let compressed = indices.iter().copied().compress_runs().collect::<Vec<_>>();
            assert!(compressed.iter().all(|r| !r.is_empty()));
            for pair in compressed.windows(2) {
                assert_ne!(pair[0].end(), pair[1].start, "runs must be maximal");
            }
            let expanded = compressed.into_iter().expand_runs().collect::<Vec<_>>();
            assert_eq!(expanded, indices);
        }
    }
}
