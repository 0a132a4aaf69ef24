//! An iterator adapter that shifts all runs by a fixed signed offset.

use crate::run::Run;

/// An iterator adapter that shifts all runs by a fixed signed offset.
///
/// Each run's `start` is moved by `offset`; counts are unchanged. Panics if the
/// shifted run does not fit in the `i64` domain.
#[derive(Debug, Clone)]
pub struct ShiftRuns<I>
where
    I: Iterator<Item = Run>,
{
    /// The underlying iterator of runs.
    inner: I,
    /// The signed amount added to each run start.
    offset: i64,
}

impl<I> ShiftRuns<I>
where
    I: Iterator<Item = Run>,
{
    pub fn new(inner: I, offset: i64) -> Self {
        ShiftRuns { inner, offset }
    }
}

impl<I> Iterator for ShiftRuns<I>
where
    I: Iterator<Item = Run>,
{
    type Item = Run;

    /// Returns the next shifted run from the iterator.
    ///
    /// Panics if adding `offset` would overflow either bound.
    fn next(&mut self) -> Option<Run> {
        self.inner.next().map(|run| {
            let start = run.start.checked_add(self.offset).unwrap_or_else(|| {
                panic!(
                    "Arithmetic overflow: cannot shift run start {} by {}",
                    run.start, self.offset
                )
            });
            let shifted = Run::new(start, run.count);
            // Validates the last index as well.
            let _ = shifted.last();
            shifted
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> ExactSizeIterator for ShiftRuns<I>
where
    I: ExactSizeIterator<Item = Run>,
{
    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::{run::Run, transform::RunIteratorsExt};

    #[test]
    fn test_shift_up() {
        let runs = vec![Run::new(10, 10), Run::new(40, 20)];
        let result: Vec<_> = runs.into_iter().shift_runs(5).collect();
        assert_eq!(result, vec![Run::new(15, 10), Run::new(45, 20)]);
    }

    #[test]
    fn test_shift_down_below_zero() {
        let runs = vec![Run::new(3, 2)];
        let result: Vec<_> = runs.into_iter().shift_runs(-10).collect();
        assert_eq!(result, vec![Run::new(-7, 2)]);
    }

    #[test]
    fn test_shift_to_domain_edge() {
        let runs = vec![Run::new(i64::MAX - 3, 2)];
        let result: Vec<_> = runs.into_iter().shift_runs(2).collect();
        assert_eq!(result, vec![Run::new(i64::MAX - 1, 2)]);
    }

    #[test]
    fn test_shift_len() {
        let runs = vec![Run::new(1, 1), Run::new(5, 2)];
        assert_eq!(runs.into_iter().shift_runs(1).len(), 2);
    }

    #[test]
    #[should_panic(expected = "Arithmetic overflow: cannot shift run start")]
    fn test_shift_overflow_start() {
        let runs = vec![Run::new(i64::MAX - 5, 1)];
        let _ = runs.into_iter().shift_runs(10).collect::<Vec<_>>();
    }

    #[test]
    #[should_panic(expected = "Arithmetic overflow: run of 8 indices")]
    fn test_shift_overflow_end() {
        let runs = vec![Run::new(i64::MAX - 10, 8)];
        let _ = runs.into_iter().shift_runs(5).collect::<Vec<_>>();
    }
}
