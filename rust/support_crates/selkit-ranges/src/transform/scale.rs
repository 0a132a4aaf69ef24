//! An iterator adapter that scales runs by an item width.

use crate::run::Run;

/// Multiplies each run's `start` and `count` by `factor`.
///
/// A run of logical items `(s, c)` becomes the byte span `(s × w, c × w)` when
/// every item occupies `w` bytes.
#[derive(Debug, Clone)]
pub struct ScaleRuns<I>
where
    I: Iterator<Item = Run>,
{
    inner: I,
    factor: usize,
}

impl<I> ScaleRuns<I>
where
    I: Iterator<Item = Run>,
{
    /// # Panics
    ///
    /// Panics if `factor` is 0 or does not fit in `i64`.
    pub fn new(inner: I, factor: usize) -> Self {
        if factor == 0 {
            panic!("factor must be greater than 0");
        }
        if i64::try_from(factor).is_err() {
            panic!("factor {factor} does not fit in i64");
        }
        ScaleRuns { inner, factor }
    }
}

impl<I> Iterator for ScaleRuns<I>
where
    I: Iterator<Item = Run>,
{
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        self.inner.next().map(|run| {
            let start = run
                .start
                .checked_mul(self.factor as i64)
                .unwrap_or_else(|| {
                    panic!(
                        "Arithmetic overflow: cannot scale run start {} by {}",
                        run.start, self.factor
                    )
                });
            let count = run.count.checked_mul(self.factor).unwrap_or_else(|| {
                panic!(
                    "Arithmetic overflow: cannot scale run count {} by {}",
                    run.count, self.factor
                )
            });
            Run::new(start, count)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> ExactSizeIterator for ScaleRuns<I>
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
    fn test_scale() {
        let runs = vec![Run::new(0, 4), Run::new(10, 1), Run::new(-3, 2)];
        let result: Vec<_> = runs.into_iter().scale_runs(2).collect();
        assert_eq!(
            result,
            vec![Run::new(0, 8), Run::new(20, 2), Run::new(-6, 4)]
        );
    }

    #[test]
    fn test_scale_then_shift() {
        let runs = vec![Run::new(0, 4)];
        let result: Vec<_> = runs.into_iter().scale_runs(2).shift_runs(100).collect();
        assert_eq!(result, vec![Run::new(100, 8)]);
    }

    #[test]
    #[should_panic(expected = "factor must be greater than 0")]
    fn test_zero_factor() {
        let _ = std::iter::empty::<Run>().scale_runs(0);
    }

    #[test]
    #[should_panic(expected = "Arithmetic overflow: cannot scale run start")]
    fn test_scale_overflow() {
        let runs = vec![Run::new(i64::MAX / 2 + 1, 1)];
        let _ = runs.into_iter().scale_runs(2).collect::<Vec<_>>();
    }
}
