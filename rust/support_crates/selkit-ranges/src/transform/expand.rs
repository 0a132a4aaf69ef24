//! An iterator adapter that expands runs into their member indices.

use crate::run::{Run, RunIter};

/// Yields every index of every run, in run order.
#[derive(Debug, Clone)]
pub struct ExpandRuns<I>
where
    I: Iterator<Item = Run>,
{
    inner: I,
    current: RunIter,
}

impl<I> ExpandRuns<I>
where
    I: Iterator<Item = Run>,
{
    pub fn new(inner: I) -> Self {
        ExpandRuns {
            inner,
            current: RunIter::default(),
        }
    }
}

impl<I> Iterator for ExpandRuns<I>
where
    I: Iterator<Item = Run>,
{
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            if let Some(index) = self.current.next() {
                return Some(index);
            }
            self.current = self.inner.next()?.iter();
        }
    }
}
