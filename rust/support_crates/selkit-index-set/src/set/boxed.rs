//! A rectangular sub-grid of a row-major layout.

use selkit_common::{Result, error::Error, verify_arg};

use super::translate_index;

/// A `box_width × box_height` rectangle of indices inside a row-major layout
/// whose rows are `row_stride` indices apart.
///
/// Member `(x, y)` is `start + y * row_stride + x` for `0 <= x < box_width`
/// and `0 <= y < box_height`. Enumeration is row-major (x fastest).
///
/// # Invariants
///
/// - `row_stride > 0` and `box_width <= row_stride`, so that the offset of any
///   index from `start` decomposes uniquely into `(x, y)`.
/// - `count == box_width * box_height`.
/// - `max_index == start + (box_height - 1) * row_stride + box_width - 1`, and it
///   fits in `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxSet {
    start: i64,
    box_width: usize,
    box_height: usize,
    row_stride: usize,
}

impl BoxSet {
    /// Creates a box with its top-left member at `start`.
    ///
    /// Fails with an invalid-argument error when `row_stride` is 0, when
    /// `box_width` exceeds `row_stride`, or when the box does not fit in `i64`.
    pub fn new(
        start: i64,
        box_width: usize,
        box_height: usize,
        row_stride: usize,
    ) -> Result<BoxSet> {
        verify_arg!(row_stride, row_stride > 0);
        verify_arg!(box_width, box_width <= row_stride);
        box_width.checked_mul(box_height).ok_or_else(|| {
            Error::invalid_arg("box_height", "box_width * box_height overflows usize")
        })?;

        let set = BoxSet {
            start,
            box_width,
            box_height,
            row_stride,
        };
        if set.count() > 0 {
            set.last_offset()
                .and_then(|offset| start.checked_add(offset))
                .ok_or_else(|| {
                    Error::invalid_arg(
                        "box_height",
                        format!(
                            "box of {box_width}x{box_height} with stride {row_stride} \
                             starting at {start} overflows i64"
                        ),
                    )
                })?;
        }
        Ok(set)
    }

    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[inline]
    pub fn box_width(&self) -> usize {
        self.box_width
    }

    #[inline]
    pub fn box_height(&self) -> usize {
        self.box_height
    }

    #[inline]
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.box_width * self.box_height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
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
            self.start.checked_add(self.last_offset()?)
        }
    }

    /// Arithmetic membership test: decomposes `index - start` into
    /// `(x, y) = (Δ mod row_stride, Δ div row_stride)`.
    #[inline]
    pub fn contains(&self, index: i64) -> bool {
        if index < self.start {
            return false;
        }
        let delta = index.wrapping_sub(self.start) as u64;
        let stride = self.row_stride as u64;
        let (x, y) = (delta % stride, delta / stride);
        x < self.box_width as u64 && y < self.box_height as u64
    }

    /// Member at row-major position `pos`; the caller guarantees `pos < count`.
    #[inline]
    pub(crate) fn at(&self, pos: usize) -> i64 {
        debug_assert!(pos < self.count());
        let (x, y) = (pos % self.box_width, pos / self.box_width);
        self.start
            .wrapping_add((y as i64).wrapping_mul(self.row_stride as i64))
            .wrapping_add(x as i64)
    }

    /// Returns a box with the same dimensions and stride, moved by `offset`.
    ///
    /// Panics if any translated member does not fit in `i64`.
    pub fn translate(&self, offset: i64) -> BoxSet {
        let start = translate_index(self.start, offset);
        if let Some(max) = self.max_index() {
            translate_index(max, offset);
        }
        BoxSet { start, ..*self }
    }

    /// Offset of the last member from `start`, when it fits in `i64`.
    fn last_offset(&self) -> Option<i64> {
        let rows = (self.box_height.checked_sub(1)? as u64).checked_mul(self.row_stride as u64)?;
        let offset = rows.checked_add(self.box_width.checked_sub(1)? as u64)?;
        i64::try_from(offset).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let set = BoxSet::new(10, 3, 2, 8).unwrap();
        assert_eq!(set.count(), 6);
        assert_eq!(set.min_index(), Some(10));
        assert_eq!(set.max_index(), Some(10 + 8 + 2));
    }

    #[test]
    fn test_zero_dimensions() {
        let set = BoxSet::new(10, 0, 5, 8).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.min_index(), None);
        assert_eq!(set.max_index(), None);
        assert!(!set.contains(10));

        let set = BoxSet::new(10, 4, 0, 8).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(BoxSet::new(0, 1, 1, 0).unwrap_err().is_invalid_arg());
        assert!(BoxSet::new(0, 9, 1, 8).unwrap_err().is_invalid_arg());
        assert!(BoxSet::new(i64::MAX - 10, 2, 3, 8).unwrap_err().is_invalid_arg());
        assert!(BoxSet::new(i64::MAX - 10, 2, 2, 8).is_ok());
    }
}
