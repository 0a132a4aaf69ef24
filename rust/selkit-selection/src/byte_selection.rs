//! Projection of logical item selections onto byte offsets.

use selkit_common::{Result, error::Error, verify_arg};
use selkit_index_set::{BoxSet, IndexSet, ListSet, RangeSet};
use selkit_ranges::{Run, RunIteratorsExt};

use crate::codec::ItemCodec;

/// Maps logical item index `i` to byte offset `base_offset + i * item_byte_width`.
///
/// The mapping is injective for any positive width, so a projected set has
/// exactly the source's count and enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSelectionAdapter {
    base_offset: i64,
    item_byte_width: usize,
}

impl ByteSelectionAdapter {
    /// Fails with an invalid-argument error if `item_byte_width` is 0 or does
    /// not fit in `i64`.
    pub fn new(base_offset: i64, item_byte_width: usize) -> Result<ByteSelectionAdapter> {
        verify_arg!(item_byte_width, item_byte_width > 0);
        verify_arg!(item_byte_width, i64::try_from(item_byte_width).is_ok());
        Ok(ByteSelectionAdapter {
            base_offset,
            item_byte_width,
        })
    }

    pub fn for_codec<C: ItemCodec>(codec: &C, base_offset: i64) -> Result<ByteSelectionAdapter> {
        ByteSelectionAdapter::new(base_offset, codec.item_byte_width())
    }

    #[inline]
    pub fn base_offset(&self) -> i64 {
        self.base_offset
    }

    #[inline]
    pub fn item_byte_width(&self) -> usize {
        self.item_byte_width
    }

    /// Byte offset of the first byte of logical item `index`.
    pub fn byte_offset(&self, index: i64) -> Result<i64> {
        index
            .checked_mul(self.item_byte_width as i64)
            .and_then(|offset| offset.checked_add(self.base_offset))
            .ok_or_else(|| {
                Error::invalid_arg(
                    "base_offset",
                    format!(
                        "byte offset of item {index} (base {}, width {}) overflows i64",
                        self.base_offset, self.item_byte_width
                    ),
                )
            })
    }

    /// Projects `source` onto the byte offsets of its items.
    ///
    /// Dense representations survive only when items are one byte wide; wider
    /// items spread a contiguous run over a stride, which degrades to a list.
    /// Order, count and multiplicity follow `source` exactly.
    pub fn project(&self, source: &IndexSet) -> Result<IndexSet> {
        self.verify_bounds(source)?;
        let projected = match source {
            IndexSet::Empty(_) => IndexSet::empty(),
            IndexSet::Singleton(set) => IndexSet::singleton(self.byte_offset(set.index())?),
            // An empty dense set has no members to project; anchor it at the base.
            IndexSet::Range(set) if set.is_empty() => {
                IndexSet::Range(RangeSet::new(self.base_offset, 0)?)
            }
            IndexSet::Box(set) if set.is_empty() => IndexSet::Box(BoxSet::new(
                self.base_offset,
                set.box_width(),
                set.box_height(),
                set.row_stride(),
            )?),
            IndexSet::Range(set) if self.item_byte_width == 1 => IndexSet::Range(
                RangeSet::new(self.byte_offset(set.start())?, set.count())?,
            ),
            IndexSet::Box(set) if self.item_byte_width == 1 => IndexSet::Box(BoxSet::new(
                self.byte_offset(set.start())?,
                set.box_width(),
                set.box_height(),
                set.row_stride(),
            )?),
            IndexSet::HashList(_) => IndexSet::List(self.project_list(source)?).with_hash_index(),
            _ => IndexSet::List(self.project_list(source)?),
        };
        if projected.kind() != source.kind() {
            log::debug!(
                "byte projection of {:?} set of {} items degraded to {:?}",
                source.kind(),
                source.count(),
                projected.kind()
            );
        }
        Ok(projected)
    }

    /// Whole-item byte spans covering `source`, in enumeration order: every
    /// logical run `(s, c)` becomes `(base_offset + s * w, c * w)`.
    pub fn byte_runs(&self, source: &IndexSet) -> Result<Vec<Run>> {
        self.verify_bounds(source)?;
        if let Some(max) = source.max_index() {
            // The exclusive end of the last item must be representable too.
            self.byte_offset(max)?
                .checked_add(self.item_byte_width as i64)
                .ok_or_else(|| Error::invalid_arg("base_offset", "byte span overflows i64"))?;
            source
                .count()
                .checked_mul(self.item_byte_width)
                .ok_or_else(|| Error::invalid_arg("item_byte_width", "byte count overflows"))?;
        }
        Ok(source
            .runs()
            .scale_runs(self.item_byte_width)
            .shift_runs(self.base_offset)
            .collect())
    }

    fn project_list(&self, source: &IndexSet) -> Result<ListSet> {
        source
            .iter()
            .map(|index| self.byte_offset(index))
            .collect::<Result<Vec<_>>>()
            .map(ListSet::new)
    }

    /// Both ends of the selection must project into the `i64` domain, which
    /// bounds every member in between.
    fn verify_bounds(&self, source: &IndexSet) -> Result<()> {
        if let Some(bounds) = source.bounds() {
            self.byte_offset(*bounds.start())?;
            self.byte_offset(*bounds.end())?;
        }
        Ok(())
    }
}
