//! Reading and writing the items a selection picks out of a byte buffer.

use std::ops::Range;

use selkit_common::{Result, error::Error};
use selkit_index_set::IndexSet;

use crate::{byte_selection::ByteSelectionAdapter, codec::ItemCodec};

/// An [`IndexSet`] of logical items paired with the codec that stores them in a
/// byte buffer starting at `base_offset`.
///
/// Every operation resolves and bounds-checks all byte spans it is going to
/// touch before reading or mutating anything, so a failed call leaves the
/// buffer exactly as it was.
#[derive(Debug, Clone)]
pub struct SelectionData<C: ItemCodec> {
    set: IndexSet,
    codec: C,
    adapter: ByteSelectionAdapter,
}

impl<C: ItemCodec> SelectionData<C> {
    pub fn new(set: IndexSet, codec: C, base_offset: i64) -> Result<SelectionData<C>> {
        let adapter = ByteSelectionAdapter::for_codec(&codec, base_offset)?;
        Ok(SelectionData {
            set,
            codec,
            adapter,
        })
    }

    #[inline]
    pub fn set(&self) -> &IndexSet {
        &self.set
    }

    #[inline]
    pub fn codec(&self) -> &C {
        &self.codec
    }

    #[inline]
    pub fn adapter(&self) -> &ByteSelectionAdapter {
        &self.adapter
    }

    /// Number of selected items.
    #[inline]
    pub fn count(&self) -> usize {
        self.set.count()
    }

    /// Decodes the selected items in enumeration order.
    pub fn read(&self, buf: &[u8]) -> Result<Vec<C::Item>> {
        let spans = self.item_spans(buf.len())?;
        Ok(spans
            .into_iter()
            .map(|span| self.codec.decode(&buf[span]))
            .collect())
    }

    /// Encodes `items[i]` into the `i`-th selected item.
    ///
    /// Fails with an invalid-argument error unless exactly `count()` items are
    /// given. When an index is selected more than once the last write wins.
    pub fn write(&self, buf: &mut [u8], items: &[C::Item]) -> Result<()> {
        if items.len() != self.count() {
            return Err(Error::invalid_arg(
                "items",
                format!("expected {} items, got {}", self.count(), items.len()),
            ));
        }
        let spans = self.item_spans(buf.len())?;
        for (span, &item) in spans.into_iter().zip(items) {
            self.codec.encode(item, &mut buf[span]);
        }
        log::debug!("wrote {} items through {:?} selection", items.len(), self.set.kind());
        Ok(())
    }

    /// Replaces each selected item with `f(item)`, in enumeration order.
    pub fn transform(&self, buf: &mut [u8], mut f: impl FnMut(C::Item) -> C::Item) -> Result<()> {
        let spans = self.item_spans(buf.len())?;
        for span in spans {
            let item = f(self.codec.decode(&buf[span.clone()]));
            self.codec.encode(item, &mut buf[span]);
        }
        Ok(())
    }

    /// Sets every selected item to `item`.
    pub fn fill(&self, buf: &mut [u8], item: C::Item) -> Result<()> {
        self.transform(buf, |_| item)
    }

    /// Copies the raw bytes of the selected items from `src` into the same
    /// positions of `dst`, one contiguous span per run of the selection.
    pub fn copy_between(&self, src: &[u8], dst: &mut [u8]) -> Result<()> {
        let runs = self.adapter.byte_runs(&self.set)?;
        let spans = runs
            .iter()
            .map(|run| -> Result<Range<usize>> {
                let span = to_buffer_span(run.start, run.count, src.len())?;
                to_buffer_span(run.start, run.count, dst.len())?;
                Ok(span)
            })
            .collect::<Result<Vec<_>>>()?;
        for span in &spans {
            dst[span.clone()].copy_from_slice(&src[span.clone()]);
        }
        log::debug!("copied {} items in {} spans", self.count(), spans.len());
        Ok(())
    }

    /// Byte spans of every selected item, in enumeration order.
    fn item_spans(&self, buf_len: usize) -> Result<Vec<Range<usize>>> {
        let width = self.codec.item_byte_width();
        self.set
            .iter()
            .map(|index| to_buffer_span(self.adapter.byte_offset(index)?, width, buf_len))
            .collect()
    }
}

/// Converts a signed byte span into a slice range of a buffer of `buf_len` bytes.
fn to_buffer_span(start: i64, len: usize, buf_len: usize) -> Result<Range<usize>> {
    let start = usize::try_from(start).map_err(|_| {
        Error::invalid_arg("base_offset", format!("byte offset {start} is negative"))
    })?;
    match start.checked_add(len) {
        Some(end) if end <= buf_len => Ok(start..end),
        _ => Err(Error::out_of_range(start, buf_len)),
    }
}
