//! Selections over raw byte buffers.
//!
//! An [`IndexSet`](selkit_index_set::IndexSet) describes which logical items are
//! selected. This crate translates such a selection into byte offsets for a
//! fixed-width item encoding ([`ByteSelectionAdapter`]) and pairs it with an
//! [`ItemCodec`] to read, write and transform the selected items in place
//! ([`SelectionData`]).

pub mod byte_selection;
pub mod codec;
pub mod selection_data;

pub use byte_selection::ByteSelectionAdapter;
pub use codec::{ItemCodec, U8Codec, U16BeCodec, U16LeCodec, U32LeCodec};
pub use selection_data::SelectionData;
