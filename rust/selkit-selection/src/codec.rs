//! Fixed-width item encodings.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Encodes and decodes one item of a fixed byte width.
///
/// `decode` and `encode` are always handed a slice of exactly
/// [`item_byte_width`](Self::item_byte_width) bytes.
pub trait ItemCodec {
    type Item: Copy;

    fn item_byte_width(&self) -> usize;

    fn decode(&self, bytes: &[u8]) -> Self::Item;

    fn encode(&self, item: Self::Item, bytes: &mut [u8]);
}

/// One byte per item.
#[derive(Debug, Clone, Copy, Default)]
pub struct U8Codec;

impl ItemCodec for U8Codec {
    type Item = u8;

    fn item_byte_width(&self) -> usize {
        1
    }

    fn decode(&self, bytes: &[u8]) -> u8 {
        bytes[0]
    }

    fn encode(&self, item: u8, bytes: &mut [u8]) {
        bytes[0] = item;
    }
}

/// Little-endian 16-bit items (the common layout of palette entries).
#[derive(Debug, Clone, Copy, Default)]
pub struct U16LeCodec;

impl ItemCodec for U16LeCodec {
    type Item = u16;

    fn item_byte_width(&self) -> usize {
        2
    }

    fn decode(&self, bytes: &[u8]) -> u16 {
        LittleEndian::read_u16(bytes)
    }

    fn encode(&self, item: u16, bytes: &mut [u8]) {
        LittleEndian::write_u16(bytes, item);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct U16BeCodec;

impl ItemCodec for U16BeCodec {
    type Item = u16;

    fn item_byte_width(&self) -> usize {
        2
    }

    fn decode(&self, bytes: &[u8]) -> u16 {
        BigEndian::read_u16(bytes)
    }

    fn encode(&self, item: u16, bytes: &mut [u8]) {
        BigEndian::write_u16(bytes, item);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct U32LeCodec;

impl ItemCodec for U32LeCodec {
    type Item = u32;

    fn item_byte_width(&self) -> usize {
        4
    }

    fn decode(&self, bytes: &[u8]) -> u32 {
        LittleEndian::read_u32(bytes)
    }

    fn encode(&self, item: u32, bytes: &mut [u8]) {
        LittleEndian::write_u32(bytes, item);
    }
}
