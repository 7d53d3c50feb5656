//! Chunk tag constants. A chunk is identified by its leading bits: the two
//! 8-bit tags (`RGB`, `RGBA`) are matched first, everything else by the top
//! two bits.

pub(crate) const OP_INDEX: u8 = 0x00;
pub(crate) const OP_DIFF: u8 = 0x40;
pub(crate) const OP_LUMA: u8 = 0x80;
pub(crate) const OP_RUN: u8 = 0xc0;
pub(crate) const OP_RGB: u8 = 0xfe;
pub(crate) const OP_RGBA: u8 = 0xff;

/// Selects the top two tag bits.
pub(crate) const MASK_2: u8 = 0xc0;

/// Longest run a single RUN chunk can carry. Lengths 63 and 64 would collide
/// with the RGB/RGBA tags, so the 6-bit field encodes 1..=62 as 0..=61.
pub(crate) const MAX_RUN: u8 = 62;
