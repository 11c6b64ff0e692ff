//! Bit-driven trie traversal over the compressed string data.
//!
//! Strings are stored as a prefix code: each character is the leaf of a
//! binary trie whose edges are picked one bit at a time from the string's
//! bit stream. The trie itself is two interleaved little-endian u16
//! tables in the ROM (child offsets `node*4 + table_addr - 0x400` for a
//! 0 bit and `- 0x3FE` for a 1 bit); no tree is ever materialized in
//! memory.

use super::image::ByteSource;

/// Synthetic root node value. Node values above 0xFF are internal,
/// values 0x00..=0xFF are leaf character codes.
pub const ROOT_NODE: u16 = 0x100;

/// Upper bound on bits consumed per trie descent. A well-formed trie
/// over a 256-code alphabet resolves in far fewer; hitting this limit
/// means the edge tables cycle.
pub const MAX_BITS_PER_CODE: u32 = 64;

/// Rolling 32-bit read window over a string's bit stream.
///
/// Bits are consumed LSB-first. After 8 bits the window slides forward
/// by a single byte and is re-read from the source, so 3 of the 4 window
/// bytes overlap the previous window. The overlap keeps `bit_pos`
/// aligned with the byte the stream is currently in.
#[derive(Debug, Clone, Copy)]
pub struct BitCursor {
    shift_addr: u32,
    shift_val: u32,
    bit_pos: u32,
}

impl BitCursor {
    /// Open a cursor at the given bit-stream start address.
    pub fn new(src: &impl ByteSource, shift_addr: u32) -> Self {
        Self {
            shift_addr,
            shift_val: src.read_u32(shift_addr),
            bit_pos: 0,
        }
    }

    /// Consume and return the next bit (0 or 1).
    pub fn next_bit(&mut self, src: &impl ByteSource) -> u32 {
        let bit = (self.shift_val >> self.bit_pos) & 1;
        self.bit_pos += 1;
        if self.bit_pos == 8 {
            self.bit_pos = 0;
            self.shift_addr = self.shift_addr.wrapping_add(1);
            self.shift_val = src.read_u32(self.shift_addr);
        }
        bit
    }
}

/// Walk the trie from the synthetic root to the next leaf code.
///
/// Returns `None` if the descent does not reach a leaf within
/// [`MAX_BITS_PER_CODE`] bits, which only happens on corrupt edge tables
/// (the reference tool would loop forever here).
pub fn next_code(src: &impl ByteSource, table_addr: u32, cursor: &mut BitCursor) -> Option<u16> {
    let mut node = ROOT_NODE;
    let mut depth = 0;

    while node > 0xFF {
        if depth == MAX_BITS_PER_CODE {
            return None;
        }
        let edge = if cursor.next_bit(src) == 0 { 0x400 } else { 0x3FE };
        let child_addr = (u32::from(node) * 4)
            .wrapping_add(table_addr)
            .wrapping_sub(edge);
        node = src.read_u16(child_addr);
        depth += 1;
    }

    Some(node)
}
