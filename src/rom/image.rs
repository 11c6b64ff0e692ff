//! Validated ROM image and bounds-checked typed reads.

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, info};

use super::error::{Result, RomError};

/// Exact size of a valid ROM image (32 MiB).
pub const ROM_SIZE: usize = 0x200_0000;

const SIGNATURE_OFFSET: usize = 0xB2;
const SIGNATURE: u8 = 0x96;
const PRODUCT_CODE_OFFSET: usize = 0xAC;
const PRODUCT_CODE: [u8; 4] = [0x42, 0x34, 0x36, 0x45]; // "B46E"

/// Read-only source of little-endian integers at absolute ROM addresses.
///
/// Reads that would run past the end of the buffer return 0 instead of
/// failing. The original tool behaves this way and the decoder relies on
/// it, so stricter callers must bounds-check addresses themselves.
pub trait ByteSource {
    fn read_u8(&self, offset: u32) -> u8;
    fn read_u16(&self, offset: u32) -> u16;
    fn read_u32(&self, offset: u32) -> u32;
}

/// An immutable, validated ROM image.
///
/// Can only be constructed through [`RomImage::load`], so every live
/// `RomImage` is guaranteed to have the correct size, GBA magic and
/// gamecode. The buffer is never mutated after loading.
pub struct RomImage {
    data: Vec<u8>,
}

impl RomImage {
    /// Validate a ROM buffer and take ownership of it.
    ///
    /// Validation is all-or-nothing: on any failure the buffer is
    /// discarded and no image is produced.
    ///
    /// # Errors
    /// - [`RomError::InvalidSize`] if the buffer is not exactly 32 MiB
    /// - [`RomError::InvalidSignature`] if byte 0xB2 is not 0x96
    /// - [`RomError::InvalidProductCode`] if bytes 0xAC..0xB0 are not "B46E"
    pub fn load(data: Vec<u8>) -> Result<Self> {
        if data.len() != ROM_SIZE {
            return Err(RomError::InvalidSize { found: data.len() });
        }

        let signature = data[SIGNATURE_OFFSET];
        if signature != SIGNATURE {
            return Err(RomError::InvalidSignature { found: signature });
        }

        let mut code = [0u8; 4];
        code.copy_from_slice(&data[PRODUCT_CODE_OFFSET..PRODUCT_CODE_OFFSET + 4]);
        if code != PRODUCT_CODE {
            return Err(RomError::InvalidProductCode { found: code });
        }

        debug!(
            "ROM validated: size {:#x}, magic {:#04x}, gamecode {:02X?}",
            data.len(),
            signature,
            code
        );
        info!("ROM image loaded");
        Ok(Self { data })
    }

    /// Size of the image in bytes (always [`ROM_SIZE`]).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl ByteSource for RomImage {
    fn read_u8(&self, offset: u32) -> u8 {
        let offset = offset as usize;
        if offset < self.data.len() {
            self.data[offset]
        } else {
            0
        }
    }

    fn read_u16(&self, offset: u32) -> u16 {
        let offset = offset as usize;
        match offset.checked_add(2) {
            Some(end) if end <= self.data.len() => LittleEndian::read_u16(&self.data[offset..end]),
            _ => 0,
        }
    }

    fn read_u32(&self, offset: u32) -> u32 {
        let offset = offset as usize;
        match offset.checked_add(4) {
            Some(end) if end <= self.data.len() => LittleEndian::read_u32(&self.data[offset..end]),
            _ => 0,
        }
    }
}
