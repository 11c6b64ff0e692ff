//! Custom error types for the gba-strings crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum RomError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No ROM file was provided.
    #[error("No ROM file provided.")]
    MissingInput,

    /// The ROM buffer does not have the expected size.
    #[error("The ROM size is not correct. It must be 32 MiB / 0x2000000 bytes, got {found:#x}.")]
    InvalidSize { found: usize },

    /// The GBA magic byte at 0xB2 does not match.
    #[error("The GBA magic does not match. Byte 0xB2 is {found:#04x}, not 0x96.")]
    InvalidSignature { found: u8 },

    /// The gamecode at 0xAC does not match the expected product.
    #[error("The gamecode at 0xAC does not match. Bytes 0xAC - 0xAF must be 0x42, 0x34, 0x36, 0x45, got {found:02X?}.")]
    InvalidProductCode { found: [u8; 4] },

    /// The trie walk for a string exceeded the decode limits, which means
    /// the string tables are corrupt or cycling.
    #[error("String {string_id:#X} in language {language_id} exceeds the decode limits; the trie data is malformed.")]
    MalformedString { language_id: u32, string_id: u32 },

    /// An error produced while serializing the export.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenience `Result` type alias using the crate's `RomError` type.
pub type Result<T> = std::result::Result<T, RomError>;
