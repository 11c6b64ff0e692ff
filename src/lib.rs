//! # gba-strings
//!
//! A reader for The Sims 2 (GBA) ROM images that extracts the compressed
//! in-game language strings.
//!
//! The ROM stores its text in six language tables. Each string is encoded
//! as a bit stream that drives a binary trie walk; leaves of the trie are
//! character codes in the game's font encoding. This crate validates the
//! ROM image, exposes typed little-endian reads over it, and decodes
//! strings by (language, string id), one at a time or as a bulk export
//! of all 6 x 3462 entries.
pub mod rom;

// Re-export the main types for convenience
pub use rom::{
    RomReader,
    error::{Result, RomError},
    image::{ByteSource, RomImage},
    lang::{Language, LanguageSlot},
};
