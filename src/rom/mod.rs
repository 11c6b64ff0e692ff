//! Core ROM reader module

pub mod charset;
pub mod error;
pub mod export;
pub mod image;
pub mod lang;
pub mod strings;
pub mod trie;

use std::path::Path;

use log::info;
use serde_json::{Map, Value};

pub use error::{Result, RomError};
use image::RomImage;
pub use lang::Language;

/// The main reader for The Sims 2 (GBA) ROM images.
///
/// Owns one validated [`RomImage`] and exposes string decoding over it.
/// The image is immutable for the reader's whole lifetime; loading a
/// different ROM means constructing a new reader.
pub struct RomReader {
    image: RomImage,
    rom_name: Option<String>,
}

impl RomReader {
    /// Read and validate a ROM image from the given path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, or if the image
    /// fails validation (size, GBA magic, gamecode).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening ROM file: {}", path.display());
        let data = std::fs::read(path)?;

        let rom_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        let mut reader = Self::from_bytes(data)?;
        reader.rom_name = rom_name;
        Ok(reader)
    }

    /// Validate an in-memory ROM buffer.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let image = RomImage::load(data)?;
        Ok(Self {
            image,
            rom_name: None,
        })
    }

    /// The loaded image.
    pub fn image(&self) -> &RomImage {
        &self.image
    }

    /// File name of the ROM, if it was opened from a path.
    pub fn rom_name(&self) -> Option<&str> {
        self.rom_name.as_deref()
    }

    /// Decode one string.
    ///
    /// `language_id` is 0..=5 in storage order (see [`Language::ALL`]),
    /// `string_id` is 0..0xD86. Out-of-range arguments yield an empty
    /// string.
    pub fn fetch_string(&self, language_id: u32, string_id: u32) -> Result<String> {
        strings::fetch(&self.image, language_id, string_id)
    }

    /// Decode every string in every language into a nested mapping.
    pub fn export_all(&self) -> Result<Map<String, Value>> {
        export::export_all(&self.image)
    }
}
