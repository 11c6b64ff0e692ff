//! Decoding of single strings by (language, string id).

use log::trace;

use super::charset;
use super::error::{Result, RomError};
use super::image::ByteSource;
use super::lang::Language;
use super::trie::{self, BitCursor};

/// Number of string ids per language table.
pub const STRING_COUNT: u32 = 0xD86;

/// Ceiling on decoded characters per string. Real strings are a few
/// hundred characters at most; a terminator that never arrives means the
/// bit stream or edge tables are corrupt.
const MAX_STRING_CODES: usize = 4096;

/// Decode one string from the ROM.
///
/// Out-of-range `language_id` or `string_id` values yield an empty
/// string rather than an error, matching the permissive policy of the
/// original tool.
///
/// # Errors
/// [`RomError::MalformedString`] if the trie walk exceeds the decode
/// limits (only possible on a corrupt image).
pub fn fetch(src: &impl ByteSource, language_id: u32, string_id: u32) -> Result<String> {
    let Some(language) = Language::from_id(language_id) else {
        return Ok(String::new());
    };
    if string_id >= STRING_COUNT {
        return Ok(String::new());
    }

    let slot = language.slot();
    let stream_offset = src.read_u32(slot.index_addr + string_id * 4);
    let shift_addr = slot.base_addr.wrapping_add(stream_offset);
    trace!(
        "fetch {:?} id {:#X}: bit stream at {:#010x}",
        language,
        string_id,
        shift_addr
    );

    let mut cursor = BitCursor::new(src, shift_addr);
    let mut codes = Vec::new();
    loop {
        let code = trie::next_code(src, slot.table_addr, &mut cursor).ok_or(
            RomError::MalformedString {
                language_id,
                string_id,
            },
        )?;
        if code == 0 {
            break; // terminator, not part of the string
        }
        codes.push(code);
        if codes.len() == MAX_STRING_CODES {
            return Err(RomError::MalformedString {
                language_id,
                string_id,
            });
        }
    }

    Ok(charset::decode(&codes))
}
