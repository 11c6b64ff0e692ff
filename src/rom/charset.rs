//! Mapping from decoded character codes to display text.

/// The game font's encoding table, indexed by `code - 0x20` for codes
/// 0x20..=0xBB. Plain ASCII up to 0x7A, then the Latin-diacritic and
/// symbol block. Two slots (0xB9, 0xBB) are unassigned in the font.
const ENCODING: [&str; 156] = [
    // ASCII range.
    " ", "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+", ",", "-", ".", "/",
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ":", ";", "<", "=", ">", "?", "@",
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q",
    "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
    "[", "\\", "]", "^", "_", "`",
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q",
    "r", "s", "t", "u", "v", "w", "x", "y", "z",
    // Game-specific extension block.
    "©", "œ", "¡", "¿", "À", "Á", "Â", "Ã", "Ä", "Å", "Æ", "Ç", "È", "É", "Ê", "Ë",
    "Ì", "Í", "Î", "Ï", "Ñ", "Ò", "Ó", "Ô", "Õ", "Ö", "Ø", "Ù", "Ú", "Ü", "ß", "à",
    "á", "â", "ã", "ä", "å", "æ", "ç", "è", "é", "ê", "ë", "ì", "í", "î", "ï", "ñ",
    "ò", "ó", "ô", "õ", "ö", "ø", "ù", "ú", "û", "ü", "º", "ª", "…", "™", "", "®", "",
];

/// Render a sequence of decoded character codes as text.
///
/// 0x0A maps to a newline, codes 0x20..=0xBB go through the font table,
/// and anything else is silently dropped (the terminator 0x00 is never
/// part of the sequence).
pub fn decode(codes: &[u16]) -> String {
    let mut out = String::with_capacity(codes.len());
    for &code in codes {
        match code {
            0x0A => out.push('\n'),
            0x20..=0xBB => out.push_str(ENCODING[usize::from(code) - 0x20]),
            _ => {}
        }
    }
    out
}
