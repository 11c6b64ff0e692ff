//! The six localisations stored in the ROM and their table locations.

/// Number of language tables in the ROM.
pub const LANGUAGE_COUNT: u32 = 6;

/// Base addresses locating one language's string tables inside the ROM.
///
/// These are fixed properties of the ROM layout, not read from the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSlot {
    /// Start of the language's compressed bit-stream region. Per-string
    /// offsets from the index table are relative to this address.
    pub base_addr: u32,
    /// Table of 4-byte offsets, one per string id.
    pub index_addr: u32,
    /// Base of the trie edge tables (the 0x400 / 0x3FE child lookups).
    pub table_addr: u32,
}

/// A language table in the ROM, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Dutch,
    French,
    German,
    Italian,
    Spanish,
}

impl Language {
    /// All languages in storage order.
    pub const ALL: [Language; LANGUAGE_COUNT as usize] = [
        Language::English,
        Language::Dutch,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Spanish,
    ];

    /// Look up a language by its numeric id (0..=5).
    pub fn from_id(id: u32) -> Option<Language> {
        Self::ALL.get(id as usize).copied()
    }

    /// Lowercase display name, as used for export keys.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Dutch => "dutch",
            Language::French => "french",
            Language::German => "german",
            Language::Italian => "italian",
            Language::Spanish => "spanish",
        }
    }

    /// The table locations for this language.
    pub fn slot(self) -> LanguageSlot {
        match self {
            Language::English => LanguageSlot {
                base_addr: 0x019B_4990,
                index_addr: 0x019B_4B20,
                table_addr: 0x019B_4994,
            },
            Language::Dutch => LanguageSlot {
                base_addr: 0x019D_7784,
                index_addr: 0x019D_7924,
                table_addr: 0x019D_7788,
            },
            Language::French => LanguageSlot {
                base_addr: 0x019F_AF9C,
                index_addr: 0x019F_B154,
                table_addr: 0x019F_AFA0,
            },
            Language::German => LanguageSlot {
                base_addr: 0x01A1_F7E0,
                index_addr: 0x01A1_F98C,
                table_addr: 0x01A1_F7E4,
            },
            Language::Italian => LanguageSlot {
                base_addr: 0x01A4_60A0,
                index_addr: 0x01A4_6254,
                table_addr: 0x01A4_60A4,
            },
            Language::Spanish => LanguageSlot {
                base_addr: 0x01A6_97C0,
                index_addr: 0x01A6_9978,
                table_addr: 0x01A6_97C4,
            },
        }
    }
}
