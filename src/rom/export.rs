//! Bulk export of every string in every language.

use log::info;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use super::error::Result;
use super::image::ByteSource;
use super::lang::Language;
use super::strings::{self, STRING_COUNT};

/// Decode the full id x language space into a nested mapping.
///
/// Outer keys are the lowercase language names in storage order; inner
/// keys are the string ids as unpadded uppercase hex, in numeric order.
/// Pure read of the image; writing the result anywhere is the caller's
/// job.
pub fn export_all(src: &impl ByteSource) -> Result<Map<String, Value>> {
    let mut languages = Map::new();

    for language in Language::ALL {
        let mut table = Map::new();
        for string_id in 0..STRING_COUNT {
            let text = strings::fetch(src, language as u32, string_id)?;
            table.insert(format!("{string_id:X}"), Value::String(text));
        }
        languages.insert(language.name().to_string(), Value::Object(table));
    }

    info!(
        "exported {} strings across {} languages",
        STRING_COUNT * Language::ALL.len() as u32,
        Language::ALL.len()
    );
    Ok(languages)
}

/// Serialize an export mapping as JSON indented with 4 spaces.
pub fn to_pretty_json(export: &Map<String, Value>) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    export.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
