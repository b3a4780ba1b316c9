//! In-memory serialization
//!
//! String-level counterparts of the container operations, for data that
//! is already in memory. The same framing rules apply: `from_str` runs the
//! forward reader over the string's bytes.

use std::io::Cursor;

use crate::codec::{decode_payload, encode_payload, Codec};
use crate::container::{ContainerError, ContainerResult};
use crate::observability::{log_event, Event};
use crate::stream::{leading_delimiter_line, EntryReader, Token};

/// Encodes one entry: payload text followed by its delimiter.
pub fn to_string<C: Codec>(codec: &C, value: &C::Value, is_metadata: bool) -> ContainerResult<String> {
    let mut text = encode_payload(codec, value)
        .map_err(|e| ContainerError::encode("Failed to encode entry", e))?;
    text.push_str(leading_delimiter_line(Token::for_entry(is_metadata)));
    Ok(text)
}

/// Decodes a whole container held in a string.
///
/// Returns the metadata, if the first entry is one, and every data
/// record in order, with `None` for empty records. Metadata entries after
/// the first entry are skipped without decoding. Blank input reads as
/// `(None, [])`.
pub fn from_str<C: Codec>(
    codec: &C,
    s: &str,
) -> ContainerResult<(Option<C::Value>, Vec<Option<C::Value>>)> {
    if s.trim().is_empty() {
        log_event(Event::EmptyPayload);
        return Ok((None, Vec::new()));
    }

    let mut metadata = None;
    let mut records = Vec::new();

    for (index, entry) in EntryReader::new(Cursor::new(s)).enumerate() {
        let entry = entry.map_err(|e| ContainerError::io("Failed to read entry", e))?;
        if entry.is_metadata() && index > 0 {
            continue;
        }

        let value = decode_payload(codec, &entry.text)
            .map_err(|e| ContainerError::decode("Failed to decode entry", e))?;

        if entry.is_metadata() {
            metadata = value;
        } else {
            records.push(value);
        }
    }

    Ok((metadata, records))
}
