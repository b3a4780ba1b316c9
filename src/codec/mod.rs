//! Payload codecs
//!
//! The framing layer stores opaque text. A [`Codec`] turns application
//! values into that text and back. Codecs are passed in explicitly;
//! [`JsonCodec`] is the default used by [`crate::container::Container::new`].
//!
//! A codec must never emit a line that is exactly `===` or `---`. This is
//! not enforced: [`encode_payload`] only logs `SENTINEL_IN_PAYLOAD` when it
//! happens.

mod errors;
mod json;

pub use errors::{CodecError, CodecResult};
pub use json::JsonCodec;

use crate::observability::{log_event, Event};
use crate::stream::contains_sentinel_line;

/// Converts values to payload text and back. Both directions are pure.
pub trait Codec {
    /// Application value type
    type Value;

    /// Encodes a value as payload text.
    fn encode(&self, value: &Self::Value) -> CodecResult<String>;

    /// Decodes payload text.
    fn decode(&self, text: &str) -> CodecResult<Self::Value>;
}

/// Encodes a value, warning if the text would break framing.
pub fn encode_payload<C: Codec + ?Sized>(codec: &C, value: &C::Value) -> CodecResult<String> {
    let text = codec.encode(value)?;
    if contains_sentinel_line(&text) {
        log_event(Event::SentinelInPayload);
    }
    Ok(text)
}

/// Decodes raw entry text.
///
/// Empty or whitespace-only text is an empty slot, not an error: it yields
/// `Ok(None)` and logs `EMPTY_PAYLOAD`. Decoding failures are returned
/// unchanged.
pub fn decode_payload<C: Codec + ?Sized>(codec: &C, text: &str) -> CodecResult<Option<C::Value>> {
    if text.trim().is_empty() {
        log_event(Event::EmptyPayload);
        return Ok(None);
    }
    codec.decode(text).map(Some)
}
