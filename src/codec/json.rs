//! JSON codec, the default payload format.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::errors::{CodecError, CodecResult};
use super::Codec;

/// Encodes values as JSON with `serde_json`.
///
/// Compact by default. [`JsonCodec::pretty`] indents nested values by the
/// given number of spaces. Neither form can produce a line that is a bare
/// sentinel token, since every JSON line holds punctuation or a quoted
/// string.
pub struct JsonCodec<T = serde_json::Value> {
    indent: Option<usize>,
    _value: PhantomData<fn() -> T>,
}

impl<T> JsonCodec<T> {
    /// Compact JSON codec.
    pub fn new() -> Self {
        Self {
            indent: None,
            _value: PhantomData,
        }
    }

    /// Indented JSON codec.
    pub fn pretty(indent: usize) -> Self {
        Self {
            indent: Some(indent),
            _value: PhantomData,
        }
    }

    /// Returns the indent width, if any.
    pub fn indent(&self) -> Option<usize> {
        self.indent
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonCodec<T> {
    fn clone(&self) -> Self {
        Self {
            indent: self.indent,
            _value: PhantomData,
        }
    }
}

impl<T> fmt::Debug for JsonCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonCodec")
            .field("indent", &self.indent)
            .finish()
    }
}

impl<T> Codec for JsonCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Value = T;

    fn encode(&self, value: &T) -> CodecResult<String> {
        let width = match self.indent {
            None => return serde_json::to_string(value).map_err(CodecError::Encode),
            Some(width) => width,
        };

        let indent = vec![b' '; width];
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        value.serialize(&mut serializer).map_err(CodecError::Encode)?;

        String::from_utf8(buf).map_err(|e| CodecError::Custom(e.to_string()))
    }

    fn decode(&self, text: &str) -> CodecResult<T> {
        serde_json::from_str(text).map_err(CodecError::Malformed)
    }
}
