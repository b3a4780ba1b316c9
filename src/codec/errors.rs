//! Codec error types

use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Payload codec errors
#[derive(Debug, Error)]
pub enum CodecError {
    /// A value could not be turned into text
    #[error("Failed to encode payload: {0}")]
    Encode(#[source] serde_json::Error),

    /// Payload text could not be decoded
    #[error("Malformed payload: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Failure reported by a non-JSON codec
    #[error("Codec error: {0}")]
    Custom(String),
}

impl CodecError {
    /// Returns true for a JSON decoding failure
    ///
    /// Other codecs report through `Custom` in both directions; callers
    /// classify those by the operation that failed.
    pub fn is_malformed(&self) -> bool {
        matches!(self, CodecError::Malformed(_))
    }
}
