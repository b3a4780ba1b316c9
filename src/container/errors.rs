//! Container error types
//!
//! Error codes:
//! - SON_CONTAINER_CONFLICT (metadata write would overwrite)
//! - SON_IO_FAILED
//! - SON_PAYLOAD_MALFORMED
//! - SON_PAYLOAD_ENCODE_FAILED
//!
//! None of these is fatal to the process; each ends the current operation.

use std::fmt;
use std::io;
use std::path::Path;

use crate::codec::CodecError;

/// Severity levels for container errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, caller continues
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Container error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerErrorCode {
    /// Metadata write into an existing destination
    SonContainerConflict,
    /// Underlying stream failure
    SonIoFailed,
    /// Entry text failed to decode
    SonPayloadMalformed,
    /// Value failed to encode
    SonPayloadEncodeFailed,
}

impl ContainerErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ContainerErrorCode::SonContainerConflict => "SON_CONTAINER_CONFLICT",
            ContainerErrorCode::SonIoFailed => "SON_IO_FAILED",
            ContainerErrorCode::SonPayloadMalformed => "SON_PAYLOAD_MALFORMED",
            ContainerErrorCode::SonPayloadEncodeFailed => "SON_PAYLOAD_ENCODE_FAILED",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

impl fmt::Display for ContainerErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug)]
enum Source {
    Io(io::Error),
    Codec(CodecError),
}

/// Container error with context
#[derive(Debug)]
pub struct ContainerError {
    code: ContainerErrorCode,
    message: String,
    details: Option<String>,
    source: Option<Source>,
}

impl ContainerError {
    /// Metadata write refused because the destination exists
    pub fn conflict(path: &Path) -> Self {
        Self {
            code: ContainerErrorCode::SonContainerConflict,
            message: format!("{} exists, writing metadata would overwrite it", path.display()),
            details: None,
            source: None,
        }
    }

    /// Stream failure, source kept unchanged
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: ContainerErrorCode::SonIoFailed,
            message: message.into(),
            details: None,
            source: Some(Source::Io(source)),
        }
    }

    /// Value could not be encoded
    pub fn encode(message: impl Into<String>, source: CodecError) -> Self {
        Self::from_codec(ContainerErrorCode::SonPayloadEncodeFailed, message, source)
    }

    /// Entry text could not be decoded, whatever the codec reported
    pub fn decode(message: impl Into<String>, source: CodecError) -> Self {
        Self::from_codec(ContainerErrorCode::SonPayloadMalformed, message, source)
    }

    fn from_codec(code: ContainerErrorCode, message: impl Into<String>, source: CodecError) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            source: Some(Source::Codec(source)),
        }
    }

    /// Attaches the path the operation worked on
    pub fn at_path(mut self, path: &Path) -> Self {
        self.details = Some(format!("path: {}", path.display()));
        self
    }

    /// Returns the error code
    pub fn code(&self) -> ContainerErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns additional error details
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Returns true for a refused metadata write
    pub fn is_conflict(&self) -> bool {
        self.code == ContainerErrorCode::SonContainerConflict
    }

    /// Returns the underlying I/O error, if this is an I/O failure
    pub fn io_error(&self) -> Option<&io::Error> {
        match self.source {
            Some(Source::Io(ref e)) => Some(e),
            _ => None,
        }
    }

    /// Returns the underlying codec error, if any
    pub fn codec_error(&self) -> Option<&CodecError> {
        match self.source {
            Some(Source::Codec(ref e)) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity(), self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        match self.source {
            Some(Source::Io(ref e)) => write!(f, ": {}", e),
            Some(Source::Codec(ref e)) => write!(f, ": {}", e),
            None => Ok(()),
        }
    }
}

impl std::error::Error for ContainerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.source {
            Some(Source::Io(ref e)) => Some(e as &(dyn std::error::Error + 'static)),
            Some(Source::Codec(ref e)) => Some(e as &(dyn std::error::Error + 'static)),
            None => None,
        }
    }
}

/// Result type for container operations
pub type ContainerResult<T> = Result<T, ContainerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ContainerErrorCode::SonContainerConflict.code(),
            "SON_CONTAINER_CONFLICT"
        );
        assert_eq!(ContainerErrorCode::SonIoFailed.code(), "SON_IO_FAILED");
        assert_eq!(
            ContainerErrorCode::SonPayloadMalformed.code(),
            "SON_PAYLOAD_MALFORMED"
        );
        assert_eq!(
            ContainerErrorCode::SonPayloadEncodeFailed.code(),
            "SON_PAYLOAD_ENCODE_FAILED"
        );
    }

    #[test]
    fn test_conflict_display() {
        let err = ContainerError::conflict(Path::new("/tmp/data.son"));
        assert!(err.is_conflict());
        let display = err.to_string();
        assert!(display.contains("SON_CONTAINER_CONFLICT"));
        assert!(display.contains("/tmp/data.son"));
        assert!(display.contains("overwrite"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_kept_unchanged() {
        let err = ContainerError::io(
            "Failed to open container",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        )
        .at_path(Path::new("missing.son"));

        assert_eq!(err.code(), ContainerErrorCode::SonIoFailed);
        assert_eq!(err.io_error().unwrap().kind(), io::ErrorKind::NotFound);
        assert_eq!(err.details(), Some("path: missing.son"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_codec_error_classified_by_direction() {
        let malformed = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ContainerError::decode("Failed to decode record", CodecError::Malformed(malformed));
        assert_eq!(err.code(), ContainerErrorCode::SonPayloadMalformed);
        assert!(err.codec_error().is_some());

        let err = ContainerError::decode("Failed to decode record", CodecError::Custom("x".into()));
        assert_eq!(err.code(), ContainerErrorCode::SonPayloadMalformed);

        let err = ContainerError::encode("Failed to encode", CodecError::Custom("x".into()));
        assert_eq!(err.code(), ContainerErrorCode::SonPayloadEncodeFailed);
    }
}
