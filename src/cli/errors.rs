//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::container::ContainerError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Values on stdin are not a JSON stream
    InputError,
    /// Writing a result to stdout failed
    OutputError,
    /// Container operation failed
    ContainerError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "SON_CLI_CONFIG_ERROR",
            Self::InputError => "SON_CLI_INPUT_ERROR",
            Self::OutputError => "SON_CLI_OUTPUT_ERROR",
            Self::ContainerError => "SON_CLI_CONTAINER_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// Unreadable input values
    pub fn input_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InputError, msg)
    }

    /// Result could not be written
    pub fn output_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::OutputError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Only output is written through plain `io` calls; input arrives as JSON.
impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::output_error(format!("Failed to write result: {}", e))
    }
}

impl From<ContainerError> for CliError {
    fn from(e: ContainerError) -> Self {
        Self::new(CliErrorCode::ContainerError, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_container_error_keeps_its_code() {
        let err: CliError = ContainerError::conflict(Path::new("a.son")).into();
        assert_eq!(err.code_str(), "SON_CLI_CONTAINER_ERROR");
        assert!(err.message().contains("SON_CONTAINER_CONFLICT"));
    }

    #[test]
    fn test_display() {
        let err = CliError::config_error("chunk_size must be > 0");
        assert_eq!(err.to_string(), "SON_CLI_CONFIG_ERROR: chunk_size must be > 0");
    }

    #[test]
    fn test_io_error_is_output_error() {
        let err: CliError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(err.code(), &CliErrorCode::OutputError);
        assert_eq!(err.message(), "Failed to write result: pipe closed");
    }
}
