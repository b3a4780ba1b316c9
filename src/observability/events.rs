//! Observable events for son
//!
//! Events are explicit and typed; each carries its own severity.

use std::fmt;

use super::logger::Severity;

/// Observable events in son
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration file loaded
    ConfigLoaded,

    // Writes
    /// Metadata entry written to a fresh container
    MetadataWritten,
    /// Data record appended
    EntryAppended,
    /// Metadata write refused, destination exists
    MetadataConflict,
    /// Encoded payload contains a line equal to a sentinel token
    SentinelInPayload,

    // Reads
    /// Container opened for reading
    ContainerOpen,
    /// Last record requested through the reverse path
    ReadLast,
    /// Payload text was empty or whitespace-only
    EmptyPayload,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::MetadataWritten => "METADATA_WRITTEN",
            Event::EntryAppended => "ENTRY_APPENDED",
            Event::MetadataConflict => "METADATA_CONFLICT",
            Event::SentinelInPayload => "SENTINEL_IN_PAYLOAD",
            Event::ContainerOpen => "CONTAINER_OPEN",
            Event::ReadLast => "READ_LAST",
            Event::EmptyPayload => "EMPTY_PAYLOAD",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::EntryAppended => Severity::Trace,
            Event::ConfigLoaded
            | Event::MetadataWritten
            | Event::ContainerOpen
            | Event::ReadLast => Severity::Info,
            Event::MetadataConflict | Event::SentinelInPayload | Event::EmptyPayload => {
                Severity::Warn
            }
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
