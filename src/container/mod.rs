//! Container files
//!
//! File-level entry points on top of the framing layer:
//!
//! - `dump` / `append` / `write_metadata`: write one entry
//! - `load`: metadata plus every record
//! - `stream`: metadata plus a lazy record sequence, for large files
//! - `load_last`: metadata plus only the last record, via a reverse scan
//!
//! An empty file reads as no metadata and no records. A missing file is an
//! I/O failure.
//!
//! # Error kinds
//!
//! - Conflict: metadata write into an existing destination
//! - Malformed payload: codec decoding failed
//! - I/O failure: underlying stream error, unchanged
//!
//! Empty payloads are not errors: they log `EMPTY_PAYLOAD` and read as
//! absent.

mod container;
mod errors;
mod options;
mod records;

pub use container::Container;
pub use errors::{ContainerError, ContainerErrorCode, ContainerResult, Severity};
pub use options::ContainerOptions;
pub use records::Records;
