//! son - a delimited container format for serialized values
//!
//! A son file is a sequence of text payloads, each terminated by a
//! delimiter line: `===` for metadata, `---` for data records. At most the
//! first entry is metadata; everything else is records.
//!
//! Layers, bottom up:
//!
//! - [`stream`]: delimiter tokens, entry writer, forward entry reader and
//!   the last-record extractor
//! - [`reverse`]: line iterator that reads a seekable file from the end
//! - [`codec`]: pluggable payload codecs, JSON by default
//! - [`container`]: file-level dump, load, stream and load-last
//! - [`serialize`]: the same framing over in-memory strings
//! - [`cli`]: command-line front end

pub mod cli;
pub mod codec;
pub mod container;
pub mod observability;
pub mod reverse;
pub mod serialize;
pub mod stream;
