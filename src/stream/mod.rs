//! Record framing for son containers
//!
//! A container is a text file holding a sequence of entries. Each entry is
//! opaque payload text closed by a sentinel line:
//!
//! ```text
//! {"v": 1}
//!
//! ===
//! {"a": 1}
//!
//! ---
//! ```
//!
//! At most one metadata entry (`===`) exists and, if present, it is the
//! first entry. Every other entry is a data record (`---`).
//!
//! # Paths
//!
//! - Forward: `write_entry` appends, `EntryReader` parses in file order
//! - Reverse: `last_entry` rebuilds only the final record from lines
//!   delivered last-first, so its cost follows the size of that record
//!
//! This module works on already-open streams only. It performs no codec
//! work and never opens, creates or checks files.

mod delimiter;
mod last;
mod reader;
mod writer;

pub use delimiter::{contains_sentinel_line, delimiter_line, leading_delimiter_line, Token};
pub use last::last_entry;
pub use reader::{first_entry, DataEntries, Entry, EntryReader};
pub use writer::write_entry;
