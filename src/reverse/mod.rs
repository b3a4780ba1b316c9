//! Reverse line iteration over seekable streams
//!
//! Reads a stream backward from its end in fixed-size chunks and hands
//! out its lines last-first. The framing layer only consumes the line
//! sequence, so the chunking strategy can change without touching
//! delimiter logic.

mod lines;

pub use lines::{ReverseLines, DEFAULT_CHUNK_SIZE};
