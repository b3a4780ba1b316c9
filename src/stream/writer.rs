//! Forward writer: appends one entry to an already-open stream.
//!
//! The stream is expected to be positioned at end-of-file. Bytes already
//! in the stream are never rewritten. Write failures are returned as-is;
//! there is no retry and no partial-write recovery.

use std::io::{self, Write};

use super::delimiter::{leading_delimiter_line, Token};

/// Writes `text` verbatim followed by the leading delimiter line for `token`.
pub fn write_entry<W: Write>(stream: &mut W, text: &str, token: Token) -> io::Result<()> {
    stream.write_all(text.as_bytes())?;
    stream.write_all(leading_delimiter_line(token).as_bytes())
}
