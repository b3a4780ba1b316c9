//! Delimiter protocol shared by every reader and writer.
//!
//! An entry is the (possibly multi-line) payload text followed by a line
//! that contains *only* a sentinel token:
//!
//! - `===` closes the metadata entry
//! - `---` closes a data record
//!
//! The writer emits the delimiter with a leading newline (`"\n---\n"`),
//! readers only ever match the bare line (`"---\n"`).

use std::fmt;

/// Sentinel tokens of the container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Closes the single, leading metadata entry
    Metadata,
    /// Closes a data record
    Record,
}

impl Token {
    /// Returns the bare sentinel string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Metadata => "===",
            Token::Record => "---",
        }
    }

    /// Returns the token closing an entry, chosen by the metadata flag.
    pub fn for_entry(is_metadata: bool) -> Self {
        if is_metadata {
            Token::Metadata
        } else {
            Token::Record
        }
    }

    /// Recognizes a line that is exactly a bare delimiter line.
    ///
    /// No trimming is applied: `"---\n"` matches, `" ---\n"`, `"---"` and
    /// `"---\r\n"` do not.
    pub fn from_line(line: &str) -> Option<Self> {
        if line == delimiter_line(Token::Metadata) {
            Some(Token::Metadata)
        } else if line == delimiter_line(Token::Record) {
            Some(Token::Record)
        } else {
            None
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The line a reader compares against: `token + "\n"`.
pub fn delimiter_line(token: Token) -> &'static str {
    match token {
        Token::Metadata => "===\n",
        Token::Record => "---\n",
    }
}

/// The delimiter as written: `"\n" + token + "\n"`.
pub fn leading_delimiter_line(token: Token) -> &'static str {
    match token {
        Token::Metadata => "\n===\n",
        Token::Record => "\n---\n",
    }
}

/// Returns true if any line of `text` would be read back as a delimiter.
///
/// Payload text must never contain such a line; nothing escapes it.
pub fn contains_sentinel_line(text: &str) -> bool {
    text.split('\n')
        .any(|line| line == Token::Metadata.as_str() || line == Token::Record.as_str())
}
