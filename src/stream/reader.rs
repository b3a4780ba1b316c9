//! Forward reader: lazy, entry-at-a-time parsing of a container stream.
//!
//! Lines are consumed in on-disk order and accumulated until a bare
//! delimiter line closes the entry. Control returns to the caller after
//! each complete entry. Content after the last delimiter line is an
//! incomplete entry and is dropped.
//!
//! The reader is fused: once the stream is exhausted, or an I/O error has
//! been returned, it yields `None` forever.

use std::io::{self, BufRead};

use super::delimiter::Token;

/// One complete entry: raw payload text plus the sentinel that closed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Every line preceding the delimiter line, newlines preserved
    pub text: String,
    /// Token of the closing delimiter line
    pub token: Token,
}

impl Entry {
    /// Creates an entry.
    pub fn new(text: impl Into<String>, token: Token) -> Self {
        Self {
            text: text.into(),
            token,
        }
    }

    /// Returns true if the entry was closed by the metadata sentinel.
    pub fn is_metadata(&self) -> bool {
        self.token == Token::Metadata
    }
}

/// Iterator over the entries of a container stream, in file order.
pub struct EntryReader<R> {
    reader: R,
    /// Scratch buffer for the current line
    line: String,
    /// Lines of the entry being assembled
    pending: String,
    done: bool,
}

impl<R: BufRead> EntryReader<R> {
    /// Wraps a line-oriented stream.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: String::new(),
            done: false,
        }
    }

    /// Returns the underlying stream.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_entry(&mut self) -> io::Result<Option<Entry>> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                // Undelimited trailing content is not an entry.
                self.pending.clear();
                return Ok(None);
            }

            match Token::from_line(&self.line) {
                Some(token) => {
                    let text = std::mem::take(&mut self.pending);
                    return Ok(Some(Entry::new(text, token)));
                }
                None => self.pending.push_str(&self.line),
            }
        }
    }
}

impl<R: BufRead> Iterator for EntryReader<R> {
    type Item = io::Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_entry() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Reads only the first entry of a stream.
///
/// Consumes at most one entry's worth of lines. `Ok(None)` means the stream
/// holds no complete entry.
pub fn first_entry<R: BufRead>(reader: R) -> io::Result<Option<Entry>> {
    EntryReader::new(reader).next().transpose()
}

/// Data records of a stream, skipping every metadata entry.
///
/// A metadata entry that is not first is malformed; it is skipped rather
/// than reported.
pub struct DataEntries<R> {
    inner: EntryReader<R>,
}

impl<R: BufRead> DataEntries<R> {
    /// Wraps a line-oriented stream.
    pub fn new(reader: R) -> Self {
        Self {
            inner: EntryReader::new(reader),
        }
    }
}

impl<R: BufRead> Iterator for DataEntries<R> {
    type Item = io::Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) if entry.is_metadata() => continue,
                other => return Some(other),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn entries(input: &str) -> Vec<Entry> {
        EntryReader::new(Cursor::new(input))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_empty_stream_yields_nothing() {
        assert!(entries("").is_empty());
    }

    #[test]
    fn test_metadata_then_records() {
        let got = entries("META\n===\nABC\n---\nABD\n---\n");
        assert_eq!(
            got,
            vec![
                Entry::new("META\n", Token::Metadata),
                Entry::new("ABC\n", Token::Record),
                Entry::new("ABD\n", Token::Record),
            ]
        );
    }

    #[test]
    fn test_multiline_text_preserved() {
        let got = entries("{\n  \"a\": 1\n}\n---\n");
        assert_eq!(got, vec![Entry::new("{\n  \"a\": 1\n}\n", Token::Record)]);
    }

    #[test]
    fn test_blank_line_before_delimiter_belongs_to_text() {
        // Writer output for text ending in a newline
        let got = entries("x\n\n---\n");
        assert_eq!(got, vec![Entry::new("x\n\n", Token::Record)]);
    }

    #[test]
    fn test_trailing_undelimited_content_dropped() {
        let got = entries("A\n---\nB\nC");
        assert_eq!(got, vec![Entry::new("A\n", Token::Record)]);
    }

    #[test]
    fn test_delimiter_without_newline_is_not_a_delimiter() {
        let got = entries("A\n---");
        assert!(got.is_empty());
    }

    #[test]
    fn test_sentinel_inside_line_is_text() {
        let got = entries("a --- b\n===x\n---\n");
        assert_eq!(got, vec![Entry::new("a --- b\n===x\n", Token::Record)]);
    }

    #[test]
    fn test_reader_is_lazy() {
        let mut reader = EntryReader::new(Cursor::new("A\n---\nB\n---\n"));
        let first = reader.next().unwrap().unwrap();
        assert_eq!(first.text, "A\n");

        let cursor = reader.into_inner();
        // Only the first entry's lines were consumed
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn test_reader_is_fused() {
        let mut reader = EntryReader::new(Cursor::new("A\n---\n"));
        assert!(reader.next().is_some());
        assert!(reader.next().is_none());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let mut reader = EntryReader::new(Cursor::new(vec![0xff, 0xfe, b'\n']));
        let err = reader.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_first_entry_metadata() {
        let entry = first_entry(Cursor::new("M\n===\nR\n---\n")).unwrap().unwrap();
        assert!(entry.is_metadata());
        assert_eq!(entry.text, "M\n");
    }

    #[test]
    fn test_first_entry_without_metadata_is_record() {
        let entry = first_entry(Cursor::new("R\n---\n")).unwrap().unwrap();
        assert!(!entry.is_metadata());
    }

    #[test]
    fn test_first_entry_empty_stream() {
        assert!(first_entry(Cursor::new("")).unwrap().is_none());
    }

    #[test]
    fn test_data_entries_skip_all_metadata() {
        let input = "M\n===\nA\n---\nM2\n===\nB\n---\n";
        let texts: Vec<String> = DataEntries::new(Cursor::new(input))
            .map(|e| e.unwrap().text)
            .collect();
        assert_eq!(texts, vec!["A\n", "B\n"]);
    }
}
