//! Last-record extraction from lines delivered last-first.
//!
//! The first record delimiter seen from the end closes the target entry.
//! Collection stops at the next delimiter of either kind, which closed the
//! previous entry, or when the lines run out (the target is the first
//! entry of the stream). Anything after the final record delimiter is
//! ignored.
//!
//! The extractor does not know how the lines were produced; see
//! [`crate::reverse::ReverseLines`] for the chunked file reader.

use std::io;

use super::delimiter::{delimiter_line, Token};

/// Reconstructs the raw text of the last data record.
///
/// `lines` must yield the stream's lines in reverse order. Returns
/// `Ok(None)` when no record delimiter was found.
pub fn last_entry<I>(lines: I) -> io::Result<Option<String>>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut collecting = false;
    let mut collected: Vec<String> = Vec::new();

    for line in lines {
        let line = line?;

        if !collecting {
            if line == delimiter_line(Token::Record) {
                collecting = true;
            }
            continue;
        }

        if Token::from_line(&line).is_some() {
            break;
        }

        let mut restored = line.trim_start_matches('\n').trim_end_matches('\n').to_string();
        restored.push('\n');
        collected.push(restored);
    }

    if !collecting {
        return Ok(None);
    }

    Ok(Some(collected.into_iter().rev().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lines of `input`, newline kept, last line first.
    fn reversed(input: &str) -> Vec<io::Result<String>> {
        input
            .split_inclusive('\n')
            .rev()
            .map(|l| Ok(l.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_stream_is_none() {
        assert_eq!(last_entry(reversed("")).unwrap(), None);
    }

    #[test]
    fn test_single_record() {
        assert_eq!(
            last_entry(reversed("{\"a\":1}\n---\n")).unwrap(),
            Some("{\"a\":1}\n".to_string())
        );
    }

    #[test]
    fn test_stops_at_previous_record() {
        let input = "A\n---\nB1\nB2\n---\n";
        assert_eq!(last_entry(reversed(input)).unwrap(), Some("B1\nB2\n".to_string()));
    }

    #[test]
    fn test_stops_at_metadata() {
        let input = "M\n===\nA\n---\n";
        assert_eq!(last_entry(reversed(input)).unwrap(), Some("A\n".to_string()));
    }

    #[test]
    fn test_metadata_only_is_none() {
        assert_eq!(last_entry(reversed("M\n===\n")).unwrap(), None);
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        let input = "A\n---\nB\n---\npartial\nwrite";
        assert_eq!(last_entry(reversed(input)).unwrap(), Some("B\n".to_string()));
    }

    #[test]
    fn test_blank_lines_in_text_are_kept() {
        let input = "A\n---\nx\n\ny\n\n---\n";
        assert_eq!(
            last_entry(reversed(input)).unwrap(),
            Some("x\n\ny\n\n".to_string())
        );
    }

    #[test]
    fn test_leading_newline_artifacts_stripped() {
        let lines = vec![
            Ok("---\n".to_string()),
            Ok("\nB\n".to_string()),
            Ok("---\n".to_string()),
        ];
        assert_eq!(last_entry(lines).unwrap(), Some("B\n".to_string()));
    }

    #[test]
    fn test_empty_record_is_some_empty() {
        assert_eq!(last_entry(reversed("A\n---\n---\n")).unwrap(), Some(String::new()));
    }

    #[test]
    fn test_line_error_propagates() {
        let lines = vec![
            Ok("---\n".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad bytes")),
        ];
        let err = last_entry(lines).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
