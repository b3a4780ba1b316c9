//! Chunked reverse line iterator.

use std::collections::VecDeque;
use std::io::{self, Read, Seek, SeekFrom};

/// Default number of bytes read per refill.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Yields the lines of a seekable stream, last line first.
///
/// The stream is read backward from its end, one chunk at a time. Each
/// yielded line keeps its trailing `\n` exactly as stored; only the final
/// line of a stream may lack one. Concatenating the yielded lines in
/// reverse order reproduces the stream.
///
/// UTF-8 is validated per complete line, so a chunk boundary splitting a
/// multi-byte character is harmless. A line that is not valid UTF-8 is
/// reported as `InvalidData` and ends the iteration.
pub struct ReverseLines<R> {
    reader: R,
    chunk_size: usize,
    /// Bytes before this offset have not been read yet
    position: u64,
    /// Chunks of a line whose start lies before `position`, in file order
    carry: VecDeque<Vec<u8>>,
    /// Complete lines in file order; popped from the back
    ready: Vec<Vec<u8>>,
    /// Bytes joined into complete lines so far
    assembled: u64,
    done: bool,
}

impl<R: Read + Seek> ReverseLines<R> {
    /// Creates an iterator using [`DEFAULT_CHUNK_SIZE`].
    pub fn new(reader: R) -> io::Result<Self> {
        Self::with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
    }

    /// Creates an iterator reading `chunk_size` bytes per refill.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `chunk_size` is zero; any error from seeking to the
    /// end of the stream.
    pub fn with_chunk_size(mut reader: R, chunk_size: usize) -> io::Result<Self> {
        if chunk_size == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "chunk size must be greater than zero",
            ));
        }

        let position = reader.seek(SeekFrom::End(0))?;

        Ok(Self {
            reader,
            chunk_size,
            position,
            carry: VecDeque::new(),
            ready: Vec::new(),
            assembled: 0,
            done: false,
        })
    }

    /// Returns the chunk size in bytes.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the offset below which nothing has been read yet.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns the number of bytes joined into complete lines so far.
    ///
    /// Every byte is joined once, so after a full pass this equals the
    /// stream length.
    pub fn bytes_assembled(&self) -> u64 {
        self.assembled
    }

    /// Reads the chunk ending at `position` and moves every line whose start
    /// is now known into `ready`.
    ///
    /// Only the new chunk is searched for a newline. Carried chunks hold no
    /// line start and are joined once, when the start of their line is found.
    fn refill(&mut self) -> io::Result<()> {
        let start = self.position.saturating_sub(self.chunk_size as u64);
        let len = (self.position - start) as usize;

        let mut chunk = vec![0u8; len];
        self.reader.seek(SeekFrom::Start(start))?;
        self.reader.read_exact(&mut chunk)?;
        self.position = start;

        // A line is complete once the byte before it is a newline, or it
        // starts at offset zero.
        let split_at = if self.position == 0 {
            0
        } else {
            match chunk.iter().position(|&b| b == b'\n') {
                Some(i) => i + 1,
                None => {
                    self.carry.push_front(chunk);
                    return Ok(());
                }
            }
        };

        let mut complete = chunk.split_off(split_at);
        for piece in self.carry.drain(..) {
            complete.extend_from_slice(&piece);
        }
        if !chunk.is_empty() {
            self.carry.push_back(chunk);
        }

        self.assembled += complete.len() as u64;
        self.ready.extend(
            complete
                .split_inclusive(|&b| b == b'\n')
                .map(|line| line.to_vec()),
        );

        Ok(())
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(line) = self.ready.pop() {
                let line = String::from_utf8(line)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                return Ok(Some(line));
            }

            if self.position == 0 {
                return Ok(None);
            }

            self.refill()?;
        }
    }
}

impl<R: Read + Seek> Iterator for ReverseLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_line() {
            Ok(Some(line)) => Some(Ok(line)),
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
