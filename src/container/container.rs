//! File-level container operations.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::codec::{decode_payload, encode_payload, Codec, JsonCodec};
use crate::observability::{log_event_forced, Event};
use crate::reverse::ReverseLines;
use crate::stream::{first_entry, last_entry, write_entry, Token};

use super::errors::{ContainerError, ContainerResult};
use super::options::ContainerOptions;
use super::records::Records;

/// A son container file.
///
/// Holds a path, a codec and options; it never keeps a file open between
/// calls. Every operation opens the file itself and closes it on all exit
/// paths. The streaming reader owns its handle until it is dropped.
///
/// # Example
///
/// ```ignore
/// use serde_json::json;
/// use son::container::Container;
///
/// let container = Container::new("people.son");
/// container.write_metadata(&json!({"version": 1}))?;
/// container.append(&json!({"name": "Hildegard"}))?;
///
/// let (metadata, last) = container.load_last()?;
/// ```
#[derive(Debug, Clone)]
pub struct Container<C = JsonCodec> {
    path: PathBuf,
    codec: C,
    options: ContainerOptions,
}

impl Container<JsonCodec> {
    /// Container at `path` using compact JSON. No file is touched.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            codec: JsonCodec::new(),
            options: ContainerOptions::default(),
        }
    }
}

impl<C: Codec> Container<C> {
    /// Replaces the payload codec.
    pub fn with_codec<D: Codec>(self, codec: D) -> Container<D> {
        Container {
            path: self.path,
            codec,
            options: self.options,
        }
    }

    /// Replaces the options.
    pub fn with_options(mut self, options: ContainerOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the container path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the payload codec.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Returns the options.
    pub fn options(&self) -> &ContainerOptions {
        &self.options
    }

    /// Writes one entry.
    ///
    /// A metadata entry is only written into a destination that does not
    /// exist yet; otherwise `SON_CONTAINER_CONFLICT` is returned and nothing
    /// is written. Data records are always appended, creating the file if
    /// needed.
    pub fn dump(&self, value: &C::Value, is_metadata: bool) -> ContainerResult<()> {
        let text = encode_payload(&self.codec, value).map_err(|e| {
            ContainerError::encode("Failed to encode entry", e).at_path(&self.path)
        })?;

        let file = if is_metadata {
            self.create_new()?
        } else {
            self.open_append()?
        };

        let mut writer = BufWriter::new(file);
        write_entry(&mut writer, &text, Token::for_entry(is_metadata))
            .and_then(|()| writer.flush())
            .map_err(|e| ContainerError::io("Failed to write entry", e).at_path(&self.path))?;

        let event = if is_metadata {
            Event::MetadataWritten
        } else {
            Event::EntryAppended
        };
        let bytes = text.len().to_string();
        self.log(event, &[("bytes", bytes.as_str())]);

        Ok(())
    }

    /// Appends a data record.
    pub fn append(&self, value: &C::Value) -> ContainerResult<()> {
        self.dump(value, false)
    }

    /// Writes the metadata entry into a fresh container.
    pub fn write_metadata(&self, value: &C::Value) -> ContainerResult<()> {
        self.dump(value, true)
    }

    /// Reads the metadata entry, if the first entry is one.
    ///
    /// Reads at most the first entry of the file.
    pub fn metadata(&self) -> ContainerResult<Option<C::Value>> {
        let reader = self.open_read()?;

        let entry = first_entry(reader).map_err(|e| {
            ContainerError::io("Failed to read first entry", e).at_path(&self.path)
        })?;

        match entry {
            Some(entry) if entry.is_metadata() => self.decode(&entry.text),
            _ => Ok(None),
        }
    }

    /// Reads metadata and a lazy sequence of data records.
    ///
    /// Records are decoded one at a time as the sequence is pulled; the file
    /// is never loaded as a whole. Metadata entries after the first entry
    /// are skipped. An empty record yields `None` in its slot.
    pub fn stream(&self) -> ContainerResult<(Option<C::Value>, Records<'_, C>)> {
        self.log(Event::ContainerOpen, &[]);

        let metadata = self.metadata()?;
        let reader = self.open_read()?;

        Ok((metadata, Records::new(reader, &self.codec, &self.path)))
    }

    /// Reads metadata and every data record, in file order.
    ///
    /// Empty records are kept as `None`, so positions match the writes.
    pub fn load(&self) -> ContainerResult<(Option<C::Value>, Vec<Option<C::Value>>)> {
        let (metadata, records) = self.stream()?;
        let records = records.collect::<ContainerResult<Vec<_>>>()?;
        Ok((metadata, records))
    }

    /// Reads metadata and only the last data record.
    ///
    /// The file is scanned backward from its end in chunks of
    /// `options.chunk_size` bytes, so the cost follows the size of the last
    /// record rather than the size of the file.
    pub fn load_last(&self) -> ContainerResult<(Option<C::Value>, Option<C::Value>)> {
        let chunk_size = self.options.chunk_size.to_string();
        self.log(Event::ReadLast, &[("chunk_size", chunk_size.as_str())]);

        let metadata = self.metadata()?;

        let file = File::open(&self.path).map_err(|e| self.open_failed(e))?;
        let lines = ReverseLines::with_chunk_size(file, self.options.chunk_size).map_err(|e| {
            ContainerError::io("Failed to start reverse scan", e).at_path(&self.path)
        })?;

        let text = last_entry(lines).map_err(|e| {
            ContainerError::io("Failed to read last entry", e).at_path(&self.path)
        })?;

        let last = match text {
            Some(text) => self.decode(&text)?,
            None => None,
        };

        Ok((metadata, last))
    }

    fn decode(&self, text: &str) -> ContainerResult<Option<C::Value>> {
        decode_payload(&self.codec, text)
            .map_err(|e| ContainerError::decode("Failed to decode entry", e).at_path(&self.path))
    }

    fn open_read(&self) -> ContainerResult<BufReader<File>> {
        File::open(&self.path)
            .map(BufReader::new)
            .map_err(|e| self.open_failed(e))
    }

    fn open_append(&self) -> ContainerResult<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.open_failed(e))
    }

    /// Creates the file, refusing any existing destination.
    fn create_new(&self) -> ContainerResult<File> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .map_err(|e| {
                if e.kind() == io::ErrorKind::AlreadyExists {
                    self.log(Event::MetadataConflict, &[]);
                    ContainerError::conflict(&self.path)
                } else {
                    self.open_failed(e)
                }
            })
    }

    fn open_failed(&self, e: io::Error) -> ContainerError {
        ContainerError::io("Failed to open container", e).at_path(&self.path)
    }

    fn log(&self, event: Event, fields: &[(&str, &str)]) {
        let path = self.path.display().to_string();
        let mut all = Vec::with_capacity(fields.len() + 1);
        all.push(("path", path.as_str()));
        all.extend_from_slice(fields);
        log_event_forced(event, &all, self.options.verbose);
    }
}
