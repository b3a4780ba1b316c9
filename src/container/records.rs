//! Lazy record sequence over an open container file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::codec::{decode_payload, Codec};
use crate::stream::DataEntries;

use super::errors::{ContainerError, ContainerResult};

/// Data records of a container, decoded as they are pulled.
///
/// Owns the open file; dropping the sequence closes it, whether or not it
/// was read to the end. An empty record keeps its slot and yields `None`.
/// The sequence stops after the first error and cannot be restarted.
pub struct Records<'a, C: Codec> {
    entries: DataEntries<BufReader<File>>,
    codec: &'a C,
    path: &'a Path,
    failed: bool,
}

impl<'a, C: Codec> Records<'a, C> {
    pub(super) fn new(reader: BufReader<File>, codec: &'a C, path: &'a Path) -> Self {
        Self {
            entries: DataEntries::new(reader),
            codec,
            path,
            failed: false,
        }
    }
}

impl<'a, C: Codec> Iterator for Records<'a, C> {
    type Item = ContainerResult<Option<C::Value>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let entry = match self.entries.next()? {
            Ok(entry) => entry,
            Err(e) => {
                self.failed = true;
                return Some(Err(
                    ContainerError::io("Failed to read entry", e).at_path(self.path)
                ));
            }
        };

        let value = decode_payload(self.codec, &entry.text).map_err(|e| {
            self.failed = true;
            ContainerError::decode("Failed to decode record", e).at_path(self.path)
        });
        Some(value)
    }
}
