//! Container read/write options

use serde::{Deserialize, Serialize};

use crate::reverse::DEFAULT_CHUNK_SIZE;

/// Options shared by every operation on a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerOptions {
    /// Bytes read per step when scanning backward for the last record
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Log INFO events for container operations
    #[serde(default)]
    pub verbose: bool,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            verbose: false,
        }
    }
}

impl ContainerOptions {
    /// Validates option values.
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be > 0".to_string());
        }
        Ok(())
    }
}
