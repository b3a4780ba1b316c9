//! CLI module for son
//!
//! Provides command-line interface for:
//! - write: append JSON values from stdin
//! - read: print metadata and all records
//! - stream: print records lazily, one per line
//! - last: print metadata and the last record
//! - meta: print metadata

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{last, meta, read, run, run_command, stream, write, write_from_reader};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_values, write_line, write_response};
