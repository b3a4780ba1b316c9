//! CLI argument definitions using clap
//!
//! Commands:
//! - son write <file> [--metadata] [--indent N]
//! - son read <file>
//! - son stream <file>
//! - son last <file> [--chunk-size N]
//! - son meta <file>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// son - append-friendly, line-framed record containers
#[derive(Parser, Debug)]
#[command(name = "son")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log container operations to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append JSON values read from stdin
    Write {
        /// Container file
        file: PathBuf,

        /// Write the first value as metadata (file must not exist)
        #[arg(long)]
        metadata: bool,

        /// Indent written JSON by this many spaces
        #[arg(long)]
        indent: Option<usize>,
    },

    /// Print metadata and all records
    Read {
        /// Container file
        file: PathBuf,
    },

    /// Print records one per line without loading the whole file
    Stream {
        /// Container file
        file: PathBuf,
    },

    /// Print metadata and the last record
    Last {
        /// Container file
        file: PathBuf,

        /// Bytes read per step of the backward scan
        #[arg(long)]
        chunk_size: Option<usize>,
    },

    /// Print metadata only
    Meta {
        /// Container file
        file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
