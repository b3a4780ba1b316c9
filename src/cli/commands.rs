//! CLI command implementations
//!
//! Each command opens the container, performs one operation, writes its
//! result to stdout and exits. Diagnostics go to stderr.

use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::{json, Value};

use crate::codec::JsonCodec;
use crate::container::Container;
use crate::observability;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::CliResult;
use super::io::{read_stdin_values, read_values, write_line, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    config.options.verbose |= cli.verbose;
    observability::set_verbose(config.options.verbose);

    run_command(cli.command, &config)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command, config: &Config) -> CliResult<()> {
    match cmd {
        Command::Write {
            file,
            metadata,
            indent,
        } => {
            let written = write(&file, metadata, indent, config, read_stdin_values())?;
            write_response(json!({ "written": written }))
        }
        Command::Read { file } => read(&file, config),
        Command::Stream { file } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            stream(&file, config, &mut out)?;
            out.flush()?;
            Ok(())
        }
        Command::Last { file, chunk_size } => last(&file, chunk_size, config),
        Command::Meta { file } => meta(&file, config),
    }
}

fn container(file: &Path, config: &Config) -> Container {
    Container::new(file).with_options(config.options.clone())
}

/// Write values to a container
///
/// With `metadata`, the first value becomes the metadata entry and the
/// container must not exist yet. Returns the number of entries written.
pub fn write<I>(
    file: &Path,
    metadata: bool,
    indent: Option<usize>,
    config: &Config,
    values: I,
) -> CliResult<usize>
where
    I: IntoIterator<Item = CliResult<Value>>,
{
    let codec: JsonCodec = match indent.or(config.indent) {
        Some(width) => JsonCodec::pretty(width),
        None => JsonCodec::new(),
    };
    let container = container(file, config).with_codec(codec);

    let mut written = 0;
    for value in values {
        let value = value?;
        container.dump(&value, metadata && written == 0)?;
        written += 1;
    }

    Ok(written)
}

/// Print metadata and every record as one response
pub fn read(file: &Path, config: &Config) -> CliResult<()> {
    let (metadata, records) = container(file, config).load()?;
    write_response(json!({ "metadata": metadata, "records": records }))
}

/// Print metadata, then one record per line, reading lazily
pub fn stream<W: Write>(file: &Path, config: &Config, out: &mut W) -> CliResult<()> {
    let container = container(file, config);
    let (metadata, records) = container.stream()?;

    if let Some(metadata) = metadata {
        write_line(out, &json!({ "metadata": metadata }))?;
    }

    for record in records {
        write_line(out, &record?)?;
    }

    Ok(())
}

/// Print metadata and the last record
pub fn last(file: &Path, chunk_size: Option<usize>, config: &Config) -> CliResult<()> {
    let mut config = config.clone();
    if let Some(chunk_size) = chunk_size {
        config.options.chunk_size = chunk_size;
    }

    let (metadata, last) = container(file, &config).load_last()?;
    write_response(json!({ "metadata": metadata, "last": last }))
}

/// Print metadata only
pub fn meta(file: &Path, config: &Config) -> CliResult<()> {
    let metadata = container(file, config).metadata()?;
    write_response(json!({ "metadata": metadata }))
}

/// Write values parsed from any reader; used by tests and embedding tools
pub fn write_from_reader<R: Read>(
    file: &Path,
    metadata: bool,
    indent: Option<usize>,
    config: &Config,
    reader: R,
) -> CliResult<usize> {
    write(file, metadata, indent, config, read_values(reader))
}
