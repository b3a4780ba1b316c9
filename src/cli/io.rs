//! JSON I/O handling for CLI
//!
//! - Input: a stream of JSON values via stdin, whitespace separated
//! - Output: JSON objects via stdout, one per line
//! - UTF-8 only

use std::io::{self, Read, Write};

use serde::Serialize;
use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read JSON values from a reader, one at a time
pub fn read_values<R: Read>(reader: R) -> impl Iterator<Item = CliResult<Value>> {
    serde_json::Deserializer::from_reader(reader)
        .into_iter::<Value>()
        .map(|value| {
            value.map_err(|e| CliError::input_error(format!("Invalid JSON value on stdin: {}", e)))
        })
}

/// Read JSON values from stdin
pub fn read_stdin_values() -> impl Iterator<Item = CliResult<Value>> {
    read_values(io::stdin().lock())
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_line(&mut out, &response)?;
    out.flush()?;

    Ok(())
}

/// Write one compact JSON value followed by a newline
pub fn write_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *out, value)
        .map_err(|e| CliError::output_error(format!("Failed to serialize result: {}", e)))?;
    writeln!(out)?;
    Ok(())
}
