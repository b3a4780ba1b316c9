//! Last-Record Tests
//!
//! `load_last` must return the most recently written record for any file
//! size and any reverse-scan chunk size, including chunks smaller than the
//! last record.

use proptest::prelude::*;
use serde_json::{json, Value};
use son::codec::JsonCodec;
use son::container::{Container, ContainerOptions};
use son::reverse::ReverseLines;
use son::stream::last_entry;
use std::fs::{self, File};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

fn with_chunk_size(container: Container, chunk_size: usize) -> Container {
    container.with_options(ContainerOptions {
        chunk_size,
        ..ContainerOptions::default()
    })
}

// =============================================================================
// Chunk Sizes
// =============================================================================

#[test]
fn test_chunk_smaller_and_larger_than_last_record() {
    let temp_dir = create_temp_dir();
    let path = temp_dir.path().join("chunks.son");
    let writer = Container::new(&path);

    writer.write_metadata(&json!({"v": 1})).unwrap();
    writer.append(&json!({"a": 1})).unwrap();
    let big = json!({ "blob": "y".repeat(500) });
    writer.append(&big).unwrap();

    for chunk_size in [1, 3, 16, 100, 511, 512, 8192, 1 << 20] {
        let reader = with_chunk_size(Container::new(&path), chunk_size);
        let (metadata, last) = reader.load_last().unwrap();
        assert_eq!(metadata, Some(json!({"v": 1})), "chunk_size={}", chunk_size);
        assert_eq!(last, Some(big.clone()), "chunk_size={}", chunk_size);
    }
}

#[test]
fn test_multi_megabyte_single_line_record() {
    let temp_dir = create_temp_dir();
    let path = temp_dir.path().join("wide.son");
    let writer = Container::new(&path);

    writer.append(&json!({"small": true})).unwrap();
    let wide = json!({ "blob": "w".repeat(2 * 1024 * 1024) });
    writer.append(&wide).unwrap();

    let reader = with_chunk_size(Container::new(&path), 256);
    let (_, last) = reader.load_last().unwrap();
    assert_eq!(last, Some(wide));
}

#[test]
fn test_reverse_scan_joins_each_byte_once() {
    let temp_dir = create_temp_dir();
    let path = temp_dir.path().join("joined.son");
    Container::new(&path)
        .append(&json!("v".repeat(100_000)))
        .unwrap();
    let len = fs::metadata(&path).unwrap().len();

    let mut lines = ReverseLines::with_chunk_size(File::open(&path).unwrap(), 64).unwrap();
    for line in lines.by_ref() {
        line.unwrap();
    }
    assert_eq!(lines.bytes_assembled(), len);
}

#[test]
fn test_single_record_without_metadata() {
    let temp_dir = create_temp_dir();
    let container = with_chunk_size(Container::new(temp_dir.path().join("one.son")), 4);

    container.append(&json!("only")).unwrap();
    assert_eq!(container.load_last().unwrap(), (None, Some(json!("only"))));
}

#[test]
fn test_metadata_only_has_no_last() {
    let temp_dir = create_temp_dir();
    let container = Container::new(temp_dir.path().join("meta.son"));

    container.write_metadata(&json!({"v": 2})).unwrap();
    assert_eq!(container.load_last().unwrap(), (Some(json!({"v": 2})), None));
}

#[test]
fn test_pretty_multiline_last_record() {
    let temp_dir = create_temp_dir();
    let container = with_chunk_size(
        Container::new(temp_dir.path().join("pretty.son")).with_codec(JsonCodec::<Value>::pretty(4)),
        7,
    );

    container.append(&json!({"a": [1, 2, 3]})).unwrap();
    container.append(&json!({"b": {"c": [true, null]}})).unwrap();

    let (_, last) = container.load_last().unwrap();
    assert_eq!(last, Some(json!({"b": {"c": [true, null]}})));
}

#[test]
fn test_trailing_partial_entry_is_ignored() {
    let temp_dir = create_temp_dir();
    let path = temp_dir.path().join("partial.son");
    fs::write(&path, "1\n---\n2\n---\n{\"unterminated\":").unwrap();

    let (_, last) = Container::new(&path).load_last().unwrap();
    assert_eq!(last, Some(json!(2)));
}

#[test]
fn test_reverse_lines_feed_extractor() {
    let temp_dir = create_temp_dir();
    let path = temp_dir.path().join("raw.son");
    fs::write(&path, "head\n===\nfirst\n---\nsecond\nline\n---\n").unwrap();

    let lines = ReverseLines::with_chunk_size(File::open(&path).unwrap(), 5).unwrap();
    assert_eq!(last_entry(lines).unwrap(), Some("second\nline\n".to_string()));
}

// =============================================================================
// Last-Record Property
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_last_matches_last_write(
        records in prop::collection::vec(".{0,300}", 1..30),
        with_metadata in any::<bool>(),
        chunk_size in 1usize..1024,
    ) {
        let temp_dir = create_temp_dir();
        let container = with_chunk_size(
            Container::new(temp_dir.path().join("prop.son")),
            chunk_size,
        );

        if with_metadata {
            container.write_metadata(&json!({"count": records.len()})).unwrap();
        }
        for record in &records {
            container.append(&Value::from(record.as_str())).unwrap();
        }

        let (_, last) = container.load_last().unwrap();
        let expected = records.last().map(|r| Value::from(r.as_str()));
        prop_assert_eq!(last, expected);

        let (_, all) = container.load().unwrap();
        prop_assert_eq!(all.last().cloned().flatten(), container.load_last().unwrap().1);
    }
}
