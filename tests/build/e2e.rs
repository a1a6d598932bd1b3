//! End-to-end tests for the `index` workflow.

use std::fs;
use std::path::Path;

use quizbank::build::write_snapshot;
use quizbank::{run_index, QuizError, SearchRecord};
use tempfile::TempDir;

use crate::common::*;

#[test]
fn test_run_index_writes_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out/index.json");

    let (corpus, index) = run_index(Path::new(FIXTURES_DIR), Some(&output)).unwrap();
    assert_eq!(corpus.sets.len(), 4);
    assert!(output.exists(), "snapshot should be created");

    let records: Vec<SearchRecord> =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(records.len(), index.len());
}

#[test]
fn test_snapshot_uses_type_field_name() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("index.json");
    run_index(Path::new(FIXTURES_DIR), Some(&output)).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let first = &raw[0];
    assert!(first.get("type").is_some());
    assert!(first.get("kind").is_none());
    assert_eq!(first["type"], "topic");
}

#[test]
fn test_run_index_without_output() {
    let (_, index) = run_index(Path::new(FIXTURES_DIR), None).unwrap();
    assert_eq!(index.len(), 13);
}

#[test]
fn test_unwritable_snapshot_is_write_error() {
    let temp_dir = TempDir::new().unwrap();
    // a regular file where a directory is needed
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let (_, index) = run_index(Path::new(FIXTURES_DIR), None).unwrap();
    let err = write_snapshot(&blocker.join("index.json"), &index).unwrap_err();
    assert!(matches!(err, QuizError::Write { .. }));
}
