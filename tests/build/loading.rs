//! Discovery and corpus loading against the fixture trees.

use std::fs;
use std::path::Path;

use quizbank::{discover, load_catalog, load_corpus, load_set, QuizError, QuizKind, SetKey};
use tempfile::TempDir;

use crate::common::*;

#[test]
fn test_discover_classifies_sets_and_list_files() {
    let found = discover(Path::new(FIXTURES_DIR)).unwrap();

    let mut keys: Vec<String> = found.sets.iter().map(|f| f.key.to_string()).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "general/civil/topic/surveying",
            "isro/mechanical/topic/fluid_mechanics",
            "isro/mechanical/topic/thermodynamics",
            "isro/mechanical/year/mechanical_2020",
        ]
    );
    assert_eq!(found.catalogs.len(), 2);
    assert!(found.ignored.is_empty());
}

#[test]
fn test_list_files_never_become_sets() {
    let corpus = fixture_corpus();
    assert!(corpus.sets.keys().all(|k| k.key != "subjects" && k.key != "years"));
}

#[test]
fn test_corpus_counts() {
    let corpus = fixture_corpus();
    assert_eq!(corpus.sets.len(), 4);
    assert_eq!(corpus.question_count(), 13);
    assert!(corpus.skipped.is_empty());
}

#[test]
fn test_year_set_has_no_declared_chapters() {
    let set = fixture_set(&mechanical_2020_key());
    assert!(set.chapters.is_none());
    assert_eq!(set.title, "ISRO Mechanical 2020");
}

#[test]
fn test_explanation_null_loads_as_none() {
    let set = fixture_set(&fluid_mechanics_key());
    assert_eq!(set.questions[3].explanation, None);
    assert_eq!(set.questions[3].explanation_text(), "");
}

#[test]
fn test_load_set_by_address() {
    let set = load_set(Path::new(FIXTURES_DIR), &thermodynamics_key()).unwrap();
    assert_eq!(set.len(), 3);
}

#[test]
fn test_load_legacy_set_by_address() {
    let set = load_set(Path::new(FIXTURES_DIR), &surveying_key()).unwrap();
    assert_eq!(set.title, "Surveying");
}

#[test]
fn test_missing_set_is_data_unavailable() {
    let key = SetKey::new("isro", "mechanical", QuizKind::Year, "mechanical_1999");
    let err = load_set(Path::new(FIXTURES_DIR), &key).unwrap_err();
    assert!(matches!(err, QuizError::DataUnavailable { .. }));
    assert!(!err.is_retryable());
}

#[test]
fn test_load_catalog() {
    let subjects = load_catalog(Path::new(FIXTURES_DIR), "isro", "mechanical", QuizKind::Topic).unwrap();
    let keys: Vec<&str> = subjects.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["fluid_mechanics", "thermodynamics"]);

    let years = load_catalog(Path::new(FIXTURES_DIR), "isro", "mechanical", QuizKind::Year).unwrap();
    assert_eq!(years[0].title, "ISRO Mechanical 2020");
}

#[test]
fn test_missing_catalog_is_data_unavailable() {
    assert!(matches!(
        load_catalog(Path::new(FIXTURES_DIR), "gate", "civil", QuizKind::Year),
        Err(QuizError::DataUnavailable { .. })
    ));
}

#[test]
fn test_broken_file_is_skipped() {
    let corpus = load_corpus(Path::new(INVALID_FIXTURES_DIR)).unwrap();
    assert_eq!(corpus.sets.len(), 1);
    // civil_2018.json does not parse; the empty subjects.json parses fine
    assert_eq!(corpus.skipped.len(), 1);
    assert!(corpus.skipped[0].path.ends_with("civil_2018.json"));
}

#[test]
fn test_unexpected_depth_is_ignored() {
    let dir = TempDir::new().unwrap();
    let deep = dir.path().join("quizzes/a/b/c");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("set.json"), "{}").unwrap();
    fs::write(dir.path().join("quizzes/orphan.json"), "{}").unwrap();

    let found = discover(dir.path()).unwrap();
    assert!(found.sets.is_empty());
    assert_eq!(found.ignored.len(), 2);
}

#[test]
fn test_missing_data_root_is_an_error() {
    assert!(load_corpus(Path::new("data/does-not-exist")).is_err());
}
