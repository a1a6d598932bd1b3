//! The published index under rebuilds and concurrent readers.

use std::sync::Arc;
use std::thread;

use quizbank::{QuizError, SharedIndex};

use crate::common::*;

#[test]
fn test_not_ready_until_published() {
    let shared = SharedIndex::new();
    assert!(!shared.is_ready());
    assert_eq!(shared.generation(), 0);
    assert_eq!(shared.search("pascal"), Err(QuizError::IndexNotReady));
    assert!(QuizError::IndexNotReady.is_retryable());
}

#[test]
fn test_rebuild_replaces_generation() {
    let shared = SharedIndex::new();
    assert_eq!(shared.rebuild(&fixture_corpus().sets), 1);
    assert_eq!(shared.search("pascal").unwrap().len(), 1);

    let replacement = single_set(
        "hydraulics",
        make_set("Hydraulics", vec![make_question("Pascal's triangle is not hydraulics", "A", "Misc")]),
    );
    assert_eq!(shared.rebuild(&replacement), 2);

    let hits = shared.search("pascal").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].key, "hydraulics");
}

#[test]
fn test_old_snapshot_survives_rebuild() {
    let shared = SharedIndex::new();
    shared.rebuild(&fixture_corpus().sets);
    let before = shared.snapshot().unwrap();

    shared.rebuild(&single_set("empty", make_set("Empty", vec![])));
    assert_eq!(before.len(), 13);
    assert!(shared.snapshot().unwrap().is_empty());
}

#[test]
fn test_readers_see_whole_generations() {
    let corpus = fixture_corpus();
    let shared = Arc::new(SharedIndex::new());
    shared.rebuild(&corpus.sets);

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..200 {
                    let len = shared.snapshot().map(|s| s.len()).unwrap_or(0);
                    assert!(len == 13 || len == 1, "saw partial index of {}", len);
                }
            })
        })
        .collect();

    let small = single_set("one", make_set("One", vec![make_question("q", "A", "c")]));
    for i in 0..20 {
        if i % 2 == 0 {
            shared.rebuild(&small);
        } else {
            shared.rebuild(&corpus.sets);
        }
    }

    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(shared.generation(), 21);
}
