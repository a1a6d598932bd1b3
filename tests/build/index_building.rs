//! Building the search index from a loaded corpus.

use quizbank::{build_search_index, QuizKind};

use crate::common::*;

#[test]
fn test_one_record_per_question() {
    let corpus = fixture_corpus();
    let index = build_search_index(&corpus.sets);
    assert_eq!(index.len(), corpus.question_count());
    assert_eq!(index.set_count(), 4);
}

#[test]
fn test_records_point_back_into_their_sets() {
    let corpus = fixture_corpus();
    let index = build_search_index(&corpus.sets);

    for record in index.records() {
        let set = &corpus.sets[&record.set_key()];
        assert_eq!(set.title, record.title);
        assert_eq!(set.questions[record.index].text, record.question);
        assert_eq!(set.questions[record.index].explanation_text(), record.explanation);
    }
}

#[test]
fn test_build_order_is_set_key_then_position() {
    let corpus = fixture_corpus();
    let index = build_search_index(&corpus.sets);
    let records = index.records();

    // general/... sorts before isro/..., topic before year
    assert_eq!(records[0].exam, "general");
    assert_eq!(records.last().unwrap().kind, QuizKind::Year);

    let fluids: Vec<usize> = records
        .iter()
        .filter(|r| r.key == "fluid_mechanics")
        .map(|r| r.index)
        .collect();
    assert_eq!(fluids, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_empty_set_contributes_nothing() {
    let sets = single_set("empty", make_set("Empty", vec![]));
    let index = build_search_index(&sets);
    assert!(index.is_empty());
    assert_eq!(index.set_count(), 0);
}

#[test]
fn test_rebuild_is_deterministic() {
    let corpus = fixture_corpus();
    let a = build_search_index(&corpus.sets);
    let b = build_search_index(&corpus.sets);
    assert_eq!(a.records(), b.records());
}
