//! Search results over the fixture bank.

use quizbank::{build_search_index, search, QuizKind, SearchIndex};

use crate::common::*;

fn fixture_index() -> SearchIndex {
    build_search_index(&fixture_corpus().sets)
}

fn hits(index: &SearchIndex, query: &str) -> Vec<(String, usize)> {
    search(index, query)
        .into_iter()
        .map(|r| (r.key.clone(), r.index))
        .collect()
}

#[test]
fn test_matches_text_or_explanation() {
    let index = fixture_index();
    // #0 by its text, #2 only through its explanation
    assert_eq!(
        hits(&index, "thermodynamics"),
        vec![("thermodynamics".to_string(), 0), ("thermodynamics".to_string(), 2)]
    );
}

#[test]
fn test_results_follow_index_order() {
    let index = fixture_index();
    let found = search(&index, "cycle");
    assert_eq!(found.len(), 2);
    assert_eq!((found[0].key.as_str(), found[0].kind), ("thermodynamics", QuizKind::Topic));
    assert_eq!((found[1].key.as_str(), found[1].kind), ("mechanical_2020", QuizKind::Year));
    assert_eq!(found[1].index, 1);
}

#[test]
fn test_case_insensitive() {
    let index = fixture_index();
    assert_eq!(hits(&index, "PASCAL"), hits(&index, "pascal"));
    assert_eq!(hits(&index, "pascal"), vec![("fluid_mechanics".to_string(), 0)]);
}

#[test]
fn test_query_is_trimmed() {
    let index = fixture_index();
    assert_eq!(hits(&index, "  benchmark "), vec![("surveying".to_string(), 0)]);
}

#[test]
fn test_empty_query_matches_nothing() {
    let index = fixture_index();
    assert!(search(&index, "").is_empty());
    assert!(search(&index, " \t ").is_empty());
}

#[test]
fn test_no_match() {
    assert!(search(&fixture_index(), "photosynthesis").is_empty());
}

#[test]
fn test_chapter_names_are_not_searched() {
    // "Turbomachinery" only appears as a chapter
    assert!(search(&fixture_index(), "turbomachinery").is_empty());
}

#[test]
fn test_record_carries_deep_link() {
    let index = fixture_index();
    let record = search(&index, "benchmark")[0];
    assert_eq!(record.exam, "general");
    assert_eq!(record.branch, "civil");
    assert_eq!(record.title, "Surveying");
    assert_eq!(record.set_key(), surveying_key());
}

#[test]
fn test_missing_explanation_searches_as_empty() {
    let index = fixture_index();
    let reynolds = search(&index, "reynolds");
    assert_eq!(reynolds.len(), 1);
    assert_eq!(reynolds[0].explanation, "");
}
