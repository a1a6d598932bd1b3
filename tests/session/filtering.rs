//! Chapter and keyword filtering through a live session.

use quizbank::{apply_filters, QuizKind, QuizMode, QuizSession};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::*;

fn fluids(mode: QuizMode) -> QuizSession {
    QuizSession::with_rng(
        fixture_set(&fluid_mechanics_key()),
        QuizKind::Topic,
        mode,
        StdRng::seed_from_u64(42),
    )
}

#[test]
fn test_starts_with_all_in_order() {
    let session = fluids(QuizMode::Solution);
    assert_eq!(session.filter().chapter(), "All");
    assert_eq!(session.filter().search_term(), "");
    assert_eq!(session.visible_positions(), &[0, 1, 2, 3, 4]);
}

#[test]
fn test_chapter_filter() {
    let mut session = fluids(QuizMode::Solution);
    session.select_chapter("Fluid Dynamics");
    assert_eq!(session.visible_positions(), &[2, 3]);

    let texts: Vec<&str> = session.visible_questions().map(|q| q.text.as_str()).collect();
    assert!(texts[0].starts_with("Bernoulli"));
}

#[test]
fn test_keyword_searches_explanations_too() {
    let mut session = fluids(QuizMode::Solution);
    session.set_search_term("NOZZLE");
    assert_eq!(session.visible_positions(), &[4]);
}

#[test]
fn test_keyword_keeps_chapter() {
    let mut session = fluids(QuizMode::Solution);
    session.select_chapter("Fluid Statics");
    session.set_search_term("centroid");
    assert_eq!(session.filter().chapter(), "Fluid Statics");
    assert_eq!(session.visible_positions(), &[1]);
}

#[test]
fn test_blank_keyword_is_no_filter() {
    let mut session = fluids(QuizMode::Solution);
    session.set_search_term("   ");
    assert_eq!(session.visible_positions().len(), 5);
}

#[test]
fn test_declared_but_empty_chapter_shows_nothing() {
    let mut session = fluids(QuizMode::Solution);
    session.select_chapter("Compressible Flow");
    assert!(session.visible_positions().is_empty());
    assert!(session.current().is_none());
}

#[test]
fn test_quiz_mode_shuffles_within_filter() {
    let set = fixture_set(&mechanical_2020_key());
    let mut visible = apply_filters(
        &set.questions,
        "All",
        "",
        QuizMode::Quiz,
        &mut StdRng::seed_from_u64(3),
    );
    visible.sort_unstable();
    assert_eq!(visible, vec![0, 1, 2, 3]);
}

#[test]
fn test_same_seed_same_order() {
    let set = fixture_set(&mechanical_2020_key());
    let a = apply_filters(&set.questions, "All", "", QuizMode::Quiz, &mut StdRng::seed_from_u64(9));
    let b = apply_filters(&set.questions, "All", "", QuizMode::Quiz, &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}

#[test]
fn test_chapter_counts_for_topic_set() {
    let session = fluids(QuizMode::Solution);
    let counts: Vec<(String, usize)> = session
        .chapter_counts()
        .into_iter()
        .map(|c| (c.chapter, c.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("All".to_string(), 5),
            ("Fluid Statics".to_string(), 2),
            ("Fluid Dynamics".to_string(), 2),
            ("Turbomachinery".to_string(), 1),
        ]
    );
}

#[test]
fn test_chapter_counts_for_year_set() {
    let session = QuizSession::year(fixture_set(&mechanical_2020_key()), QuizMode::Quiz);
    let counts = session.chapter_counts();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].count, 4);
}
