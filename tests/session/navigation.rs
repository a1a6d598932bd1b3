//! Cursor movement, jumps and end-of-quiz conditions.

use quizbank::{
    question_number_to_index, Advance, NavState, QuizError, QuizKind, QuizMode, QuizSession,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::*;

fn paper(mode: QuizMode) -> QuizSession {
    QuizSession::with_rng(
        fixture_set(&mechanical_2020_key()),
        QuizKind::Year,
        mode,
        StdRng::seed_from_u64(1),
    )
}

#[test]
fn test_quiz_mode_stops_at_last_question() {
    let mut session = paper(QuizMode::Quiz);
    for expected in 1..4 {
        assert_eq!(session.next(), Advance::Moved(expected));
    }
    assert_eq!(session.next(), Advance::PromptSubmit);
    assert_eq!(session.next(), Advance::PromptSubmit);
    assert_eq!(session.state(), NavState::Active(3));
}

#[test]
fn test_solution_mode_exhausts() {
    let mut session = paper(QuizMode::Solution);
    session.jump_to(3).unwrap();
    assert_eq!(session.next(), Advance::Exhausted);
    assert_eq!(session.state(), NavState::Exhausted);
    assert!(session.current().is_none());
}

#[test]
fn test_jump_then_continue() {
    let mut session = paper(QuizMode::Solution);
    session.jump_to(2).unwrap();
    assert_eq!(session.current().unwrap().text, "Hooke's law is valid up to the");
    assert_eq!(session.next(), Advance::Moved(3));
}

#[test]
fn test_jump_out_of_range_keeps_cursor() {
    let mut session = paper(QuizMode::Solution);
    session.jump_to(1).unwrap();
    assert_eq!(
        session.jump_to(4),
        Err(QuizError::IndexOutOfRange { index: 4, len: 4 })
    );
    assert_eq!(session.cursor(), 1);
}

#[test]
fn test_jump_is_relative_to_visible_list() {
    let mut session = paper(QuizMode::Solution);
    session.set_search_term("cycle");
    assert_eq!(session.visible_positions(), &[1]);
    assert!(session.jump_to(1).is_err());
    assert_eq!(session.current_position(), Some(1));
}

#[test]
fn test_filter_change_resets_cursor() {
    let mut session = paper(QuizMode::Solution);
    session.jump_to(3).unwrap();
    session.set_search_term("the");
    assert_eq!(session.cursor(), 0);

    session.next();
    session.select_chapter("All");
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.filter().search_term(), "");
}

#[test]
fn test_deep_link_from_search_record() {
    let corpus = fixture_corpus();
    let index = quizbank::build_search_index(&corpus.sets);
    let hit = quizbank::search(&index, "pelton")[0].clone();

    let session = QuizSession::from_search_hit(fixture_set(&hit.set_key()), &hit).unwrap();
    assert_eq!(session.mode(), QuizMode::Solution);
    assert_eq!(session.kind(), QuizKind::Topic);
    assert_eq!(session.cursor(), 4);
    assert_eq!(session.visible_positions(), &[0, 1, 2, 3, 4]);
}

#[test]
fn test_year_paper_opened_at_index_ignores_shuffle() {
    let key = mechanical_2020_key();
    let set = fixture_set(&key);
    let expected = set.questions[2].text.clone();

    let session = QuizSession::open_at(set, key.kind, 2).unwrap();
    assert_eq!(session.mode(), QuizMode::Solution);
    assert_eq!(session.current_position(), Some(2));
    assert_eq!(session.current().unwrap().text, expected);
    assert_eq!(session.visible_positions(), &[0, 1, 2, 3]);
}

#[test]
fn test_displayed_question_number_jumps_to_that_question() {
    let key = mechanical_2020_key();
    let set = fixture_set(&key);
    let mut session = QuizSession::new(set, key.kind, QuizMode::Solution);

    // "Question 3 of 4" is visible index 2
    session.jump_to(question_number_to_index("3").unwrap()).unwrap();
    assert_eq!(session.cursor(), 2);
    assert_eq!(question_number_to_index("0"), None);
}
