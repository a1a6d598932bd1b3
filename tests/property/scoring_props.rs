//! Score calculation invariants.

use proptest::prelude::*;
use quizbank::{score, DEFAULT_PENALTY};

use crate::common::answers;
use crate::{answer_sheet_strategy, questions_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every question lands in exactly one bucket.
    #[test]
    fn prop_counts_partition_questions(
        (questions, sheet) in questions_strategy()
            .prop_flat_map(|qs| { let n = qs.len(); (Just(qs), answer_sheet_strategy(n)) })
    ) {
        let report = score(&questions, &sheet, DEFAULT_PENALTY);
        prop_assert_eq!(report.question_count(), questions.len());
        prop_assert_eq!(report.unattempted, sheet.iter().filter(|a| a.is_none()).count());
    }

    /// Scoring does not depend on anything but its inputs.
    #[test]
    fn prop_score_is_idempotent(
        (questions, sheet) in questions_strategy()
            .prop_flat_map(|qs| { let n = qs.len(); (Just(qs), answer_sheet_strategy(n)) })
    ) {
        prop_assert_eq!(
            score(&questions, &sheet, DEFAULT_PENALTY),
            score(&questions, &sheet, DEFAULT_PENALTY)
        );
    }

    /// total = correct - incorrect × penalty, for any penalty in range.
    #[test]
    fn prop_total_formula(
        (questions, sheet) in questions_strategy()
            .prop_flat_map(|qs| { let n = qs.len(); (Just(qs), answer_sheet_strategy(n)) }),
        penalty in 0.0f64..=1.0
    ) {
        let report = score(&questions, &sheet, penalty);
        let expected = report.correct as f64 - report.incorrect as f64 * penalty;
        prop_assert!((report.total - expected).abs() < 1e-9);
        prop_assert!(report.total <= report.correct as f64);
    }

    /// Answers past the end of the question list are ignored.
    #[test]
    fn prop_extra_answers_ignored(questions in questions_strategy()) {
        let mut sheet = vec![None; questions.len()];
        sheet.push(Some("A".to_string()));
        let report = score(&questions, &sheet, DEFAULT_PENALTY);
        prop_assert_eq!(report.unattempted, questions.len());
    }
}

#[test]
fn test_two_right_two_wrong() {
    let questions = crate::common::abcd_questions();
    let report = score(
        &questions,
        &answers(&[Some("A"), Some("X"), Some("C"), Some("Y")]),
        DEFAULT_PENALTY,
    );
    assert_eq!(report.total_display(), "1.33");
}

#[test]
fn test_unattempted_costs_nothing() {
    let questions = crate::common::abcd_questions();
    let report = score(&questions, &answers(&[Some("A"), None, Some("C"), None]), DEFAULT_PENALTY);
    assert_eq!(report.total, 2.0);
}
