// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Totals must be finite and deterministic, the three counts must partition
//! the questions, and unanswered questions must never cost anything.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quizbank::testing::{make_answer_only, OPTIONS};
use quizbank::{score, DEFAULT_PENALTY};

#[derive(Debug, Arbitrary)]
struct Sheet {
    /// Correct option per question, as an index into OPTIONS.
    key: Vec<u8>,
    /// Selected option per question; out-of-range values are wrong answers.
    selected: Vec<Option<u8>>,
}

fuzz_target!(|sheet: Sheet| {
    let questions: Vec<_> = sheet
        .key
        .iter()
        .map(|&k| make_answer_only(OPTIONS[k as usize % OPTIONS.len()]))
        .collect();
    let answers: Vec<Option<String>> = sheet
        .selected
        .iter()
        .map(|s| {
            s.map(|i| {
                OPTIONS
                    .get(i as usize)
                    .map_or_else(|| format!("option {}", i), |o| o.to_string())
            })
        })
        .collect();

    let report = score(&questions, &answers, DEFAULT_PENALTY);
    assert_eq!(report.question_count(), questions.len());
    assert!(report.total.is_finite());
    assert!(report.total <= report.correct as f64);
    assert_eq!(report, score(&questions, &answers, DEFAULT_PENALTY));

    let blank = vec![None; questions.len()];
    assert_eq!(score(&questions, &blank, DEFAULT_PENALTY).total, 0.0);
});
