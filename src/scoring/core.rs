// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deferred, penalized scoring for quiz mode.
//!
//! # Formula
//!
//! ```text
//! total = correct - incorrect * penalty
//! ```
//!
//! Not clamped. A paper with more wrong answers than right ones scores below
//! zero and must be shown that way (`-0.33`, not `0.00`).
//!
//! # Key Invariant
//!
//! `correct + incorrect + unattempted == questions.len()` for any answers
//! array, including one shorter than the question list: missing trailing
//! entries count as unattempted, extra trailing entries are ignored.

use serde::{Deserialize, Serialize};

use crate::types::Question;

/// Default negative-marking fraction.
pub const DEFAULT_PENALTY: f64 = 1.0 / 3.0;

/// Outcome of a quiz-mode submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub correct: usize,
    pub incorrect: usize,
    pub unattempted: usize,
    pub total: f64,
}

impl ScoreReport {
    /// Number of questions scored.
    pub fn question_count(&self) -> usize {
        self.correct + self.incorrect + self.unattempted
    }

    pub fn attempted(&self) -> usize {
        self.correct + self.incorrect
    }

    /// Total rounded for display, sign preserved.
    pub fn total_display(&self) -> String {
        format!("{:.2}", self.total)
    }

    /// "You attempted X out of N questions."
    pub fn summary_line(&self) -> String {
        format!(
            "You attempted {} out of {} questions.",
            self.attempted(),
            self.question_count()
        )
    }

    /// Shareable one-liner for a finished paper.
    pub fn share_message(&self, quiz_title: &str, site_title: &str) -> String {
        format!(
            "I scored {} ({}/{}) on the \"{}\" quiz at {}! Can you beat my score?",
            self.total_display(),
            self.correct,
            self.question_count(),
            quiz_title,
            site_title
        )
    }
}

/// Score quiz-mode answers against the full question list.
///
/// `answers[i]` is the option selected for `questions[i]`, or `None` if the
/// question was left alone. Pure and re-entrant.
pub fn score(questions: &[Question], answers: &[Option<String>], penalty: f64) -> ScoreReport {
    let mut correct = 0;
    let mut incorrect = 0;
    let mut unattempted = 0;

    for (i, question) in questions.iter().enumerate() {
        match answers.get(i).and_then(Option::as_deref) {
            None => unattempted += 1,
            Some(selected) if question.is_correct(selected) => correct += 1,
            Some(_) => incorrect += 1,
        }
    }

    ScoreReport {
        correct,
        incorrect,
        unattempted,
        total: correct as f64 - incorrect as f64 * penalty,
    }
}
