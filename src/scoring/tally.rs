// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Immediate grading for solution mode.

use std::collections::HashSet;

use crate::types::Question;

/// What happened when a solution-mode selection was graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
    /// The question was already graded; the selection does not count again.
    AlreadyGraded,
}

/// Running score for solution mode: correct answers out of questions seen.
///
/// Questions are identified by their position in the unfiltered set, so a
/// question stays graded across filter changes.
#[derive(Debug, Clone, Default)]
pub struct SolutionTally {
    correct: usize,
    graded: HashSet<usize>,
    seen: HashSet<usize>,
}

impl SolutionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the question at `position` was shown.
    pub fn mark_seen(&mut self, position: usize) {
        self.seen.insert(position);
    }

    /// Grade a selection immediately. Each question is graded at most once.
    pub fn grade(&mut self, position: usize, question: &Question, selected: &str) -> Feedback {
        self.seen.insert(position);
        if !self.graded.insert(position) {
            return Feedback::AlreadyGraded;
        }
        if question.is_correct(selected) {
            self.correct += 1;
            Feedback::Correct
        } else {
            Feedback::Incorrect
        }
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn seen(&self) -> usize {
        self.seen.len()
    }

    pub fn is_graded(&self, position: usize) -> bool {
        self.graded.contains(&position)
    }

    /// "Your final score: 3 / 5"
    pub fn fraction(&self) -> String {
        format!("Your final score: {} / {}", self.correct, self.seen())
    }
}
