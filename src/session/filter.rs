// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Which questions are visible, and in what order.
//!
//! The pipeline is chapter → keyword → shuffle. The two filters commute; the
//! shuffle has to come last or it would permute questions that are about to
//! be dropped anyway. Output is a list of positions into the unfiltered set so
//! answers can stay keyed by canonical position no matter how the visible
//! list is sliced or shuffled.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{Question, QuizMode, ALL_CHAPTERS};
use crate::utils::{contains_lowercased, prepare_query};

/// The two orthogonal filters of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    chapter: String,
    search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            chapter: ALL_CHAPTERS.to_string(),
            search_term: String::new(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chapter(&self) -> &str {
        &self.chapter
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Pick a chapter. Always clears the search term.
    pub fn select_chapter(&mut self, chapter: &str) {
        self.chapter = chapter.to_string();
        self.search_term.clear();
    }

    /// Set the keyword. Leaves the chapter alone.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Run the pipeline for this filter state.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        questions: &[Question],
        mode: QuizMode,
        rng: &mut R,
    ) -> Vec<usize> {
        apply_filters(questions, &self.chapter, &self.search_term, mode, rng)
    }
}

/// Chapter filter: exact, case-sensitive. `All` keeps everything.
pub fn matches_chapter(question: &Question, chapter: &str) -> bool {
    chapter == ALL_CHAPTERS || question.chapter == chapter
}

/// Produce the visible question positions for a filter combination.
///
/// 1. Keep questions in `chapter` (unless it is `All`).
/// 2. Keep questions whose text or explanation contains the trimmed
///    `search_term`, case-insensitively (unless it is blank).
/// 3. In quiz mode, shuffle uniformly (Fisher-Yates via `SliceRandom`).
///    Solution mode preserves canonical order exactly.
///
/// An empty result is a normal outcome, not an error.
pub fn apply_filters<R: Rng + ?Sized>(
    questions: &[Question],
    chapter: &str,
    search_term: &str,
    mode: QuizMode,
    rng: &mut R,
) -> Vec<usize> {
    let needle = prepare_query(search_term);

    let mut visible: Vec<usize> = questions
        .iter()
        .enumerate()
        .filter(|(_, q)| matches_chapter(q, chapter))
        .filter(|(_, q)| match &needle {
            Some(needle) => {
                contains_lowercased(&q.text, needle)
                    || contains_lowercased(q.explanation_text(), needle)
            }
            None => true,
        })
        .map(|(position, _)| position)
        .collect();

    if mode == QuizMode::Quiz {
        visible.shuffle(rng);
    }

    visible
}
