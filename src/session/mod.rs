// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One active quiz: filters, cursor, answers and scoring in a single object.
//!
//! A [`QuizSession`] owns everything the UI mutates while a quiz is open. The
//! pieces are deliberately small and live in their own modules:
//!
//! - [`filter`](apply_filters): chapter → keyword → shuffle, producing
//!   positions into the unfiltered set
//! - [`navigator`](QuizNavigator): forward-only cursor over those positions
//! - [`chapters`](chapter_counts): the sidebar counts
//!
//! Scoring comes from [`crate::scoring`]. Quiz mode accumulates a dense answers
//! array and scores it once on submit. Solution mode grades every selection
//! on the spot through a [`SolutionTally`]. The two never share a code path
//! beyond the `answer == selected` rule.
//!
//! # Identity
//!
//! Answers and grading are keyed by a question's position in the *unfiltered*
//! set. Changing the chapter or the keyword therefore never loses or
//! misattributes an answer, no matter how the visible list is sliced.

mod chapters;
mod filter;
mod navigator;

pub use chapters::*;
pub use filter::*;
pub use navigator::*;

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::scoring::{score, Feedback, ScoreReport, SolutionTally, DEFAULT_PENALTY};
use crate::timer::SubmissionGate;
use crate::types::{Question, QuestionSet, QuizKind, QuizMode, SearchRecord};

/// Map an option shortcut key to an option index.
///
/// `a`/`1` → 0, `b`/`2` → 1, `c`/`3` → 2, `d`/`4` → 3. Anything else is `None`.
pub fn option_index_for_key(key: &str) -> Option<usize> {
    match key.trim().to_ascii_lowercase().as_str() {
        "a" | "1" => Some(0),
        "b" | "2" => Some(1),
        "c" | "3" => Some(2),
        "d" | "4" => Some(3),
        _ => None,
    }
}

/// Parse a question number as displayed ("Question 3 of 10") into a
/// zero-based visible index. `None` for 0 or anything that is not a number.
pub fn question_number_to_index(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()?.checked_sub(1)
}

/// What a selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Quiz mode: stored (or overwrote) the answer for this position.
    Recorded { position: usize },
    /// Solution mode: graded immediately.
    Graded(Feedback),
    /// Nothing to select: no current question, or no such option.
    Ignored,
    /// The quiz was already submitted.
    Closed,
}

#[derive(Debug)]
pub struct QuizSession {
    set: QuestionSet,
    kind: QuizKind,
    mode: QuizMode,
    filter: FilterState,
    visible: Vec<usize>,
    navigator: QuizNavigator,
    answers: Vec<Option<String>>,
    tally: SolutionTally,
    penalty: f64,
    gate: Arc<SubmissionGate>,
    rng: StdRng,
}

impl QuizSession {
    /// Start a session with an entropy-seeded shuffle.
    pub fn new(set: QuestionSet, kind: QuizKind, mode: QuizMode) -> Self {
        Self::with_rng(set, kind, mode, StdRng::from_rng(&mut rand::rng()))
    }

    /// Start a session with a caller-provided shuffle source.
    pub fn with_rng(set: QuestionSet, kind: QuizKind, mode: QuizMode, rng: StdRng) -> Self {
        let answers = vec![None; set.questions.len()];
        let mut session = Self {
            set,
            kind,
            mode,
            filter: FilterState::new(),
            visible: Vec::new(),
            navigator: QuizNavigator::default(),
            answers,
            tally: SolutionTally::new(),
            penalty: DEFAULT_PENALTY,
            gate: Arc::new(SubmissionGate::new()),
            rng,
        };
        session.refilter();
        tracing::debug!(
            title = %session.set.title,
            kind = %kind,
            mode = %mode,
            questions = session.set.questions.len(),
            "session started"
        );
        session
    }

    /// Topic-wise subjects only run in solution mode.
    pub fn topic(set: QuestionSet) -> Self {
        Self::new(set, QuizKind::Topic, QuizMode::Solution)
    }

    /// Year-wise papers run in either mode.
    pub fn year(set: QuestionSet, mode: QuizMode) -> Self {
        Self::new(set, QuizKind::Year, mode)
    }

    /// Open the set a search hit points into, positioned on that question.
    ///
    /// Always solution mode with every question visible in original order, so
    /// the record's `index` is directly a valid cursor.
    pub fn from_search_hit(set: QuestionSet, record: &SearchRecord) -> Result<Self> {
        Self::open_at(set, record.kind, record.index)
    }

    /// Open a set on the question at `position` in the unfiltered set.
    ///
    /// Solution mode, original order, so `position` and the visible index
    /// coincide.
    pub fn open_at(set: QuestionSet, kind: QuizKind, position: usize) -> Result<Self> {
        let mut session = Self::new(set, kind, QuizMode::Solution);
        session.jump_to(position)?;
        Ok(session)
    }

    /// Override the negative-marking fraction used on submit.
    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    // =========================================================================
    // FILTERS
    // =========================================================================

    /// Pick a chapter. Clears the search term and returns to the first question.
    pub fn select_chapter(&mut self, chapter: &str) {
        self.filter.select_chapter(chapter);
        self.refilter();
    }

    /// Set the keyword. Keeps the chapter, returns to the first question.
    pub fn set_search_term(&mut self, term: &str) {
        self.filter.set_search_term(term);
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = self.filter.apply(&self.set.questions, self.mode, &mut self.rng);
        self.navigator.reset(self.visible.len());
        self.note_current_seen();
        tracing::debug!(
            chapter = self.filter.chapter(),
            search = self.filter.search_term(),
            visible = self.visible.len(),
            "filters applied"
        );
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    pub fn next(&mut self) -> Advance {
        let advance = self.navigator.next(self.mode);
        if let Advance::Moved(_) = advance {
            self.note_current_seen();
        }
        advance
    }

    /// Jump to a visible index. Out of range leaves the cursor where it was.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        self.navigator.jump_to(index)?;
        self.note_current_seen();
        Ok(())
    }

    fn note_current_seen(&mut self) {
        if self.mode != QuizMode::Solution {
            return;
        }
        if let Some(position) = self.current_position() {
            self.tally.mark_seen(position);
        }
    }

    // =========================================================================
    // ANSWERING
    // =========================================================================

    /// Select an option of the current question by its text.
    pub fn select_option(&mut self, option: &str) -> Selection {
        if self.gate.is_committed() {
            return Selection::Closed;
        }
        let Some(position) = self.current_position() else {
            return Selection::Ignored;
        };

        match self.mode {
            QuizMode::Quiz => {
                self.answers[position] = Some(option.to_string());
                Selection::Recorded { position }
            }
            QuizMode::Solution => {
                let question = &self.set.questions[position];
                Selection::Graded(self.tally.grade(position, question, option))
            }
        }
    }

    /// Select an option of the current question by index (shortcut keys).
    pub fn select_option_index(&mut self, index: usize) -> Selection {
        let option = self
            .current()
            .and_then(|question| question.options.get(index))
            .cloned();
        match option {
            Some(option) => self.select_option(&option),
            None => Selection::Ignored,
        }
    }

    // =========================================================================
    // SUBMISSION
    // =========================================================================

    /// Submit a quiz-mode attempt.
    ///
    /// `None` in solution mode (nothing to submit) or when the submission was
    /// already committed, whether by an earlier call or by the timer.
    pub fn submit(&mut self) -> Option<ScoreReport> {
        if self.mode != QuizMode::Quiz {
            return None;
        }
        if !self.gate.try_commit() {
            tracing::debug!("submit ignored, already committed");
            return None;
        }
        Some(self.report())
    }

    /// Score the current answers without touching the gate.
    ///
    /// The timer calls this after it has won the gate itself.
    pub fn report(&self) -> ScoreReport {
        score(&self.set.questions, &self.answers, self.penalty)
    }

    /// The gate a [`crate::timer::QuizTimer`] must share with this session.
    pub fn gate(&self) -> Arc<SubmissionGate> {
        Arc::clone(&self.gate)
    }

    pub fn is_submitted(&self) -> bool {
        self.gate.is_committed()
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn title(&self) -> &str {
        &self.set.title
    }

    pub fn kind(&self) -> QuizKind {
        self.kind
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn all_questions(&self) -> &[Question] {
        &self.set.questions
    }

    /// Positions (into [`Self::all_questions`]) of the visible questions.
    pub fn visible_positions(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_questions(&self) -> impl Iterator<Item = &Question> + '_ {
        self.visible.iter().map(move |&p| &self.set.questions[p])
    }

    pub fn cursor(&self) -> usize {
        self.navigator.cursor()
    }

    pub fn state(&self) -> NavState {
        self.navigator.state()
    }

    /// Position of the current question in the unfiltered set.
    pub fn current_position(&self) -> Option<usize> {
        self.navigator
            .current()
            .and_then(|cursor| self.visible.get(cursor).copied())
    }

    pub fn current(&self) -> Option<&Question> {
        self.current_position().map(|p| &self.set.questions[p])
    }

    /// The quiz-mode answers array, one slot per question in the set.
    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    pub fn tally(&self) -> &SolutionTally {
        &self.tally
    }

    pub fn chapter_counts(&self) -> Vec<ChapterCount> {
        chapter_counts(&self.set)
    }
}
