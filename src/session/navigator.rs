// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Forward-only cursor over the visible questions.
//!
//! There is no `previous`. Quiz mode moves forward or jumps; solution mode
//! moves forward or skips. That is a product constraint, not an omission.

use crate::error::{QuizError, Result};
use crate::types::QuizMode;

/// Where the navigator is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Active(usize),
    /// Solution mode advanced past the last question.
    Exhausted,
}

/// Result of asking for the next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Cursor moved to this visible index.
    Moved(usize),
    /// Quiz mode at the last question: stay put and prompt for submission.
    PromptSubmit,
    /// Solution mode ran off the end: show the running score.
    Exhausted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizNavigator {
    cursor: usize,
    len: usize,
    exhausted: bool,
}

impl QuizNavigator {
    pub fn new(len: usize) -> Self {
        Self {
            cursor: 0,
            len,
            exhausted: false,
        }
    }

    /// Point at a freshly filtered list. Always back to the first question.
    pub fn reset(&mut self, len: usize) {
        self.cursor = 0;
        self.len = len;
        self.exhausted = false;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn state(&self) -> NavState {
        if self.exhausted {
            NavState::Exhausted
        } else {
            NavState::Active(self.cursor)
        }
    }

    /// Visible index of the current question, if there is one to show.
    pub fn current(&self) -> Option<usize> {
        (!self.exhausted && self.cursor < self.len).then_some(self.cursor)
    }

    pub fn next(&mut self, mode: QuizMode) -> Advance {
        if self.exhausted {
            return Advance::Exhausted;
        }
        if self.cursor + 1 < self.len {
            self.cursor += 1;
            return Advance::Moved(self.cursor);
        }
        match mode {
            QuizMode::Quiz => {
                tracing::debug!(cursor = self.cursor, "advance refused at last question");
                Advance::PromptSubmit
            }
            QuizMode::Solution => {
                self.exhausted = true;
                Advance::Exhausted
            }
        }
    }

    /// Move straight to `index`. Out of range leaves the cursor untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(QuizError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.cursor = index;
        self.exhausted = false;
        Ok(())
    }
}
