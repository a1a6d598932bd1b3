// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a question bank.
//!
//! Questions live in sets, sets live under an (exam, branch, kind, key) address,
//! and the search index flattens all of it into [`SearchRecord`]s that remember
//! where they came from so a hit can deep-link back into its set.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Question**: `answer` equals exactly one element of `options`, and
//!   `options.len() >= 2`. The validator checks this offline; the engines
//!   assume it and never re-check at runtime.
//!
//! - **QuestionSet**: `questions` is in canonical order. Positions into this
//!   vector are the identity of a question for answers and deep links.
//!
//! - **SearchRecord**: `index < set.questions.len()` for the set named by
//!   `(exam, branch, kind, key)` at the time the index was built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// The chapter name that disables chapter filtering.
pub const ALL_CHAPTERS: &str = "All";

// =============================================================================
// QUESTIONS
// =============================================================================

/// A single multiple-choice question.
///
/// On disk the prompt is stored under `question`; everything else keeps its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    /// Display order matters: option shortcuts (a/1, b/2, ...) index into it.
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
    pub chapter: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Question {
    /// Explanation text, or the empty string when absent.
    pub fn explanation_text(&self) -> &str {
        self.explanation.as_deref().unwrap_or("")
    }

    /// Whether `selected` is the correct option.
    ///
    /// This is the one grading rule shared by quiz-mode and solution-mode scoring.
    #[inline]
    pub fn is_correct(&self, selected: &str) -> bool {
        self.answer == selected
    }
}

/// A titled, ordered collection of questions (one subject or one past paper).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub title: String,
    /// Declared chapters, topic sets only. Year-wise papers have none.
    #[serde(default)]
    pub chapters: Option<Vec<String>>,
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// An entry of a `subjects.json` / `years.json` list file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub key: String,
    pub title: String,
}

// =============================================================================
// ADDRESSING
// =============================================================================

/// Topic-wise subject sets vs. year-wise past papers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizKind {
    Topic,
    Year,
}

impl QuizKind {
    /// Directory under the data root holding sets of this kind.
    pub fn data_dir(self) -> &'static str {
        match self {
            QuizKind::Topic => "quizzes",
            QuizKind::Year => "yearWise",
        }
    }

    /// Name of the list file enumerating sets of this kind per (exam, branch).
    pub fn list_file(self) -> &'static str {
        match self {
            QuizKind::Topic => "subjects.json",
            QuizKind::Year => "years.json",
        }
    }

    pub fn from_data_dir(dir: &str) -> Option<Self> {
        match dir {
            "quizzes" => Some(QuizKind::Topic),
            "yearWise" => Some(QuizKind::Year),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuizKind::Topic => "topic",
            QuizKind::Year => "year",
        }
    }
}

impl fmt::Display for QuizKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuizKind {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "topic" => Ok(QuizKind::Topic),
            "year" => Ok(QuizKind::Year),
            other => Err(QuizError::InvalidSetRef(format!(
                "unknown kind '{}' (expected 'topic' or 'year')",
                other
            ))),
        }
    }
}

/// Where a question set lives: `exam/branch/kind/key`.
///
/// Ordering is lexicographic on the fields, which gives the index build a
/// deterministic iteration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SetKey {
    pub exam: String,
    pub branch: String,
    pub kind: QuizKind,
    pub key: String,
}

impl SetKey {
    pub fn new(exam: &str, branch: &str, kind: QuizKind, key: &str) -> Self {
        Self {
            exam: exam.to_string(),
            branch: branch.to_string(),
            kind,
            key: key.to_string(),
        }
    }
}

impl fmt::Display for SetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}/{}", self.exam, self.branch, self.kind, self.key)
    }
}

impl FromStr for SetKey {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [exam, branch, kind, key] if [exam, branch, key].iter().all(|p| !p.is_empty()) => {
                Ok(SetKey::new(exam, branch, kind.parse()?, key))
            }
            _ => Err(QuizError::InvalidSetRef(format!(
                "'{}' is not of the form exam/branch/kind/key",
                s
            ))),
        }
    }
}

// =============================================================================
// SESSION MODES
// =============================================================================

/// Quiz mode defers grading and applies the penalty; solution mode grades
/// every selection immediately and never penalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    Quiz,
    #[default]
    Solution,
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizMode::Quiz => f.write_str("quiz"),
            QuizMode::Solution => f.write_str("solution"),
        }
    }
}

// =============================================================================
// SEARCH RECORDS
// =============================================================================

/// One question, denormalized with enough context to find it again.
///
/// Serialized field names match what search clients expect (`type`, not `kind`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub question: String,
    /// Empty when the question has no explanation.
    pub explanation: String,
    pub exam: String,
    pub branch: String,
    pub key: String,
    #[serde(rename = "type")]
    pub kind: QuizKind,
    pub title: String,
    /// Position of the question within its owning set.
    pub index: usize,
}

impl SearchRecord {
    /// Address of the owning set.
    pub fn set_key(&self) -> SetKey {
        SetKey::new(&self.exam, &self.branch, self.kind, &self.key)
    }
}
