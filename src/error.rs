// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by every engine in the crate.
//!
//! All of these are recoverable at the call site. `IndexNotReady` is the only
//! one a caller should retry; the rest describe bad input or missing data.

use thiserror::Error;

pub type Result<T, E = QuizError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// A question set, list file or data root could not be read or parsed.
    #[error("data unavailable for {key}: {reason}")]
    DataUnavailable { key: String, reason: String },

    /// Search was called before any index generation was published.
    #[error("search index is still building, try again shortly")]
    IndexNotReady,

    #[error("question index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The answer of a question is not one of its options. Only the offline
    /// validator reports this; the engines assume validated input. `position`
    /// is zero-based, like every other question position in the crate.
    #[error("answer '{answer}' is not one of the options")]
    MalformedQuestion { position: usize, answer: String },

    #[error("invalid set reference: {0}")]
    InvalidSetRef(String),

    #[error("configuration error: {0}")]
    Config(String),

    /// An output file (index snapshot) could not be written.
    #[error("failed to write {path}: {reason}")]
    Write { path: String, reason: String },
}

impl QuizError {
    pub fn data_unavailable(key: impl ToString, reason: impl ToString) -> Self {
        QuizError::DataUnavailable {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether retrying the same call later can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, QuizError::IndexNotReady)
    }
}
