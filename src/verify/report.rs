// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// One finding, tied to a file and optionally a question within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub path: PathBuf,
    /// Zero-based position of the offending question.
    pub question: Option<usize>,
    pub message: String,
}

impl Issue {
    pub fn file(path: &Path, message: String) -> Self {
        Self {
            path: path.to_path_buf(),
            question: None,
            message,
        }
    }

    pub fn question(path: &Path, position: usize, message: String) -> Self {
        Self {
            path: path.to_path_buf(),
            question: Some(position),
            message,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.question {
            // 1-based for humans
            Some(position) => write!(
                f,
                "{} [question {}]: {}",
                self.path.display(),
                position + 1,
                self.message
            ),
            None => write!(f, "{}: {}", self.path.display(), self.message),
        }
    }
}

/// Raw chapter spellings that normalize to the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterVariants {
    pub normalized: String,
    pub variants: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub files_scanned: usize,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub chapter_variants: Vec<ChapterVariants>,
}

impl ValidationReport {
    /// No structural errors. Warnings do not count.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}
