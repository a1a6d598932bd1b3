// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The individual checks.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::error::QuizError;
use crate::types::{CatalogEntry, QuestionSet};
use crate::utils::normalize;

use super::report::{ChapterVariants, Issue};

/// Read and parse a set file, turning any failure into a message.
pub fn read_set(path: &Path) -> Result<QuestionSet, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("could not read file: {}", e))?;
    serde_json::from_str(&content).map_err(|e| format!("invalid question set: {}", e))
}

/// Structural checks on one parsed set.
pub fn check_set(path: &Path, set: &QuestionSet) -> Vec<Issue> {
    let mut issues = Vec::new();

    if set.title.trim().is_empty() {
        issues.push(Issue::file(path, "missing or empty title".to_string()));
    }
    if set.questions.is_empty() {
        issues.push(Issue::file(path, "set has no questions".to_string()));
    }

    for (position, q) in set.questions.iter().enumerate() {
        if q.text.trim().is_empty() {
            issues.push(Issue::question(path, position, "empty question text".to_string()));
        }
        if q.options.len() < 2 {
            issues.push(Issue::question(
                path,
                position,
                format!("needs at least 2 options, has {}", q.options.len()),
            ));
        }
        match q.options.iter().filter(|o| **o == q.answer).count() {
            1 => {}
            0 => {
                let err = QuizError::MalformedQuestion {
                    position,
                    answer: q.answer.clone(),
                };
                issues.push(Issue::question(path, position, err.to_string()));
            }
            n => issues.push(Issue::question(
                path,
                position,
                format!("answer '{}' appears {} times among the options", q.answer, n),
            )),
        }
        if q.chapter.trim().is_empty() {
            issues.push(Issue::question(path, position, "empty chapter".to_string()));
        }
    }

    issues
}

/// Questions filed under a chapter the set never declares can only be
/// reached through `All`.
pub fn check_declared_chapters(path: &Path, set: &QuestionSet) -> Vec<Issue> {
    let Some(declared) = &set.chapters else {
        return Vec::new();
    };
    let declared: BTreeSet<&str> = declared.iter().map(String::as_str).collect();

    let undeclared: BTreeSet<&str> = set
        .questions
        .iter()
        .map(|q| q.chapter.as_str())
        .filter(|chapter| !chapter.is_empty() && !declared.contains(chapter))
        .collect();

    undeclared
        .into_iter()
        .map(|chapter| {
            Issue::file(
                path,
                format!("chapter '{}' is used but not declared in \"chapters\"", chapter),
            )
        })
        .collect()
}

/// A list file must be a non-empty array of `{key, title}`.
pub fn check_catalog_file(path: &Path) -> Vec<Issue> {
    let parsed = fs::read_to_string(path)
        .map_err(|e| format!("could not read file: {}", e))
        .and_then(|content| {
            serde_json::from_str::<Vec<CatalogEntry>>(&content)
                .map_err(|e| format!("invalid list file: {}", e))
        });

    match parsed {
        Err(message) => vec![Issue::file(path, message)],
        Ok(entries) if entries.is_empty() => {
            vec![Issue::file(path, "list file is empty".to_string())]
        }
        Ok(entries) => entries
            .iter()
            .filter(|e| e.key.trim().is_empty() || e.title.trim().is_empty())
            .map(|e| Issue::file(path, format!("entry '{}' has an empty key or title", e.key)))
            .collect(),
    }
}

/// Collects every raw chapter spelling under its normalized form.
#[derive(Debug, Default)]
pub struct ChapterRegistry {
    by_normalized: BTreeMap<String, BTreeSet<String>>,
}

impl ChapterRegistry {
    pub fn record(&mut self, chapter: &str) {
        self.by_normalized
            .entry(normalize(chapter))
            .or_default()
            .insert(chapter.to_string());
    }

    pub fn record_set(&mut self, set: &QuestionSet) {
        for q in &set.questions {
            self.record(&q.chapter);
        }
    }

    /// Normalized names with more than one raw spelling.
    pub fn inconsistent(&self) -> Vec<ChapterVariants> {
        self.by_normalized
            .iter()
            .filter(|(_, variants)| variants.len() > 1)
            .map(|(normalized, variants)| ChapterVariants {
                normalized: normalized.clone(),
                variants: variants.iter().cloned().collect(),
            })
            .collect()
    }
}
