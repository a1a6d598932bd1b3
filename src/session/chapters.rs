// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-chapter question counts for the chapter sidebar.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{QuestionSet, ALL_CHAPTERS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterCount {
    pub chapter: String,
    pub count: usize,
}

/// `All` (the total) first, then each declared chapter in declared order.
///
/// Declared chapters with no questions report 0. Questions whose chapter is
/// not declared still count toward `All`. Sets without declared chapters
/// (year-wise papers) yield only `All`.
pub fn chapter_counts(set: &QuestionSet) -> Vec<ChapterCount> {
    let mut counts = vec![ChapterCount {
        chapter: ALL_CHAPTERS.to_string(),
        count: set.questions.len(),
    }];

    let Some(declared) = &set.chapters else {
        return counts;
    };

    let mut by_chapter: HashMap<&str, usize> = HashMap::new();
    for q in &set.questions {
        *by_chapter.entry(q.chapter.as_str()).or_default() += 1;
    }

    counts.extend(declared.iter().map(|chapter| ChapterCount {
        chapter: chapter.clone(),
        count: by_chapter.get(chapter.as_str()).copied().unwrap_or(0),
    }));
    counts
}
