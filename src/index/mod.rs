// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: one flat list of every question in the bank.
//!
//! There is no clever data structure here. The bank is a few thousand
//! questions, and a linear case-insensitive scan over pre-lowercased text is
//! fast enough that anything fancier would cost more in build time than it
//! saves in query time. What matters is that the index is a snapshot:
//! built completely, then published whole through [`SharedIndex`].

mod shared;

pub use shared::*;

use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::types::{QuestionSet, SearchRecord, SetKey};

/// An immutable, fully-built search index.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    records: Vec<SearchRecord>,
    /// Lowercased `(question, explanation)` per record, same order as `records`.
    lowered: Vec<(String, String)>,
    set_count: usize,
}

impl SearchIndex {
    /// All records, in build order.
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of question sets that contributed at least one record.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Records paired with their lowercased search text.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&SearchRecord, &(String, String))> {
        self.records.iter().zip(self.lowered.iter())
    }
}

/// Build the search index from every loaded question set.
///
/// One record per question, in `SetKey` order then question order. Sets with
/// no questions contribute nothing. The caller hands over only genuine
/// question sets; list files never reach this point (see `build::discover`).
pub fn build_search_index(sets: &BTreeMap<SetKey, QuestionSet>) -> SearchIndex {
    let entries: Vec<(&SetKey, &QuestionSet)> = sets.iter().collect();

    #[cfg(feature = "parallel")]
    let per_set: Vec<Vec<SearchRecord>> = entries
        .par_iter()
        .map(|(key, set)| records_for_set(key, set))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let per_set: Vec<Vec<SearchRecord>> = entries
        .iter()
        .map(|(key, set)| records_for_set(key, set))
        .collect();

    let set_count = per_set.iter().filter(|r| !r.is_empty()).count();
    let records: Vec<SearchRecord> = per_set.into_iter().flatten().collect();
    let lowered = records
        .iter()
        .map(|r| (r.question.to_lowercase(), r.explanation.to_lowercase()))
        .collect();

    SearchIndex {
        records,
        lowered,
        set_count,
    }
}

fn records_for_set(key: &SetKey, set: &QuestionSet) -> Vec<SearchRecord> {
    set.questions
        .iter()
        .enumerate()
        .map(|(index, q)| SearchRecord {
            question: q.text.clone(),
            explanation: q.explanation_text().to_string(),
            exam: key.exam.clone(),
            branch: key.branch.clone(),
            key: key.key.clone(),
            kind: key.kind,
            title: set.title.clone(),
            index,
        })
        .collect()
}
