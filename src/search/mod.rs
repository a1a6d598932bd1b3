// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Free-text search across the whole bank.
//!
//! Case-insensitive substring match against the question text or its
//! explanation. Results come back in index order, unranked. An empty or
//! whitespace-only query matches nothing: "show me everything" is what the
//! chapter filter's `All` is for, not what search is for.

use crate::index::SearchIndex;
use crate::types::SearchRecord;
use crate::utils::prepare_query;

/// Search an index. Empty/whitespace queries return no records.
pub fn search<'a>(index: &'a SearchIndex, query: &str) -> Vec<&'a SearchRecord> {
    let Some(needle) = prepare_query(query) else {
        return Vec::new();
    };

    index
        .entries()
        .filter(|(_, (question, explanation))| {
            question.contains(&needle) || explanation.contains(&needle)
        })
        .map(|(record, _)| record)
        .collect()
}
