// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the search API over the fixture bank.
//! It must never panic, blank queries must find nothing, and hits must come
//! back in index order.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quizbank::{build_search_index, load_corpus, search, SearchIndex};

fuzz_target!(|query: &[u8]| {
    // Fuzz runs start in fuzz/, so try the parent too
    static INDEX: std::sync::OnceLock<SearchIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(|| {
        let corpus = ["data/fixtures", "../data/fixtures"]
            .iter()
            .find_map(|p| load_corpus(p.as_ref()).ok())
            .expect("fixture bank not found");
        build_search_index(&corpus.sets)
    });

    let query = String::from_utf8_lossy(query);
    let hits = search(index, &query);

    let trimmed = query.trim();
    if trimmed.is_empty() {
        assert!(hits.is_empty(), "blank query returned {} hits", hits.len());
        return;
    }

    // Index order, no duplicates
    let positions: Vec<usize> = hits
        .iter()
        .map(|hit| {
            index
                .records()
                .iter()
                .position(|r| std::ptr::eq(r, *hit))
                .expect("hit not from this index")
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
});
