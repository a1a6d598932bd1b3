// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The published index, swapped whole.
//!
//! Readers grab an `Arc` to the current generation and search it without
//! holding any lock. A rebuild constructs the next generation entirely outside
//! the lock, then takes the write lock only long enough to swap one pointer.
//! A reader that started before the swap finishes on the old generation;
//! nobody ever sees a half-built index.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use super::{build_search_index, SearchIndex};
use crate::error::{QuizError, Result};
use crate::search::search;
use crate::types::{QuestionSet, SearchRecord, SetKey};

/// Owner of the currently published search index generation.
///
/// Pass it (or an `Arc` of it) to whoever needs search; there is no global.
#[derive(Debug, Default)]
pub struct SharedIndex {
    current: RwLock<Option<Arc<SearchIndex>>>,
    generation: AtomicU64,
}

impl SharedIndex {
    /// An empty handle. Searches fail with `IndexNotReady` until the first publish.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the published index. Returns the new generation number (1-based).
    pub fn publish(&self, index: SearchIndex) -> u64 {
        let next = Arc::new(index);
        let records = next.len();
        let mut slot = self.current.write();
        *slot = Some(next);
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        drop(slot);
        tracing::info!(generation, records, "published search index");
        generation
    }

    /// Build a new generation from `sets` and publish it.
    ///
    /// The build runs before the write lock is taken, so concurrent searches
    /// keep answering from the previous generation the whole time.
    pub fn rebuild(&self, sets: &BTreeMap<SetKey, QuestionSet>) -> u64 {
        let index = build_search_index(sets);
        self.publish(index)
    }

    /// The current generation, if any has been published.
    pub fn snapshot(&self) -> Option<Arc<SearchIndex>> {
        self.current.read().clone()
    }

    /// Number of publishes so far. Zero means not ready.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn is_ready(&self) -> bool {
        self.current.read().is_some()
    }

    /// Search the current generation.
    ///
    /// Results are cloned out of the snapshot so they stay valid after the
    /// next swap.
    pub fn search(&self, query: &str) -> Result<Vec<SearchRecord>> {
        let index = self.snapshot().ok_or(QuizError::IndexNotReady)?;
        Ok(search(&index, query).into_iter().cloned().collect())
    }
}
