// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Question-bank engine: search, filtering, navigation and scoring for
//! multiple-choice quizzes.
//!
//! Question sets are loaded once from a JSON data tree, flattened into a
//! search index, and served one [`QuizSession`] at a time. The engines are
//! plain functions over already-loaded data; disk access lives in [`build`],
//! offline data checks in [`verify`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   build     │────▶│    index     │────▶│   search    │
//! │ (discover,  │     │ (SearchIndex,│     │ (substring, │
//! │ load_corpus)│     │ SharedIndex) │     │ index order)│
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                                        │ deep link
//!        ▼                                        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     session                          │
//! │  filter ─▶ navigator ─▶ scoring (quiz)  │  tally     │
//! │                         timer + SubmissionGate       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use quizbank::{load_corpus, QuizMode, QuizSession, SharedIndex};
//!
//! let corpus = load_corpus("data".as_ref())?;
//! let shared = SharedIndex::new();
//! shared.rebuild(&corpus.sets);
//!
//! let hits = shared.search("bernoulli")?;
//! let set = corpus.sets[&hits[0].set_key()].clone();
//! let session = QuizSession::from_search_hit(set, &hits[0])?;
//! ```

pub mod build;
pub mod config;
pub mod error;
mod index;
pub mod logging;
mod scoring;
mod search;
mod session;
pub mod testing;
mod timer;
mod types;
mod utils;
pub mod verify;

pub use build::{discover, load_catalog, load_corpus, load_set, run_index, Corpus, SkippedFile};
pub use config::Config;
pub use error::{QuizError, Result};
pub use index::{build_search_index, SearchIndex, SharedIndex};
pub use scoring::{score, Feedback, ScoreReport, SolutionTally, DEFAULT_PENALTY};
pub use search::search;
pub use session::{
    apply_filters, chapter_counts, option_index_for_key, question_number_to_index, Advance,
    ChapterCount, FilterState, NavState, QuizNavigator, QuizSession, Selection,
};
pub use timer::{format_clock, QuizTimer, SubmissionGate, DEFAULT_TIME_LIMIT};
pub use types::{
    CatalogEntry, Question, QuestionSet, QuizKind, QuizMode, SearchRecord, SetKey, ALL_CHAPTERS,
};
pub use utils::normalize;
pub use verify::{validate_corpus, ValidationReport};
