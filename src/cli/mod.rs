// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the quizbank command-line interface.
//!
//! `index`, `search` and `validate` work on the whole bank. `chapters`, `show`,
//! `score` and `take` work on a single set addressed as
//! `exam/branch/kind/key` (for example `isro/mechanical/year/mechanical_2020`).
//! `--data` falls back to `data_dir` from the config file.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use quizbank::{QuizMode, SetKey};

#[derive(Parser)]
#[command(
    name = "quizbank",
    about = "Question bank tooling: search, filter, score and take quizzes",
    version
)]
pub struct Cli {
    /// More log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./quizbank.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load every question set and build the search index
    Index {
        /// Root of the question data tree
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Write all search records to this JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Case-insensitive search over question text and explanations
    Search {
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Search query
        query: String,

        /// Maximum number of results to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Question counts per chapter
    Chapters {
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Set reference: exam/branch/kind/key
        set: SetKey,

        #[arg(long)]
        json: bool,
    },

    /// List the questions visible for a filter combination
    Show {
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Set reference: exam/branch/kind/key
        set: SetKey,

        /// Chapter filter ("All" for every chapter)
        #[arg(short, long, default_value = "All")]
        chapter: String,

        /// Keyword filter
        #[arg(short, long, default_value = "")]
        search: String,

        /// Quiz mode shuffles, solution mode keeps the original order
        #[arg(short, long, value_enum, default_value_t = QuizMode::Solution)]
        mode: QuizMode,
    },

    /// Score a quiz-mode answer sheet
    Score {
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Set reference: exam/branch/kind/key
        set: SetKey,

        /// JSON array of selected options (null for unattempted)
        #[arg(short, long)]
        answers: PathBuf,

        /// Negative marking per incorrect answer
        #[arg(short, long)]
        penalty: Option<f64>,

        #[arg(long)]
        json: bool,
    },

    /// Take a quiz interactively in the terminal
    Take {
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Set reference: exam/branch/kind/key
        set: SetKey,

        /// Year-wise papers only; topic sets always run in solution mode
        #[arg(short, long, value_enum, default_value_t = QuizMode::Solution)]
        mode: QuizMode,

        /// Open on the question with this zero-based `#index` (as listed by
        /// `search` and `show`). Forces solution mode in original order.
        #[arg(short, long)]
        jump: Option<usize>,

        #[arg(short, long)]
        penalty: Option<f64>,
    },

    /// Check the data tree for structural errors and chapter inconsistencies
    Validate {
        #[arg(short, long)]
        data: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },
}
