// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: two paths that share only the grading rule.
//!
//! Quiz mode collects answers and scores them all at submission, deducting a
//! fixed penalty per wrong answer. Solution mode grades each selection on the
//! spot and keeps a running count of correct answers. They are kept apart on
//! purpose; forcing solution mode through the penalty formula would invent an
//! `incorrect`/`unattempted` breakdown that solution mode never had.

mod core;
mod tally;

pub use self::core::*;
pub use tally::*;
