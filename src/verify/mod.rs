// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Offline data checks: the invariants the engines assume but never re-check.
//!
//! Grading is `answer == selected` and nothing more. If a question's answer is
//! not one of its options, nobody can ever get it right, and the runtime will
//! not notice. So the checks live here, run before data ships:
//!
//! 1. **Structural errors** make `quizbank validate` exit non-zero: missing
//!    title, no questions, empty prompt, fewer than two options, an answer that
//!    is not an option, an empty chapter, a file that does not parse.
//!
//! 2. **Chapter warnings** do not fail the run. Chapter filtering is exact, so
//!    "Fluid Mechanics" and "fluid  mechanics" are two different chapters to
//!    the engine. Grouping names by normalized form surfaces those near-duplicates
//!    for a human to fix.

mod report;
mod rules;

pub use report::*;
pub use rules::*;

use std::path::Path;

use crate::build::discover;
use crate::error::Result;

/// Validate every set and list file under `data_dir`.
pub fn validate_corpus(data_dir: &Path) -> Result<ValidationReport> {
    let found = discover(data_dir)?;
    let mut report = ValidationReport::default();
    let mut chapters = ChapterRegistry::default();

    for file in &found.sets {
        report.files_scanned += 1;
        match read_set(&file.path) {
            Ok(set) => {
                report.errors.extend(check_set(&file.path, &set));
                report.warnings.extend(check_declared_chapters(&file.path, &set));
                chapters.record_set(&set);
            }
            Err(message) => report.errors.push(Issue::file(&file.path, message)),
        }
    }

    for catalog in &found.catalogs {
        report.files_scanned += 1;
        report.errors.extend(check_catalog_file(&catalog.path));
    }

    for path in &found.ignored {
        report
            .warnings
            .push(Issue::file(path, "unexpected location, not served".to_string()));
    }

    report.chapter_variants = chapters.inconsistent();

    tracing::info!(
        files = report.files_scanned,
        errors = report.errors.len(),
        warnings = report.warnings.len() + report.chapter_variants.len(),
        "validation finished"
    );
    Ok(report)
}
