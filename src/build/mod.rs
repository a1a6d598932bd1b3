// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Load the question bank from disk and build the search index from it.

pub mod layout;
pub mod loader;

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::error::{QuizError, Result};
use crate::index::{build_search_index, SearchIndex};

pub use layout::*;
pub use loader::*;

/// Create a progress style for the main progress bars
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Load a corpus (with progress bars when available), build its index and
/// optionally write the records to `output` as JSON.
pub fn run_index(data_dir: &Path, output: Option<&Path>) -> Result<(Corpus, SearchIndex)> {
    #[cfg(feature = "parallel")]
    let corpus = {
        let multi = MultiProgress::new();
        let load_pb = multi.add(ProgressBar::new(0));
        load_pb.set_style(create_progress_style());
        load_pb.set_prefix("Loading");
        load_pb.set_message("question sets...");
        load_corpus_with_progress(data_dir, &load_pb)?
    };

    #[cfg(not(feature = "parallel"))]
    let corpus = load_corpus(data_dir)?;

    if corpus.sets.is_empty() {
        eprintln!("⚠️  No question sets found under {}", data_dir.display());
    }

    let index = build_search_index(&corpus.sets);

    if let Some(path) = output {
        write_snapshot(path, &index)?;
    }

    eprintln!();
    eprintln!("✅ Index built");
    eprintln!(
        "   {} sets │ {} questions │ {} list files │ {} skipped",
        index.set_count(),
        index.len(),
        corpus.catalogs.len(),
        corpus.skipped.len()
    );
    for skipped in &corpus.skipped {
        eprintln!("   ⚠️  {}: {}", skipped.path.display(), skipped.reason);
    }

    Ok((corpus, index))
}

/// Write every record of `index` as a pretty-printed JSON array.
pub fn write_snapshot(path: &Path, index: &SearchIndex) -> Result<()> {
    let to_write_error = |reason: String| QuizError::Write {
        path: path.display().to_string(),
        reason,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| to_write_error(e.to_string()))?;
    }
    let json = serde_json::to_string_pretty(index.records()).map_err(|e| to_write_error(e.to_string()))?;
    fs::write(path, json).map_err(|e| to_write_error(e.to_string()))?;
    tracing::info!(path = %path.display(), records = index.len(), "index snapshot written");
    Ok(())
}
