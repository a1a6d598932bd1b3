// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel loading of the question bank.
//!
//! Reading a few hundred small JSON files is embarrassingly parallel, so the
//! corpus load is a `par_iter()` over the discovered files. A file that fails
//! to read or parse is logged, recorded in [`Corpus::skipped`] and left out;
//! one bad paper must not take the whole search index down with it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{QuizError, Result};
use crate::types::{CatalogEntry, QuestionSet, QuizKind, SetKey};

use super::layout::{catalog_path, discover, set_path, CatalogKey, Discovered, SetFile};

/// A file left out of the corpus and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Every question set and list file under a data root.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub sets: BTreeMap<SetKey, QuestionSet>,
    pub catalogs: BTreeMap<CatalogKey, Vec<CatalogEntry>>,
    pub skipped: Vec<SkippedFile>,
}

impl Corpus {
    pub fn question_count(&self) -> usize {
        self.sets.values().map(QuestionSet::len).sum()
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> std::result::Result<T, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("failed to read: {}", e))?;
    serde_json::from_str(&content).map_err(|e| format!("invalid JSON: {}", e))
}

/// Load one set by address.
pub fn load_set(data_dir: &Path, key: &SetKey) -> Result<QuestionSet> {
    let path = set_path(data_dir, key);
    read_json(&path).map_err(|reason| QuizError::data_unavailable(key, reason))
}

/// Load the `subjects.json` / `years.json` list for an exam branch.
pub fn load_catalog(
    data_dir: &Path,
    exam: &str,
    branch: &str,
    kind: QuizKind,
) -> Result<Vec<CatalogEntry>> {
    let key = CatalogKey {
        exam: exam.to_string(),
        branch: branch.to_string(),
        kind,
    };
    let path = catalog_path(data_dir, &key);
    read_json(&path).map_err(|reason| {
        QuizError::data_unavailable(format!("{}/{}/{}", exam, branch, kind.list_file()), reason)
    })
}

/// Load every set under `data_dir`.
pub fn load_corpus(data_dir: &Path) -> Result<Corpus> {
    let found = discover(data_dir)?;
    Ok(assemble(found, || {}))
}

/// [`load_corpus`] with a progress bar ticking once per set file.
#[cfg(feature = "parallel")]
pub fn load_corpus_with_progress(data_dir: &Path, progress: &ProgressBar) -> Result<Corpus> {
    let found = discover(data_dir)?;
    progress.set_length(found.sets.len() as u64);
    let corpus = assemble(found, || progress.inc(1));
    progress.finish_with_message(format!("loaded {} sets", corpus.sets.len()));
    Ok(corpus)
}

fn assemble<F: Fn() + Sync>(found: Discovered, tick: F) -> Corpus {
    let parsed = parse_sets(&found.sets, &tick);

    let mut corpus = Corpus::default();
    for (file, result) in found.sets.into_iter().zip(parsed) {
        match result {
            Ok(set) => {
                if corpus.sets.insert(file.key.clone(), set).is_some() {
                    tracing::warn!(set = %file.key, path = %file.path.display(), "duplicate set address, later file wins");
                }
            }
            Err(reason) => {
                tracing::warn!(path = %file.path.display(), %reason, "skipping question set");
                corpus.skipped.push(SkippedFile {
                    path: file.path,
                    reason,
                });
            }
        }
    }

    for catalog in found.catalogs {
        match read_json::<Vec<CatalogEntry>>(&catalog.path) {
            Ok(entries) => {
                corpus.catalogs.insert(catalog.key, entries);
            }
            Err(reason) => {
                tracing::warn!(path = %catalog.path.display(), %reason, "skipping list file");
                corpus.skipped.push(SkippedFile {
                    path: catalog.path,
                    reason,
                });
            }
        }
    }

    tracing::info!(
        sets = corpus.sets.len(),
        questions = corpus.question_count(),
        catalogs = corpus.catalogs.len(),
        skipped = corpus.skipped.len(),
        "corpus loaded"
    );
    corpus
}

#[cfg(feature = "parallel")]
fn parse_sets<F: Fn() + Sync>(
    files: &[SetFile],
    tick: &F,
) -> Vec<std::result::Result<QuestionSet, String>> {
    files
        .par_iter()
        .map(|file| {
            let result = read_json(&file.path);
            tick();
            result
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn parse_sets<F: Fn() + Sync>(
    files: &[SetFile],
    tick: &F,
) -> Vec<std::result::Result<QuestionSet, String>> {
    files
        .iter()
        .map(|file| {
            let result = read_json(&file.path);
            tick();
            result
        })
        .collect()
}
