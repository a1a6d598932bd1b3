// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where question sets live on disk.
//!
//! ```text
//! <data>/quizzes/<exam>/<branch>/<key>.json     topic set
//! <data>/yearWise/<exam>/<branch>/<key>.json    year set
//! <data>/quizzes/<branch>/<key>.json            legacy, exam = "general"
//! <data>/<kind dir>/.../subjects.json           list file, never a set
//! <data>/<kind dir>/.../years.json              list file, never a set
//! ```
//!
//! Anything at another depth is skipped with a warning.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{QuizError, Result};
use crate::types::{QuizKind, SetKey};

/// Exam assigned to sets stored in the two-level legacy layout.
pub const LEGACY_EXAM: &str = "general";

const LIST_FILES: [&str; 2] = ["subjects.json", "years.json"];

/// A question-set file and the address it is served under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetFile {
    pub key: SetKey,
    pub path: PathBuf,
}

/// Identifies one `subjects.json` / `years.json`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CatalogKey {
    pub exam: String,
    pub branch: String,
    pub kind: QuizKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFile {
    pub key: CatalogKey,
    pub path: PathBuf,
}

/// Everything found under a data root.
#[derive(Debug, Clone, Default)]
pub struct Discovered {
    pub sets: Vec<SetFile>,
    pub catalogs: Vec<CatalogFile>,
    /// JSON files at an unexpected depth.
    pub ignored: Vec<PathBuf>,
}

enum Classified {
    Set(SetKey),
    Catalog(CatalogKey),
}

/// Work out what a JSON file is from its path below a kind directory.
fn classify(kind: QuizKind, components: &[&str]) -> Option<Classified> {
    let (exam, branch, file) = match components {
        [exam, branch, file] => (*exam, *branch, *file),
        [branch, file] => (LEGACY_EXAM, *branch, *file),
        _ => return None,
    };

    if LIST_FILES.contains(&file) {
        return Some(Classified::Catalog(CatalogKey {
            exam: exam.to_string(),
            branch: branch.to_string(),
            kind,
        }));
    }

    let key = file.strip_suffix(".json")?;
    Some(Classified::Set(SetKey::new(exam, branch, kind, key)))
}

/// Walk a data root and classify every JSON file in it.
///
/// Fails only if `data_dir` itself cannot be read. Missing kind directories
/// are fine (a bank may have no year-wise papers yet).
pub fn discover(data_dir: &Path) -> Result<Discovered> {
    if !data_dir.is_dir() {
        return Err(QuizError::data_unavailable(
            data_dir.display(),
            "not a directory",
        ));
    }

    let mut found = Discovered::default();
    for kind in [QuizKind::Topic, QuizKind::Year] {
        let root = data_dir.join(kind.data_dir());
        if !root.is_dir() {
            tracing::debug!(dir = %root.display(), "no {} directory", kind);
            continue;
        }

        let mut files = Vec::new();
        collect_json(&root, &mut files);
        files.sort();

        for path in files {
            let Ok(relative) = path.strip_prefix(&root) else {
                continue;
            };
            let components: Vec<&str> = relative
                .components()
                .filter_map(|c| c.as_os_str().to_str())
                .collect();

            match classify(kind, &components) {
                Some(Classified::Set(key)) => found.sets.push(SetFile { key, path }),
                Some(Classified::Catalog(key)) => found.catalogs.push(CatalogFile { key, path }),
                None => {
                    tracing::warn!(path = %path.display(), "unexpected data layout, skipping");
                    found.ignored.push(path);
                }
            }
        }
    }

    Ok(found)
}

fn collect_json(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "cannot read directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_json(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "json") {
            out.push(path);
        }
    }
}

/// Path a set is stored at. Legacy sets resolve to the two-level layout when
/// the three-level file does not exist.
pub fn set_path(data_dir: &Path, key: &SetKey) -> PathBuf {
    let file = format!("{}.json", key.key);
    let root = data_dir.join(key.kind.data_dir());
    let standard = root.join(&key.exam).join(&key.branch).join(&file);
    if key.exam == LEGACY_EXAM && !standard.exists() {
        let legacy = root.join(&key.branch).join(&file);
        if legacy.exists() {
            return legacy;
        }
    }
    standard
}

/// Path of the list file for `(exam, branch, kind)`.
pub fn catalog_path(data_dir: &Path, key: &CatalogKey) -> PathBuf {
    let root = data_dir.join(key.kind.data_dir());
    let standard = root.join(&key.exam).join(&key.branch).join(key.kind.list_file());
    if key.exam == LEGACY_EXAM && !standard.exists() {
        let legacy = root.join(&key.branch).join(key.kind.list_file());
        if legacy.exists() {
            return legacy;
        }
    }
    standard
}
