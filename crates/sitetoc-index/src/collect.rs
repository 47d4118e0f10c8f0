//! Source file collection.
//!
//! Walks a source directory and returns the documents matching a source set's patterns.
//! Collection order carries no meaning; the sidebar imposes the order later.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use sitetoc_config::CompiledPatterns;
use tracing::trace;
use walkdir::WalkDir;

use crate::IndexError;

/// Collects every regular file under `source_dir` whose relative path matches `patterns`.
///
/// Hidden entries are skipped. Symlinks to files are collected, symlinks to directories
/// are not followed and dangling symlinks are dropped. The result is sorted so logs are
/// reproducible.
pub fn collect_files(
    source_dir: &Path,
    patterns: &CompiledPatterns,
) -> Result<Vec<PathBuf>, IndexError> {
    if !source_dir.is_dir() {
        return Err(IndexError::SourceDirMissing {
            path: source_dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(source_dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

    for entry in walker {
        let entry = entry.map_err(|source| IndexError::Walk {
            path: source_dir.to_path_buf(),
            source,
        })?;

        let file_type = entry.file_type();
        if file_type.is_dir() || (file_type.is_symlink() && !entry.path().is_file()) {
            continue;
        }

        let Ok(rel_path) = entry.path().strip_prefix(source_dir) else {
            continue;
        };
        if !patterns.matches(rel_path) {
            trace!(path = %rel_path.display(), "skipping file not matching patterns");
            continue;
        }

        files.push(entry.into_path());
    }

    files.sort();
    Ok(files)
}

/// Checks if a filename represents a hidden file (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}
