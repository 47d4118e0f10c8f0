//! Sidebar-order resolution.
//!
//! Matches collected files to the document ids declared by a sidebar and returns them in
//! navigation order. Filesystem enumeration order never reaches the output.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{IndexError, SidebarError};

/// Orders `files` by the declared `ids`, one file per id.
///
/// Each file is matched by its filename stem. Files whose stem is not declared are ignored.
/// When two files share a declared stem, the one collected last wins. Fails with
/// [`SidebarError::DuplicateId`] if an id is declared twice, and with
/// [`IndexError::MissingDocument`] naming the first declared id without a file.
pub fn order_files(
    ids: &[&str],
    files: &[PathBuf],
    source_dir: &Path,
) -> Result<Vec<PathBuf>, IndexError> {
    let mut slots: Vec<(&str, Option<&PathBuf>)> = ids.iter().map(|id| (*id, None)).collect();
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(ids.len());
    for (i, id) in ids.iter().enumerate() {
        if positions.insert(*id, i).is_some() {
            return Err(SidebarError::DuplicateId {
                id: (*id).to_string(),
            }
            .into());
        }
    }

    for file in files {
        let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Some(&position) = positions.get(stem) else {
            debug!(path = %file.display(), "ignoring document not listed in the sidebar");
            continue;
        };
        let slot = &mut slots[position].1;
        if let Some(previous) = slot.replace(file) {
            warn!(
                id = stem,
                ignored = %previous.display(),
                used = %file.display(),
                "several files share a sidebar id"
            );
        }
    }

    slots
        .into_iter()
        .map(|(id, file)| {
            file.cloned().ok_or_else(|| IndexError::MissingDocument {
                id: id.to_string(),
                source_dir: source_dir.to_path_buf(),
            })
        })
        .collect()
}
