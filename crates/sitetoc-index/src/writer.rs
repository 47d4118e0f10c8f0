//! Index building and writing.
//!
//! A run builds the index of every source set in memory first. Files are only written once
//! all of them built, so a build failure leaves every output untouched. Writing itself is
//! not transactional: if one write fails, indexes written before it stay on disk.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use sitetoc_config::{CompiledPatterns, SourceSet};
use tracing::{info, info_span};

use crate::{
    IndexError, SidebarSpec, TocIndex, assemble, collect_files, order_files, process_file,
};

/// The index of one source set, built but not yet written.
#[derive(Debug, Clone)]
pub struct BuiltIndex {
    /// The source set the index was built from.
    pub source: SourceSet,
    /// The assembled table of contents.
    pub toc: TocIndex,
}

/// Options for [`run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Build every index but write nothing.
    pub dry_run: bool,
}

/// Outcome for one source set of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Source set label.
    pub label: String,
    /// Number of documents in the index.
    pub documents: usize,
    /// Output path.
    pub output: PathBuf,
    /// Whether the file was written.
    pub written: bool,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// One entry per source set, in processing order.
    pub entries: Vec<ReportEntry>,
}

/// Builds the table of contents for one source set without writing it.
///
/// Loads the sidebar, collects the source files, orders them by the sidebar and turns each
/// into a record.
pub fn build_index(source: &SourceSet) -> Result<BuiltIndex, IndexError> {
    let span = info_span!("source_set", label = %source.label);
    let _enter = span.enter();

    let sidebar = SidebarSpec::load(&source.sidebar)?;
    let patterns = CompiledPatterns::compile(&source.patterns)?;
    let files = collect_files(&source.source_dir, &patterns)?;
    let ordered = order_files(&sidebar.flatten(), &files, &source.source_dir)?;

    let categories = sidebar.category_map();
    let records = ordered
        .iter()
        .map(|path| process_file(path, &source.doc_root, &categories))
        .collect::<Result<Vec<_>, _>>()?;

    let toc = assemble(records);
    info!(
        collected = files.len(),
        documents = toc.len(),
        "built table of contents"
    );

    Ok(BuiltIndex {
        source: source.clone(),
        toc,
    })
}

/// Serializes an index as compact JSON.
pub fn to_json(toc: &TocIndex) -> Result<String, serde_json::Error> {
    serde_json::to_string(toc)
}

/// Writes a built index to its output path, creating parent directories as needed.
pub fn write_index(built: &BuiltIndex) -> Result<(), IndexError> {
    let path = &built.source.output;
    let json = to_json(&built.toc).map_err(|source| IndexError::Serialize {
        path: path.clone(),
        source,
    })?;

    write_file(path, &json)?;
    info!(label = %built.source.label, path = %path.display(), "wrote index");
    Ok(())
}

/// Writes `contents` to `path`, creating the parent directory first.
fn write_file(path: &Path, contents: &str) -> Result<(), IndexError> {
    let write_error = |source: io::Error| IndexError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, contents).map_err(write_error)
}

/// Builds every source set, then writes them all.
///
/// Any build failure aborts the run before a single file is written. A write failure stops
/// the run at that index; earlier indexes of the run are already written.
pub fn run(sources: &[SourceSet], options: RunOptions) -> Result<RunReport, IndexError> {
    let built = sources
        .iter()
        .map(build_index)
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = RunReport::default();
    for index in &built {
        if !options.dry_run {
            write_index(index)?;
        }
        report.entries.push(ReportEntry {
            label: index.source.label.clone(),
            documents: index.toc.len(),
            output: index.source.output.clone(),
            written: !options.dry_run,
        });
    }

    Ok(report)
}
