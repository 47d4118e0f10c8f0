//! Table-of-contents index building for sitetoc.
//!
//! This crate turns one documentation source set into a navigation index:
//! - File collection from the source directory
//! - Ordering by the sidebar file, failing on any declared document without a file
//! - Per-document records (title, headers, href, category)
//! - Assembly into an ordered map keyed by URL path, serialized as JSON
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use sitetoc_config::Config;
//! use sitetoc_index::{RunOptions, run};
//!
//! let sources = Config::builtin(Path::new(".")).source_sets().unwrap();
//! let report = run(&sources, RunOptions::default()).unwrap();
//! for entry in &report.entries {
//!     println!("{}: {} documents", entry.label, entry.documents);
//! }
//! ```

#![warn(missing_docs)]

mod collect;
mod error;
mod order;
mod record;
mod sidebar;
mod toc;
mod writer;

pub use collect::collect_files;
pub use error::{IndexError, SidebarError};
pub use order::order_files;
pub use record::{DocumentRecord, href_for, process_file};
pub use sidebar::{Category, CategoryMap, SidebarSpec};
pub use toc::{TocEntry, TocIndex, assemble, url_path};
pub use writer::{
    BuiltIndex, ReportEntry, RunOptions, RunReport, build_index, run, to_json, write_index,
};
