//! Error types for the sitetoc-index crate.

use std::{io, path::PathBuf};

use sitetoc_config::ConfigError;
use sitetoc_document::DocumentError;
use thiserror::Error;

/// A sidebar breaks its uniqueness invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SidebarError {
    /// Two categories share a name.
    #[error("duplicate category \"{name}\"")]
    DuplicateCategory {
        /// The repeated category name.
        name: String,
    },

    /// A document id appears more than once.
    #[error("document \"{id}\" is listed more than once")]
    DuplicateId {
        /// The repeated document id.
        id: String,
    },
}

/// Errors that can occur while building or writing a table of contents.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A sidebar declares a document with no matching source file.
    #[error("Cannot find file for \"{id}\". Does it exist in {}?", .source_dir.display())]
    MissingDocument {
        /// The declared document id.
        id: String,
        /// Directory the documents were collected from.
        source_dir: PathBuf,
    },

    /// Document ids given for ordering are not unique.
    #[error(transparent)]
    Sidebar(#[from] SidebarError),

    /// Failed to read a sidebar file.
    #[error("failed to read sidebar {path}: {source}")]
    ReadSidebar {
        /// Path to the sidebar file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A sidebar file is not a valid ordering document.
    #[error("failed to parse sidebar {path}: {source}")]
    ParseSidebar {
        /// Path to the sidebar file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The source directory does not exist or is not a directory.
    #[error("source directory does not exist: {path}")]
    SourceDirMissing {
        /// The missing directory.
        path: PathBuf,
    },

    /// Failed while walking a source directory.
    #[error("failed to read source directory {path}: {source}")]
    Walk {
        /// The directory being walked.
        path: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },

    /// A document lies outside the document root, so it has no href.
    #[error("document {path} is not under the document root {doc_root}")]
    OutsideDocRoot {
        /// The document path.
        path: PathBuf,
        /// The document root.
        doc_root: PathBuf,
    },

    /// Failed to extract a document.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to serialize an index.
    #[error("failed to serialize index {path}: {source}")]
    Serialize {
        /// The output path.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to write an index.
    #[error("failed to write index {path}: {source}")]
    WriteOutput {
        /// The output path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
