//! Error types for document extraction.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when extracting metadata from documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Unsupported file type.
    #[error("unsupported file type: {path}")]
    UnsupportedFileType {
        /// Path to the unsupported file.
        path: PathBuf,
    },

    /// A delimited frontmatter block is not valid YAML.
    #[error("invalid frontmatter in {path}: {source}")]
    Frontmatter {
        /// Path to the document carrying the frontmatter.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
}
