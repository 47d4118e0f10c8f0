//! Error types for sitetoc configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or expanding configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// Failed to compile a glob pattern.
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The invalid pattern.
        pattern: String,
        /// Underlying glob error.
        source: globset::Error,
    },

    /// A source template uses a placeholder other than `{version}`.
    #[error("unknown placeholder '{placeholder}' in source template '{template}'")]
    UnknownPlaceholder {
        /// The offending template.
        template: String,
        /// The placeholder found.
        placeholder: String,
    },

    /// An unversioned family uses `{version}` in its source template.
    #[error("family '{family}' has no versions but its source uses {{version}}")]
    UnversionedPlaceholder {
        /// Name of the family.
        family: String,
    },

    /// Two source sets would write the same index.
    #[error("duplicate source set '{label}'")]
    DuplicateLabel {
        /// The label produced twice.
        label: String,
    },

    /// The configuration defines no families.
    #[error("configuration defines no families")]
    NoFamilies,
}
