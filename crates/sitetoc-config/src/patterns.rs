//! Glob pattern compilation and matching.
//!
//! Compiles the document patterns of a source set into one matcher. Patterns match paths
//! relative to the source directory and `*` never crosses a path separator, so `*.md`
//! selects top-level files and `**/*.md` recurses.

use std::path::Path;

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::ConfigError;

/// Compiled glob patterns for efficient file matching.
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    /// The combined matcher.
    set: GlobSet,
}

impl CompiledPatterns {
    /// Compiles patterns into a single matcher.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(compile_glob(pattern.as_ref())?);
        }
        let set = builder.build().map_err(|e| ConfigError::InvalidPattern {
            pattern: "<combined patterns>".to_string(),
            source: e,
        })?;
        Ok(Self { set })
    }

    /// Checks if a path relative to the source directory matches any pattern.
    ///
    /// Returns `false` when no patterns were compiled.
    pub fn matches(&self, rel_path: &Path) -> bool {
        self.set.is_match(rel_path)
    }
}

/// Compiles a single glob pattern with literal path separators.
fn compile_glob(pattern: &str) -> Result<Glob, ConfigError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })
}
