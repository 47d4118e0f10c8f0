//! Configuration file parsing.
//!
//! Parses `sitetoc.toml` files into intermediate `RawConfig` structures that keep the
//! optional nature of all fields before defaults and paths are resolved.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// Document root that hrefs are relative to.
    pub pages: Option<String>,
    /// Directory holding the sidebar files.
    pub data: Option<String>,
    /// Directory the indexes are written to.
    pub output: Option<String>,
    /// Documentation families, in processing order.
    pub family: Vec<RawFamily>,
}

/// Raw family definition from TOML.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFamily {
    /// Family name, used as the file key for sidebars and outputs.
    pub name: String,
    /// Source directory template; may contain `{version}`.
    pub source: String,
    /// Glob pattern(s) selecting documents within the source directory.
    /// Accepts either a single string or an array of strings.
    #[serde(default = "default_patterns")]
    #[serde_as(as = "OneOrMany<_>")]
    pub patterns: Vec<String>,
    /// Versions of this family; empty for an unversioned family.
    #[serde(default)]
    pub versions: Vec<String>,
}

/// Patterns used when a family does not list its own.
pub fn default_patterns() -> Vec<String> {
    vec!["*.js".into(), "*.md".into(), "*.mdx".into()]
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, path)
}

/// Parses configuration from a string.
///
/// The `path` parameter is used only for error messages.
pub fn parse_config(content: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
