//! Configuration system for sitetoc.
//!
//! A configuration lists documentation families (manual, react, community, ...) and their
//! versions. Each version expands into a [`SourceSet`]: the source directory, the sidebar
//! file and the output path for one table of contents. Paths follow a naming convention
//! keyed by the version string with its dots removed:
//!
//! - sidebar: `<data>/sidebar_<family>_<key>.json`
//! - output: `<output>/<family>_<key>_toc.json`
//!
//! Unversioned families drop the `_<key>` part. Configuration comes either from the
//! built-in layout ([`Config::builtin`]) or from a `sitetoc.toml` file ([`Config::load`]).

#![warn(missing_docs)]

mod discovery;
mod error;
mod parse;
mod patterns;
#[cfg(test)]
mod test_support;

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config};
pub use error::ConfigError;
pub use parse::{RawConfig, RawFamily, default_patterns, parse_config, parse_config_file};
pub use patterns::CompiledPatterns;

/// Placeholder substituted with the version string in source templates.
const VERSION_PLACEHOLDER: &str = "{version}";

/// Resolved configuration for one sitetoc run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory family source templates resolve against.
    pub base_dir: PathBuf,
    /// Document root; hrefs are computed relative to it.
    pub doc_root: PathBuf,
    /// Directory holding the sidebar files.
    pub data_dir: PathBuf,
    /// Directory the indexes are written to.
    pub output_dir: PathBuf,
    /// Families in processing order.
    pub families: Vec<Family>,
}

/// A documentation family sharing one source layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    /// Family name.
    pub name: String,
    /// Source directory template, relative to [`Config::base_dir`]; may contain
    /// `{version}`.
    pub source: String,
    /// Glob patterns selecting documents within the source directory.
    pub patterns: Vec<String>,
    /// Versions, in processing order. Empty for an unversioned family.
    pub versions: Vec<String>,
}

/// Everything needed to build one table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSet {
    /// Family name.
    pub family: String,
    /// Version string, for versioned families.
    pub version: Option<String>,
    /// File key, e.g. `manual_v1200` or `community`.
    pub label: String,
    /// Directory the documents are collected from.
    pub source_dir: PathBuf,
    /// Document root that hrefs are relative to.
    pub doc_root: PathBuf,
    /// Sidebar ordering file.
    pub sidebar: PathBuf,
    /// Output JSON path.
    pub output: PathBuf,
    /// Glob patterns selecting documents within `source_dir`.
    pub patterns: Vec<String>,
}

impl Config {
    /// Returns the built-in layout rooted at `root`.
    ///
    /// - manual `v12.0.0` to `v8.0.0` from `pages/docs/manual/<version>`
    /// - react `latest`, `v0.10.0`, `v0.11.0` from `pages/docs/react/<version>`
    /// - community (unversioned) from `pages/community`
    pub fn builtin(root: &Path) -> Self {
        let versions =
            |vs: &[&str]| -> Vec<String> { vs.iter().map(|v| (*v).to_string()).collect() };
        Self {
            base_dir: root.to_path_buf(),
            doc_root: root.join("pages"),
            data_dir: root.join("data"),
            output_dir: root.join("index_data"),
            families: vec![
                Family {
                    name: "manual".into(),
                    source: "pages/docs/manual/{version}".into(),
                    patterns: default_patterns(),
                    versions: versions(&["v12.0.0", "v11.0.0", "v10.0.0", "v9.0.0", "v8.0.0"]),
                },
                Family {
                    name: "react".into(),
                    source: "pages/docs/react/{version}".into(),
                    patterns: vec!["*.md".into(), "*.mdx".into()],
                    versions: versions(&["latest", "v0.10.0", "v0.11.0"]),
                },
                Family {
                    name: "community".into(),
                    source: "pages/community".into(),
                    patterns: default_patterns(),
                    versions: Vec::new(),
                },
            ],
        }
    }

    /// Loads configuration from a `sitetoc.toml` file.
    ///
    /// Relative paths resolve against the directory containing the file. Missing top-level
    /// directories default to `pages`, `data` and `index_data`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = parse_config_file(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_raw(raw, base)
    }

    /// Resolves a raw configuration against a base directory.
    pub fn from_raw(raw: RawConfig, base: &Path) -> Result<Self, ConfigError> {
        if raw.family.is_empty() {
            return Err(ConfigError::NoFamilies);
        }

        let resolve = |value: Option<String>, default: &str| {
            base.join(value.as_deref().unwrap_or(default))
        };

        let families = raw
            .family
            .into_iter()
            .map(|f| Family {
                name: f.name,
                source: f.source,
                patterns: f.patterns,
                versions: f.versions,
            })
            .collect();

        Ok(Self {
            base_dir: base.to_path_buf(),
            doc_root: resolve(raw.pages, "pages"),
            data_dir: resolve(raw.data, "data"),
            output_dir: resolve(raw.output, "index_data"),
            families,
        })
    }

    /// Expands families into source sets, in declaration order.
    ///
    /// Fails on malformed source templates, invalid patterns, or when two source sets
    /// would share a label (and therefore an output file).
    pub fn source_sets(&self) -> Result<Vec<SourceSet>, ConfigError> {
        let mut sets = Vec::new();
        let mut seen = HashSet::new();

        for family in &self.families {
            CompiledPatterns::compile(&family.patterns)?;
            let template = family.source.as_str();
            check_placeholders(template)?;

            let versions: Vec<Option<&str>> = if family.versions.is_empty() {
                if template.contains(VERSION_PLACEHOLDER) {
                    return Err(ConfigError::UnversionedPlaceholder {
                        family: family.name.clone(),
                    });
                }
                vec![None]
            } else {
                family.versions.iter().map(|v| Some(v.as_str())).collect()
            };

            for version in versions {
                let label = match version {
                    Some(v) => format!("{}_{}", family.name, version_key(v)),
                    None => family.name.clone(),
                };
                if !seen.insert(label.clone()) {
                    return Err(ConfigError::DuplicateLabel { label });
                }

                let source_dir = match version {
                    Some(v) => self.base_dir.join(template.replace(VERSION_PLACEHOLDER, v)),
                    None => self.base_dir.join(template),
                };

                sets.push(SourceSet {
                    family: family.name.clone(),
                    version: version.map(str::to_string),
                    sidebar: self.data_dir.join(format!("sidebar_{label}.json")),
                    output: self.output_dir.join(format!("{label}_toc.json")),
                    label,
                    source_dir,
                    doc_root: self.doc_root.clone(),
                    patterns: family.patterns.clone(),
                });
            }
        }

        Ok(sets)
    }
}

/// Returns the file key for a version: the version string with all dots removed.
pub fn version_key(version: &str) -> String {
    version.replace('.', "")
}

/// Rejects any `{...}` placeholder other than `{version}`.
fn check_placeholders(template: &str) -> Result<(), ConfigError> {
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start..];
        let end = after.find('}').map_or(after.len(), |i| i + 1);
        let placeholder = &after[..end];
        if placeholder != VERSION_PLACEHOLDER {
            return Err(ConfigError::UnknownPlaceholder {
                template: template.to_string(),
                placeholder: placeholder.to_string(),
            });
        }
        rest = &after[end..];
    }
    Ok(())
}
