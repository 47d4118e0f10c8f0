//! Configuration file discovery.
//!
//! Finds `sitetoc.toml` by walking up the directory tree from a starting point.

use std::path::{Path, PathBuf};

/// The configuration filename.
pub const CONFIG_FILENAME: &str = "sitetoc.toml";

/// Discovers the configuration file relevant to the given directory.
///
/// Walks up from `cwd` to the filesystem root and returns the first `sitetoc.toml` found.
/// Returns `None` when there is none, in which case the built-in layout applies.
pub fn discover_config(cwd: &Path) -> Option<PathBuf> {
    cwd.ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn test_discover_no_config() {
        let test_dir = TestDir::new();
        let subdir = test_dir.create_dir("a/b/c");

        let found = discover_config(&subdir);

        // Anything found must live above the temp dir
        if let Some(path) = found {
            assert!(!path.starts_with(test_dir.path()));
        }
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let test_dir = TestDir::new();
        let config = test_dir.create_config_at_root();
        let subdir = test_dir.create_dir("pages/docs");

        assert_eq!(discover_config(&subdir), Some(config));
    }

    #[test]
    fn test_closest_config_wins() {
        let test_dir = TestDir::new();
        let _outer = test_dir.create_config_at_root();
        let inner = test_dir.create_config("site");
        let working_dir = test_dir.create_dir("site/pages");

        assert_eq!(discover_config(&working_dir), Some(inner));
    }

    #[test]
    fn test_discover_skips_non_file_config() {
        let test_dir = TestDir::new();
        fs::create_dir_all(test_dir.path().join(CONFIG_FILENAME)).unwrap();
        let subdir = test_dir.create_dir("subdir");

        let found = discover_config(&subdir);
        assert!(found.is_none_or(|p| !p.starts_with(test_dir.path())));
    }
}
