//! Shared context for running the CLI.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use sitetoc_config::{Config, discover_config};
use tracing::info;

use super::args::Cli;

/// Command execution context built once per CLI invocation.
#[derive(Debug)]
pub struct CommandContext {
    /// Site root; the built-in layout and config discovery start here.
    pub root: PathBuf,
    /// Configuration file in use, if any.
    pub config_path: Option<PathBuf>,
    /// Loaded configuration (the built-in layout if no file was found).
    pub config: Config,
}

impl CommandContext {
    /// Resolves the site root and loads configuration.
    ///
    /// An explicit `--config` wins, then a discovered `sitetoc.toml`, then the built-in
    /// layout rooted at the site root.
    pub fn load(cli: &Cli) -> Result<Self, ExitCode> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => current_dir_or_failure()?,
        };

        let config_path = cli.config.clone().or_else(|| discover_config(&root));
        let config = match &config_path {
            Some(path) => {
                info!(path = %path.display(), "loading configuration");
                load_config_or_failure(path)?
            }
            None => {
                info!(root = %root.display(), "using built-in layout");
                Config::builtin(&root)
            }
        };

        Ok(Self {
            root,
            config_path,
            config,
        })
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided file or exits with an error.
fn load_config_or_failure(path: &Path) -> Result<Config, ExitCode> {
    Config::load(path).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
