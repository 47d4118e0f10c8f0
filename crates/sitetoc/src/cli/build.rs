//! Implementation of the index build.

use std::process::ExitCode;

use sitetoc_index::{RunOptions, run as run_index};
use tracing::info;

use crate::cli::{context::CommandContext, output::summary_table};

/// Builds and writes every configured index, then prints a summary.
///
/// Nothing is written when any source set fails.
pub fn run(ctx: &CommandContext, options: RunOptions) -> ExitCode {
    let sources = match ctx.config.source_sets() {
        Ok(sources) => sources,
        Err(e) => {
            eprintln!("error: invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(count = sources.len(), dry_run = options.dry_run, "building indexes");

    let report = match run_index(&sources, options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", summary_table(&report, &ctx.root));
    ExitCode::SUCCESS
}
