//! Command-line interface for the `sitetoc` index builder.

use std::process::ExitCode;

use clap::Parser;
use sitetoc::cli::{CommandContext, args::Cli, build, logging};
use sitetoc_index::RunOptions;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = match CommandContext::load(&cli) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    build::run(
        &ctx,
        RunOptions {
            dry_run: cli.dry_run,
        },
    )
}
