//! Clap argument definitions for the `sitetoc` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Top-level CLI options.
#[derive(Parser, Debug)]
#[command(name = "sitetoc")]
#[command(about = "Build table-of-contents indexes for versioned documentation")]
pub struct Cli {
    /// Site root containing pages/, data/ and index_data/ [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Configuration file [default: sitetoc.toml found from the root upwards]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Build every index without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}
