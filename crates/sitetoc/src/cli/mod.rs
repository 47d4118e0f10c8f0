//! CLI support for the `sitetoc` binary.

pub mod args;
pub mod build;
pub mod context;
pub mod logging;
pub mod output;

pub use context::CommandContext;
