//! CLI module
//!
//! Command-line interface of the `posterous-backup` tool: backs up every site
//! of an account (or one site, with `--site-id`) into a local folder.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
