//! CLI module
//!
//! Command-line interface for running the connector.
//!
//! Options resolve flag, then environment variable, then default. Records go
//! to stdout (or `--output`); logs go to stderr.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
