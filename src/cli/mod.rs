//! CLI module for veritype
//!
//! Provides the command-line driver for the showcase catalog:
//! - list: show the registered schemas
//! - describe: print a schema's structural description
//! - validate: validate a raw JSON record and print the outcome

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
