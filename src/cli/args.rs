//! CLI argument definitions using clap
//!
//! Commands:
//! - veritype list
//! - veritype describe <schema>
//! - veritype validate <schema> <record> [--wire]

use clap::{Parser, Subcommand};

/// veritype - a strict, introspectable record validation engine
#[derive(Parser, Debug)]
#[command(name = "veritype")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the registered showcase schemas
    List,

    /// Print the structural description of a schema
    Describe {
        /// Schema name (see `list`)
        schema: String,
    },

    /// Validate a JSON record against a schema and print the outcome
    Validate {
        /// Schema name (see `list`)
        schema: String,

        /// The raw record, as a JSON object literal
        record: String,

        /// Emit the normalized record under wire aliases
        #[arg(long)]
        wire: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
