//! CLI argument definitions using clap
//!
//! Commands:
//! - copstat serve --config <path> [--port <port>]
//! - copstat check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// copstat - HTTP API over NYPD complaint statistics
#[derive(Parser, Debug)]
#[command(name = "copstat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the dataset and start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./copstat.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load the dataset, print a summary, and exit
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./copstat.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
