//! CLI argument definitions using clap
//!
//! Commands:
//! - stringlab serve [--port <port>]

use clap::{Parser, Subcommand};

/// stringlab - a minimal string analysis and storage service
#[derive(Parser, Debug)]
#[command(name = "stringlab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides the PORT environment variable)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
