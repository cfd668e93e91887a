//! CLI module for Linkboard
//!
//! Provides command-line interface parsing and handling for the linkboard-server binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod init;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Linkboard - LinkedIn dashboard server
///
/// Stores LinkedIn API credentials encrypted on disk, proxies and caches the
/// LinkedIn REST API and serves the dashboard's JSON API.
#[derive(Parser, Debug)]
#[command(
    name = "linkboard-server",
    version,
    about = "Linkboard - LinkedIn profile, content and engagement dashboard server",
    long_about = "Stores LinkedIn API credentials encrypted on disk, proxies and caches the\n\
                  LinkedIn REST API and serves the dashboard's JSON API.\n\n\
                  Run without arguments to start the server, or use 'init' to scaffold a new project.",
    after_help = "EXAMPLES:\n    \
                  linkboard-server init                  # Scaffold linkboard.toml, config/ and data/\n    \
                  linkboard-server                       # Start the server\n    \
                  linkboard-server config --validate     # Check the configuration\n    \
                  linkboard-server --config my.toml      # Use a custom config file"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "linkboard.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the API server (the default)
    Serve,

    /// Initialize a new Linkboard project
    ///
    /// Creates linkboard.toml, .env.example and the config/ and data/
    /// directories used for credentials and cached LinkedIn data.
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Host address for the server
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for the server
        #[arg(long, default_value = "8000")]
        port: u16,
    },

    /// Show the effective configuration
    Config {
        /// Only validate the configuration file
        #[arg(long)]
        validate: bool,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
