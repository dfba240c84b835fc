//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Plugin Header - Resolve plugin versions and check their requirements
#[derive(Parser, Debug)]
#[command(name = "plugin-header")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Resolver config file (defaults to ./plugin-header.toml when present)
    #[arg(short, long, global = true, env = "PLUGIN_HEADER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug mode
    #[arg(long, global = true, env = "PLUGIN_HEADER_DEBUG")]
    pub debug: bool,

    /// Log fallback diagnostics (only takes effect together with --debug)
    #[arg(long, global = true, env = "PLUGIN_HEADER_DEBUG_LOG")]
    pub debug_log: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve a plugin's version, checking its PHP and platform requirements
    ///
    /// Prints the version and exits 0, or prints the requirement notice and
    /// exits 3 when activation should be blocked.
    ///
    /// Examples:
    ///   plugin-header resolve my-plugin.php --php 8.2.12 --platform 6.5
    ///   plugin-header resolve my-plugin.php --php 7.4 --platform 6.2 --json
    Resolve {
        /// Main plugin file
        file: Option<PathBuf>,

        /// Running PHP version
        #[arg(long, env = "PLUGIN_HEADER_PHP_VERSION")]
        php: String,

        /// Running host platform version
        #[arg(long, env = "PLUGIN_HEADER_PLATFORM_VERSION")]
        platform: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show every recognised header field in a plugin file
    Fields {
        /// Main plugin file
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
