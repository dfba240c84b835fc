//! Plugin Header CLI
//!
//! Resolves plugin versions from header comments and checks their
//! PHP and platform requirements.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Commands::Resolve {
            file,
            php,
            platform,
            json,
        } => {
            let cwd = std::env::current_dir().map_err(plugin_header::Error::from)?;
            let config =
                commands::load_config(cli.config.as_deref(), &cwd, cli.debug, cli.debug_log)?;
            commands::run_resolve(config, file.as_deref(), &php, &platform, json)
        }
        Commands::Fields { file, json } => commands::run_fields(&file, json),
    }
}
