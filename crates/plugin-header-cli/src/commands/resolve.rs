//! Implementation of the `resolve` command

use std::path::Path;

use colored::Colorize;
use plugin_header::{EnvironmentInfo, HeaderVersionResolver, Resolution, ResolverConfig};

use super::EXIT_BLOCKED;
use crate::error::Result;

/// Resolve the plugin at `file` and report the outcome.
///
/// Returns the process exit code: `0` when a version was resolved,
/// [`EXIT_BLOCKED`] when a requirement is not met.
pub fn run_resolve(
    config: ResolverConfig,
    file: Option<&Path>,
    php: &str,
    platform: &str,
    json: bool,
) -> Result<i32> {
    let env = EnvironmentInfo::parse(php, platform)?;
    tracing::debug!(php = %env.runtime(), platform = %env.platform(), "Resolving plugin header");

    let resolver = HeaderVersionResolver::new(config);
    let resolution = resolver.resolve(file, &env);

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        match &resolution {
            Resolution::Version(version) => println!("{version}"),
            Resolution::Blocked(notice) => {
                eprintln!("{}: {}", "blocked".yellow().bold(), notice.message());
            }
        }
    }

    Ok(if resolution.is_blocked() { EXIT_BLOCKED } else { 0 })
}
