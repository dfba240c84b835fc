//! Command implementations for plugin-header-cli

pub mod fields;
pub mod resolve;

use std::path::Path;

use plugin_header::ResolverConfig;
use plugin_header::config::CONFIG_FILENAME;

use crate::error::Result;

pub use fields::run_fields;
pub use resolve::run_resolve;

/// Exit code used when a plugin's requirements are not met.
pub const EXIT_BLOCKED: i32 = 3;

/// Build the resolver config from an explicit file, `./plugin-header.toml`,
/// or defaults, then apply command-line debug overrides.
pub fn load_config(
    explicit: Option<&Path>,
    cwd: &Path,
    debug: bool,
    debug_log: bool,
) -> Result<ResolverConfig> {
    let mut config = match explicit {
        Some(path) => ResolverConfig::load(path)?,
        None => {
            let implicit = cwd.join(CONFIG_FILENAME);
            if implicit.is_file() {
                tracing::debug!("Using config {}", implicit.display());
                ResolverConfig::load(&implicit)?
            } else {
                ResolverConfig::default()
            }
        }
    };

    config.debug |= debug;
    config.debug_log |= debug_log;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let config = load_config(None, temp.path(), false, false).unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_load_config_picks_up_implicit_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            "platform_name = \"ClassicPress\"\n",
        )
        .unwrap();

        let config = load_config(None, temp.path(), false, false).unwrap();
        assert_eq!(config.platform_name, "ClassicPress");
    }

    #[test]
    fn test_load_config_flags_override_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "debug = false\ndebug_log = true\n").unwrap();

        let config = load_config(Some(&path), temp.path(), true, false).unwrap();
        assert!(config.debug);
        assert!(config.debug_log);
    }

    #[test]
    fn test_load_config_explicit_missing_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");
        assert!(load_config(Some(&missing), temp.path(), false, false).is_err());
    }
}
