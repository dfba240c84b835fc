//! Resolver configuration, usually read from `plugin-header.toml`.
//!
//! ```toml
//! debug = true
//! debug_log = true
//! platform_name = "WordPress"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Conventional config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "plugin-header.toml";

/// Settings for [`HeaderVersionResolver`](crate::HeaderVersionResolver).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Debug mode for the host environment.
    pub debug: bool,
    /// Write debug output to the log. Diagnostics need this and `debug`.
    pub debug_log: bool,
    /// Host platform name used in requirement messages.
    pub platform_name: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            debug: false,
            debug_log: false,
            platform_name: "WordPress".to_string(),
        }
    }
}

impl ResolverConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Whether fallback diagnostics should be logged.
    pub fn diagnostics_enabled(&self) -> bool {
        self.debug && self.debug_log
    }
}
