use std::path::PathBuf;

/// Errors raised at the fallible edges of plugin-header.
///
/// [`HeaderVersionResolver::resolve`](crate::HeaderVersionResolver::resolve)
/// never returns these; it degrades to a default instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to parse the resolver configuration TOML.
    #[error("failed to parse resolver config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Resolver configuration file not found at the expected path.
    #[error("resolver config not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// A version string with no leading numeric component.
    #[error("invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    /// I/O error reading a plugin or config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_version(version: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
