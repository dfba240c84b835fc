//! Error types for plugin-header-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from plugin-header
    #[error(transparent)]
    Header(#[from] plugin_header::Error),

    /// JSON output failed
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be initialised
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
