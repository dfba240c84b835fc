//! Diagnostic reporting for fallback paths.
//!
//! The resolver reports each fallback to an injected [`DiagnosticSink`] with a
//! [`DiagnosticReason`]. Sinks are observational: what they do never changes
//! a resolution result.

use std::fmt;
use std::path::Path;

use crate::config::ResolverConfig;

/// Why the resolver fell back to the default version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticReason {
    /// No usable file path was supplied.
    MissingPath,
    /// The file exists but could not be opened or read.
    FileUnreadable,
    /// The file does not exist.
    FileNotFound,
    /// The header carries no `Version` tag.
    VersionNotFound,
}

impl DiagnosticReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingPath => "missing_path",
            Self::FileUnreadable => "file_unreadable",
            Self::FileNotFound => "file_not_found",
            Self::VersionNotFound => "version_not_found",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingPath => "no plugin file path supplied, using default version",
            Self::FileUnreadable => "plugin file is not readable, using default version",
            Self::FileNotFound => "plugin file does not exist, using default version",
            Self::VersionNotFound => "plugin header has no Version tag, using default version",
        }
    }
}

impl fmt::Display for DiagnosticReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Receives resolver diagnostics.
pub trait DiagnosticSink {
    fn record(&self, reason: DiagnosticReason, path: Option<&Path>);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn record(&self, reason: DiagnosticReason, path: Option<&Path>) {
        (**self).record(reason, path)
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _reason: DiagnosticReason, _path: Option<&Path>) {}
}

/// Emits diagnostics as `tracing` warnings when debug logging is switched on.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink {
    enabled: bool,
}

impl TracingSink {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enabled only when both `debug` and `debug_log` are set.
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.diagnostics_enabled())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl DiagnosticSink for TracingSink {
    fn record(&self, reason: DiagnosticReason, path: Option<&Path>) {
        if !self.enabled {
            return;
        }
        match path {
            Some(path) => tracing::warn!(
                reason = reason.code(),
                path = %path.display(),
                "{}",
                reason.message()
            ),
            None => tracing::warn!(reason = reason.code(), "{}", reason.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes_are_distinct() {
        let reasons = [
            DiagnosticReason::MissingPath,
            DiagnosticReason::FileUnreadable,
            DiagnosticReason::FileNotFound,
            DiagnosticReason::VersionNotFound,
        ];
        let codes: std::collections::HashSet<_> = reasons.iter().map(|r| r.code()).collect();
        assert_eq!(codes.len(), reasons.len());
    }

    #[test]
    fn test_tracing_sink_gated_by_both_flags() {
        let mut config = ResolverConfig::default();
        assert!(!TracingSink::from_config(&config).is_enabled());

        config.debug = true;
        assert!(!TracingSink::from_config(&config).is_enabled());

        config.debug_log = true;
        assert!(TracingSink::from_config(&config).is_enabled());
    }

    #[test]
    fn test_tracing_sink_records_without_subscriber() {
        // No subscriber installed: recording must be a silent no-op
        TracingSink::new(true).record(DiagnosticReason::FileNotFound, Some(Path::new("x.php")));
        TracingSink::new(false).record(DiagnosticReason::MissingPath, None);
    }
}
