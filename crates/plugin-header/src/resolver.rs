//! Header version resolution and the requirement gate.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;

use crate::DEFAULT_VERSION;
use crate::config::ResolverConfig;
use crate::diagnostics::{DiagnosticReason, DiagnosticSink, TracingSink};
use crate::environment::EnvironmentInfo;
use crate::header::{self, HeaderFields};
use crate::notice::{Notice, UnmetRequirement};

/// Outcome of [`HeaderVersionResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum Resolution {
    /// The plugin may load; carries its header version or the default.
    Version(String),
    /// A declared requirement is not met; activation should not proceed.
    Blocked(Notice),
}

impl Resolution {
    /// The resolved version, or `None` when blocked.
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Version(version) => Some(version),
            Self::Blocked(_) => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Version(_) => None,
            Self::Blocked(notice) => Some(notice),
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }
}

/// Reads a plugin header and gates it against the running environment.
#[derive(Debug, Clone)]
pub struct HeaderVersionResolver<S = TracingSink> {
    config: ResolverConfig,
    sink: S,
}

impl HeaderVersionResolver<TracingSink> {
    /// Resolver logging through `tracing` as the config's debug flags allow.
    pub fn new(config: ResolverConfig) -> Self {
        let sink = TracingSink::from_config(&config);
        Self { config, sink }
    }
}

impl Default for HeaderVersionResolver<TracingSink> {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl<S: DiagnosticSink> HeaderVersionResolver<S> {
    pub fn with_sink(config: ResolverConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Resolve the version of the plugin at `file_path`.
    ///
    /// Never fails: a missing path, an unusable file or a header without a
    /// `Version` tag all yield [`DEFAULT_VERSION`]. Only an unmet
    /// `Requires PHP` or `Requires at least` yields [`Resolution::Blocked`].
    pub fn resolve(&self, file_path: Option<&Path>, env: &EnvironmentInfo) -> Resolution {
        let Some(path) = file_path.filter(|p| is_usable_path(p)) else {
            self.sink.record(DiagnosticReason::MissingPath, None);
            return self.default_version();
        };

        let fields = match self.read_fields(path) {
            Some(fields) => fields,
            // File access failed; requirement checks are skipped
            None => return self.default_version(),
        };

        if let Some(notice) = self.check_requirements(&fields, env) {
            return Resolution::Blocked(notice);
        }

        match fields.version() {
            Some(version) => Resolution::Version(version.to_string()),
            None => {
                self.sink.record(DiagnosticReason::VersionNotFound, Some(path));
                self.default_version()
            }
        }
    }

    fn read_fields(&self, path: &Path) -> Option<HeaderFields> {
        match fs::metadata(path) {
            Ok(_) => {}
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                self.sink.record(DiagnosticReason::FileNotFound, Some(path));
                return None;
            }
            // Exists or may exist, but cannot be inspected (e.g. EACCES on a parent)
            Err(_) => {
                self.sink.record(DiagnosticReason::FileUnreadable, Some(path));
                return None;
            }
        }
        match header::read_prefix(path) {
            Ok(text) => Some(HeaderFields::extract(&text)),
            Err(_) => {
                self.sink.record(DiagnosticReason::FileUnreadable, Some(path));
                None
            }
        }
    }

    /// Compare declared minimums with the environment; absent tags always pass.
    fn check_requirements(&self, fields: &HeaderFields, env: &EnvironmentInfo) -> Option<Notice> {
        let php = fields
            .requires_php()
            .filter(|required| !env.runtime().satisfies_minimum(required));
        let platform = fields
            .requires_platform()
            .filter(|required| !env.platform().satisfies_minimum(required));

        let unmet = UnmetRequirement::from_failures(php, platform)?;
        Some(Notice::unmet_requirements(
            fields.plugin_name(),
            &unmet,
            &self.config.platform_name,
        ))
    }

    fn default_version(&self) -> Resolution {
        Resolution::Version(DEFAULT_VERSION.to_string())
    }
}

/// A path is usable when it is non-empty valid UTF-8.
fn is_usable_path(path: &Path) -> bool {
    path.to_str().is_some_and(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        reasons: RefCell<Vec<DiagnosticReason>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn record(&self, reason: DiagnosticReason, _path: Option<&Path>) {
            self.reasons.borrow_mut().push(reason);
        }
    }

    fn env() -> EnvironmentInfo {
        EnvironmentInfo::parse("8.1.0", "6.4.2").unwrap()
    }

    fn fields(text: &str) -> HeaderFields {
        HeaderFields::parse(text)
    }

    #[test]
    fn test_missing_path_defaults() {
        let sink = RecordingSink::default();
        let resolver = HeaderVersionResolver::with_sink(ResolverConfig::default(), &sink);

        assert_eq!(resolver.resolve(None, &env()), Resolution::Version("1.0.0".into()));
        assert_eq!(
            resolver.resolve(Some(Path::new("")), &env()),
            Resolution::Version("1.0.0".into())
        );
        assert_eq!(
            *sink.reasons.borrow(),
            vec![DiagnosticReason::MissingPath, DiagnosticReason::MissingPath]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_is_missing() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let sink = RecordingSink::default();
        let resolver = HeaderVersionResolver::with_sink(ResolverConfig::default(), &sink);
        let path = Path::new(OsStr::from_bytes(b"plugin-\xff.php"));

        assert_eq!(resolver.resolve(Some(path), &env()).version(), Some("1.0.0"));
        assert_eq!(*sink.reasons.borrow(), vec![DiagnosticReason::MissingPath]);
    }

    #[test]
    fn test_gate_passes_without_requirements() {
        let resolver = HeaderVersionResolver::with_sink(ResolverConfig::default(), NullSink);
        assert_eq!(resolver.check_requirements(&fields("Version: 1.0"), &env()), None);
    }

    #[test]
    fn test_gate_equal_version_passes() {
        let resolver = HeaderVersionResolver::with_sink(ResolverConfig::default(), NullSink);
        let header = fields("Requires PHP: 8.1\nRequires at least: 6.4.2\n");
        assert_eq!(resolver.check_requirements(&header, &env()), None);
    }

    #[test]
    fn test_gate_uses_configured_platform_name() {
        let config = ResolverConfig {
            platform_name: "ClassicPress".to_string(),
            ..ResolverConfig::default()
        };
        let resolver = HeaderVersionResolver::with_sink(config, NullSink);
        let notice = resolver
            .check_requirements(&fields("Requires at least: 9.0"), &env())
            .unwrap();
        assert!(notice.message().contains("ClassicPress version 9.0"));
    }

    #[test]
    fn test_resolution_accessors() {
        let ok = Resolution::Version("2.0.0".into());
        assert_eq!(ok.version(), Some("2.0.0"));
        assert!(ok.notice().is_none());
        assert!(!ok.is_blocked());

        let blocked = Resolution::Blocked(Notice::new("no", crate::Severity::Error));
        assert_eq!(blocked.version(), None);
        assert!(blocked.is_blocked());
        assert_eq!(blocked.notice().map(Notice::message), Some("no"));
    }
}
