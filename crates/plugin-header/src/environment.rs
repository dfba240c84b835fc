//! Snapshot of the running environment's versions.

use crate::error::Result;
use crate::version::PlatformVersion;

/// Runtime (PHP) and host platform versions the requirement gate compares against.
///
/// Supplied by the caller; the resolver never inspects the process or host itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentInfo {
    runtime: PlatformVersion,
    platform: PlatformVersion,
}

impl EnvironmentInfo {
    pub fn new(runtime: PlatformVersion, platform: PlatformVersion) -> Self {
        Self { runtime, platform }
    }

    /// Parse both versions, failing if either has no numeric component.
    pub fn parse(runtime: &str, platform: &str) -> Result<Self> {
        Ok(Self {
            runtime: runtime.parse()?,
            platform: platform.parse()?,
        })
    }

    /// The running PHP interpreter version.
    pub fn runtime(&self) -> &PlatformVersion {
        &self.runtime
    }

    /// The running host platform version.
    pub fn platform(&self) -> &PlatformVersion {
        &self.platform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        let env = EnvironmentInfo::parse("8.2.12", "6.5").unwrap();
        assert_eq!(env.runtime(), &PlatformVersion::new(8, 2, 12));
        assert_eq!(env.platform(), &PlatformVersion::new(6, 5, 0));
        assert_eq!(env.platform().as_str(), "6.5");
    }

    #[test]
    fn test_parse_environment_rejects_garbage() {
        assert!(EnvironmentInfo::parse("unknown", "6.5").is_err());
        assert!(EnvironmentInfo::parse("8.2", "").is_err());
    }
}
