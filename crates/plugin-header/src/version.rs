//! Version parsing and minimum-version checks.
//!
//! Header and runtime versions are rarely strict semver: `Requires PHP: 7.4`,
//! `Requires at least: 6.5-RC1`, or a distro PHP build such as
//! `8.1.2-1ubuntu2.14`. They are mapped onto `semver::Version` by:
//!
//! - padding a missing minor or patch component with `0`
//! - keeping `dev`, `alpha`/`a`, `beta`/`b` and `rc` suffixes as pre-releases
//!   (`dev` sorts below `alpha`)
//! - dropping any other trailing text (distro tags, fourth components, build metadata)
//!
//! # Examples
//!
//! ```
//! use plugin_header::PlatformVersion;
//!
//! let running: PlatformVersion = "8.2.12".parse().unwrap();
//! assert!(running.satisfies_minimum("8.2"));
//! assert!(running.satisfies_minimum("8.2.12"));
//! assert!(!running.satisfies_minimum("8.3"));
//!
//! let candidate: PlatformVersion = "6.5-RC1".parse().unwrap();
//! assert!(!candidate.satisfies_minimum("6.5"));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Numeric core plus an optional recognised pre-release tag.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^v?(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:[-_.+]?(dev|alpha|beta|rc|a|b)\.?(\d*)\b)?")
        .unwrap()
});

/// A runtime or platform version, comparable by semver precedence.
///
/// Equality and ordering ignore the original spelling, so `8.0` and `8.0.0`
/// compare equal while [`Display`](fmt::Display) still prints what was given.
#[derive(Debug, Clone)]
pub struct PlatformVersion {
    version: semver::Version,
    raw: String,
}

impl PlatformVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            version: semver::Version::new(major, minor, patch),
            raw: format!("{major}.{minor}.{patch}"),
        }
    }

    /// Parse a declared requirement, never failing.
    ///
    /// A string with no leading number (e.g. `"latest"`) becomes `0.0.0`,
    /// which every running version satisfies.
    pub fn lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| Self {
            version: semver::Version::new(0, 0, 0),
            raw: s.trim().to_string(),
        })
    }

    /// True when this version is at or above the declared minimum.
    pub fn satisfies_minimum(&self, declared: &str) -> bool {
        *self >= Self::lenient(declared)
    }

    /// The version as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for PlatformVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let raw = s.trim();
        Ok(Self {
            version: normalize_version(raw)?,
            raw: raw.to_string(),
        })
    }
}

impl PartialEq for PlatformVersion {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
    }
}

impl Eq for PlatformVersion {}

impl PartialOrd for PlatformVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PlatformVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version.cmp(&other.version)
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Normalize a loose version string to semver.
///
/// - `"7.4"` -> `7.4.0`
/// - `"6.5-RC1"` -> `6.5.0-rc.1`
/// - `"8.1.2-1ubuntu2.14"` -> `8.1.2`
/// - `"99999999999999999999.0"` -> `18446744073709551615.0.0`
/// - `"latest"` -> error
fn normalize_version(s: &str) -> Result<semver::Version> {
    let caps = VERSION_PATTERN
        .captures(s)
        .ok_or_else(|| Error::invalid_version(s, "no leading numeric component"))?;

    // Components are all digits, so the only parse failure is overflow
    let component = |index: usize| -> u64 {
        caps.get(index).map_or(0, |m| m.as_str().parse().unwrap_or(u64::MAX))
    };

    let mut version = semver::Version::new(component(1), component(2), component(3));

    if let Some(tag) = caps.get(4) {
        let tag = match tag.as_str().to_ascii_lowercase().as_str() {
            // Numeric identifiers sort below alphanumeric ones
            "dev" => "0".to_string(),
            "a" | "alpha" => "alpha".to_string(),
            "b" | "beta" => "beta".to_string(),
            other => other.to_string(),
        };
        let pre = match caps.get(5).and_then(|m| m.as_str().parse::<u64>().ok()) {
            Some(n) => format!("{tag}.{n}"),
            None => tag,
        };
        version.pre = semver::Prerelease::new(&pre)
            .map_err(|e| Error::invalid_version(s, e.to_string()))?;
    }

    Ok(version)
}
