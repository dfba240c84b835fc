//! Plugin header version extraction and requirement gating.
//!
//! Reads the leading comment block of a plugin file, pulls out the
//! `Version`, `Requires PHP`, `Requires at least` and `Plugin Name` tags,
//! and checks the declared minimums against an injected [`EnvironmentInfo`].
//!
//! ```no_run
//! use std::path::Path;
//! use plugin_header::{EnvironmentInfo, HeaderVersionResolver, ResolverConfig};
//!
//! let resolver = HeaderVersionResolver::new(ResolverConfig::default());
//! let env = EnvironmentInfo::parse("8.2.12", "6.5").unwrap();
//!
//! match resolver.resolve(Some(Path::new("my-plugin.php")), &env).version() {
//!     Some(version) => println!("loading {version}"),
//!     None => println!("activation blocked"),
//! }
//! ```

pub mod config;
pub mod diagnostics;
pub mod environment;
pub mod error;
pub mod header;
pub mod notice;
pub mod resolver;
pub mod version;

/// Version reported whenever no usable `Version` header can be found.
pub const DEFAULT_VERSION: &str = "1.0.0";

pub use config::ResolverConfig;
pub use diagnostics::{DiagnosticReason, DiagnosticSink, NullSink, TracingSink};
pub use environment::EnvironmentInfo;
pub use error::{Error, Result};
pub use header::{HEADER_READ_LIMIT, HeaderFields, HeaderTag};
pub use notice::{Notice, NoticeContext, Severity, UnmetRequirement};
pub use resolver::{HeaderVersionResolver, Resolution};
pub use version::PlatformVersion;
