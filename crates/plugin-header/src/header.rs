//! Header comment extraction.
//!
//! A plugin header is the leading comment block of the main plugin file:
//!
//! ```text
//! <?php
//! /**
//!  * Plugin Name:       Example Plugin
//!  * Version:           2.3.1
//!  * Requires at least: 6.2
//!  * Requires PHP:      7.4
//!  */
//! ```
//!
//! Only the first [`HEADER_READ_LIMIT`] bytes are ever looked at. Each tag
//! is matched case-insensitively on its own line, optionally preceded by
//! whitespace or comment decoration, and only the first occurrence counts.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// Maximum number of bytes read from the start of a plugin file.
pub const HEADER_READ_LIMIT: usize = 4096;

/// Header tags recognised in a plugin file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeaderTag {
    PluginName,
    Version,
    RequiresAtLeast,
    RequiresPhp,
    Description,
    Author,
    TextDomain,
    RequiresPlugins,
}

impl HeaderTag {
    pub const ALL: [HeaderTag; 8] = [
        HeaderTag::PluginName,
        HeaderTag::Version,
        HeaderTag::RequiresAtLeast,
        HeaderTag::RequiresPhp,
        HeaderTag::Description,
        HeaderTag::Author,
        HeaderTag::TextDomain,
        HeaderTag::RequiresPlugins,
    ];

    /// The tag as written in the header, without the trailing colon.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PluginName => "Plugin Name",
            Self::Version => "Version",
            Self::RequiresAtLeast => "Requires at least",
            Self::RequiresPhp => "Requires PHP",
            Self::Description => "Description",
            Self::Author => "Author",
            Self::TextDomain => "Text Domain",
            Self::RequiresPlugins => "Requires Plugins",
        }
    }

    fn pattern(&self) -> &'static Regex {
        &TAG_PATTERNS[self]
    }
}

impl fmt::Display for HeaderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

static TAG_PATTERNS: LazyLock<HashMap<HeaderTag, Regex>> = LazyLock::new(|| {
    HeaderTag::ALL
        .iter()
        .map(|tag| (*tag, tag_pattern(tag.label())))
        .collect()
});

/// Build the line pattern for one tag.
///
/// Words of a multi-word tag may be separated by any run of spaces or tabs.
fn tag_pattern(label: &str) -> Regex {
    let words: Vec<String> = label.split_whitespace().map(regex::escape).collect();
    let pattern = format!(r"(?mi)^[ \t/*#@]*{}:(.*)$", words.join(r"[ \t]+"));
    Regex::new(&pattern).unwrap()
}

/// Trim a captured value, cutting it at the first comment or PHP closer.
fn cleanup_value(value: &str) -> &str {
    let end = ["*/", "?>"]
        .iter()
        .filter_map(|closer| value.find(closer))
        .min()
        .unwrap_or(value.len());
    value[..end].trim()
}

/// Cut `text` to at most [`HEADER_READ_LIMIT`] bytes on a char boundary.
fn bounded(text: &str) -> &str {
    if text.len() <= HEADER_READ_LIMIT {
        return text;
    }
    let mut end = HEADER_READ_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Read the bounded header prefix of a file as text.
///
/// Invalid UTF-8, including a multi-byte character cut at the boundary,
/// is replaced rather than rejected.
pub(crate) fn read_prefix(path: &Path) -> std::io::Result<String> {
    let file = File::open(path)?;
    let mut buf = Vec::with_capacity(HEADER_READ_LIMIT);
    file.take(HEADER_READ_LIMIT as u64).read_to_end(&mut buf)?;
    Ok(normalize_line_endings(&String::from_utf8_lossy(&buf)))
}

/// Tag values extracted from a plugin header.
///
/// A tag whose value is empty after cleanup is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    values: BTreeMap<HeaderTag, String>,
}

impl HeaderFields {
    /// Extract fields from in-memory text, honouring the read limit.
    pub fn parse(text: &str) -> Self {
        Self::extract(&normalize_line_endings(bounded(text)))
    }

    /// Read and extract the header of the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::extract(&read_prefix(path)?))
    }

    /// Extract from text that is already bounded and normalized.
    pub(crate) fn extract(text: &str) -> Self {
        let values = HeaderTag::ALL
            .iter()
            .filter_map(|tag| {
                let captured = tag.pattern().captures(text)?.get(1)?;
                let value = cleanup_value(captured.as_str());
                (!value.is_empty()).then(|| (*tag, value.to_string()))
            })
            .collect();
        Self { values }
    }

    pub fn get(&self, tag: HeaderTag) -> Option<&str> {
        self.values.get(&tag).map(String::as_str)
    }

    pub fn version(&self) -> Option<&str> {
        self.get(HeaderTag::Version)
    }

    pub fn requires_php(&self) -> Option<&str> {
        self.get(HeaderTag::RequiresPhp)
    }

    /// Minimum host platform version (`Requires at least`).
    pub fn requires_platform(&self) -> Option<&str> {
        self.get(HeaderTag::RequiresAtLeast)
    }

    pub fn plugin_name(&self) -> Option<&str> {
        self.get(HeaderTag::PluginName)
    }

    /// Iterate over the fields present, in [`HeaderTag`] order.
    pub fn iter(&self) -> impl Iterator<Item = (HeaderTag, &str)> {
        self.values.iter().map(|(tag, value)| (*tag, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
