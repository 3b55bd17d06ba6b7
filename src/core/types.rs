//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use serde::Serialize;

/// Version reported for packages that appear in a `Depends` field but not in
/// the index.
pub const UNKNOWN_VERSION: &str = "unknown";

/// One stanza of a Packages index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    pub dependencies: Vec<String>,
}

impl PackageRecord {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        dependencies: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dependencies,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

/// Where the raw index document comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// A file on the local filesystem
    Local,
    /// An HTTP(S) URL
    Remote,
}

impl SourceMode {
    /// Guess the mode from the shape of a repository locator
    pub fn infer(locator: &str) -> Self {
        let lower = locator.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            SourceMode::Remote
        } else {
            SourceMode::Local
        }
    }
}

impl std::fmt::Display for SourceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceMode::Local => write!(f, "local"),
            SourceMode::Remote => write!(f, "remote"),
        }
    }
}
