//! Settings file support
//!
//! A config file is a flat TOML table:
//!
//! ```toml
//! package_name = "curl"
//! repository_url = "http://deb.debian.org/debian/dists/stable/main/binary-amd64/Packages.gz"
//! local = false
//! version = "8.5.0-2"
//! max_depth = 5
//! ```
//!
//! Every key is optional. Command-line flags take precedence over file values.

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::error::{ConfigParseError, DepGraphError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub package_name: Option<String>,
    pub repository_url: Option<String>,
    pub local: Option<bool>,
    pub version: Option<String>,
    pub max_depth: Option<usize>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, DepGraphError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| DepGraphError::FileReadError {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse(&path.display().to_string(), content)
    }

    /// Parse `content`, naming it `file` in diagnostics
    pub fn parse(file: &str, content: String) -> Result<Self, DepGraphError> {
        toml::from_str(&content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            DepGraphError::ConfigParseError(Box::new(ConfigParseError {
                file: file.to_string(),
                source_code: NamedSource::new(file, content.clone()),
                span,
                source: e,
            }))
        })
    }
}
