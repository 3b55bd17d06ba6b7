//! Run configuration shared by every command

use crate::config::ConfigFile;
use crate::constants::graph::{DEFAULT_MAX_DEPTH, MAX_MAX_DEPTH, MIN_MAX_DEPTH};
use crate::core::SourceMode;
use crate::error::DepGraphError;
use crate::source::IndexSource;

/// What to analyze and where the index lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Root package name
    pub package_name: String,
    /// Preferred version of the root package; `None` means the first record
    pub version: Option<String>,
    /// File path or URL of the Packages index
    pub repository: String,
    pub mode: SourceMode,
    /// Dependency levels expanded below the root
    pub max_depth: usize,
}

impl RunConfig {
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::new()
    }

    pub fn source(&self) -> IndexSource {
        IndexSource::new(self.repository.clone(), self.mode)
    }
}

#[derive(Debug, Default)]
pub struct RunConfigBuilder {
    package_name: Option<String>,
    version: Option<String>,
    repository: Option<String>,
    local: Option<bool>,
    max_depth: Option<usize>,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder with values from a config file.
    ///
    /// Call this before the `with_*` setters so explicit values win.
    pub fn with_file(mut self, file: ConfigFile) -> Self {
        self.package_name = file.package_name.or(self.package_name);
        self.version = file.version.or(self.version);
        self.repository = file.repository_url.or(self.repository);
        self.local = file.local.or(self.local);
        self.max_depth = file.max_depth.or(self.max_depth);
        self
    }

    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    /// Force local (`true`) or remote (`false`) mode instead of inferring it
    pub fn with_local(mut self, local: bool) -> Self {
        self.local = Some(local);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

impl crate::common::ConfigBuilder for RunConfigBuilder {
    type Config = RunConfig;

    fn build(self) -> Result<Self::Config, DepGraphError> {
        let mut problems = Vec::new();

        let package_name = self
            .package_name
            .map(|name| name.trim().to_string())
            .unwrap_or_default();
        if package_name.is_empty() {
            problems.push("package name is required".to_string());
        }

        let repository = self
            .repository
            .map(|repository| repository.trim().to_string())
            .unwrap_or_default();
        if repository.is_empty() {
            problems.push("repository is required".to_string());
        }

        let max_depth = self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        if !(MIN_MAX_DEPTH..=MAX_MAX_DEPTH).contains(&max_depth) {
            problems.push(format!(
                "max_depth must be between {MIN_MAX_DEPTH} and {MAX_MAX_DEPTH} (got {max_depth})"
            ));
        }

        if !problems.is_empty() {
            return Err(DepGraphError::ConfigurationError {
                message: problems.join("; "),
            });
        }

        let mode = match self.local {
            Some(true) => SourceMode::Local,
            Some(false) => SourceMode::Remote,
            None => SourceMode::infer(&repository),
        };

        Ok(RunConfig {
            package_name,
            version: self.version.filter(|v| !v.is_empty()),
            repository,
            mode,
            max_depth,
        })
    }
}
