//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::config::{ConfigFile, RunConfig};
use crate::error::DepGraphError;

/// Arguments that select the root package and the index to read
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Package to analyze (may also come from the config file)
    #[arg(value_name = "PACKAGE", env = "DEB_DEPGRAPH_PACKAGE")]
    pub package: Option<String>,

    /// Preferred version of the root package
    #[arg(long, value_name = "VERSION", env = "DEB_DEPGRAPH_PACKAGE_VERSION")]
    pub package_version: Option<String>,

    /// Path or URL of a Packages (or Packages.gz) index
    #[arg(short, long, value_name = "LOCATOR", env = "DEB_DEPGRAPH_REPOSITORY")]
    pub repository: Option<String>,

    /// Treat the repository as a local file even if it looks like a URL
    #[arg(long, env = "DEB_DEPGRAPH_LOCAL")]
    pub local: bool,

    /// Dependency levels to expand below the root (1-100, default 10)
    #[arg(short = 'd', long, value_name = "N", env = "DEB_DEPGRAPH_MAX_DEPTH")]
    pub max_depth: Option<usize>,

    /// TOML file providing defaults for the options above
    #[arg(short, long, value_name = "FILE", env = "DEB_DEPGRAPH_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "DEB_DEPGRAPH_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display (shows all by default)
    #[arg(long, env = "DEB_DEPGRAPH_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

impl SourceArgs {
    /// Merge these arguments over the config file, if any, and validate.
    pub fn to_run_config(&self) -> Result<RunConfig, DepGraphError> {
        let mut builder = RunConfig::builder();

        if let Some(path) = &self.config {
            builder = builder.with_file(ConfigFile::load(path)?);
        }
        if let Some(package) = &self.package {
            builder = builder.with_package_name(package);
        }
        if let Some(version) = &self.package_version {
            builder = builder.with_version(version);
        }
        if let Some(repository) = &self.repository {
            builder = builder.with_repository(repository);
        }
        if self.local {
            builder = builder.with_local(true);
        }
        if let Some(max_depth) = self.max_depth {
            builder = builder.with_max_depth(max_depth);
        }

        builder.build()
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, DepGraphError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, DepGraphError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::DepGraphError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
