//! # Configuration Module
//!
//! This module provides configuration structures for all deb-depgraph
//! commands. Each command has its own config module with a builder for easy
//! construction; all of them embed a shared [`RunConfig`].
//!
//! ## Command Configurations
//!
//! - **RunConfig**: Root package, index location, source mode and depth
//! - **GraphOptions**: Configuration for the `graph` command
//! - **CyclesConfig**: Configuration for the `cycles` command
//! - **DirectDepsConfig**: Configuration for the `deps` command
//! - **ConfigFile**: Values loaded from a TOML settings file
//!
//! ## Example
//!
//! ```
//! use deb_depgraph::cli::{GraphFormat, OutputFormat};
//! use deb_depgraph::common::ConfigBuilder;
//! use deb_depgraph::config::{CyclesConfig, GraphOptions, RunConfig};
//!
//! let run = RunConfig::builder()
//!     .with_package_name("curl")
//!     .with_repository("/srv/mirror/Packages")
//!     .with_max_depth(4)
//!     .build()
//!     .unwrap();
//!
//! let cycles = CyclesConfig::builder()
//!     .with_run(run.clone())
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(true)
//!     .with_max_cycles(None)
//!     .build()
//!     .unwrap();
//! assert!(cycles.error_on_cycles);
//!
//! let graph = GraphOptions::builder()
//!     .with_run(run)
//!     .with_format(GraphFormat::Dot)
//!     .build()
//!     .unwrap();
//! assert!(graph.highlight_cycles);
//! ```

pub mod cycles;
pub mod deps;
pub mod file;
pub mod graph;
pub mod run;

pub use cycles::CyclesConfig;
pub use deps::DirectDepsConfig;
pub use file::ConfigFile;
pub use graph::GraphOptions;
pub use run::{RunConfig, RunConfigBuilder};

use crate::error::DepGraphError;

fn missing_field(field: &str) -> DepGraphError {
    DepGraphError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
