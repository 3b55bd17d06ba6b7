//! # Package Analysis Module
//!
//! This module ties the pipeline together for one [`RunConfig`]: the index is
//! read once, the root package is resolved, and the dependency graph is built
//! from it.
//!
//! ## Key Components
//!
//! - **PackageAnalyzer**: Loads an index and answers questions about the root
//!   package
//! - **DirectDependencies**: The root package's own `Depends` names
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use deb_depgraph::analyzer::PackageAnalyzer;
//! use deb_depgraph::common::ConfigBuilder;
//! use deb_depgraph::config::RunConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RunConfig::builder()
//!     .with_package_name("app")
//!     .with_repository("Packages")
//!     .build()?;
//!
//! let document = "Package: app\nVersion: 1\nDepends: lib\n\nPackage: lib\nVersion: 2\n";
//!
//! let mut analyzer = PackageAnalyzer::new(config);
//! analyzer.load_index(Cursor::new(document))?;
//!
//! assert_eq!(analyzer.direct_dependencies()?.dependencies, ["lib"]);
//! assert_eq!(analyzer.build_graph()?.node_count(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! [`RunConfig`]: crate::config::RunConfig

mod package_analyzer;

pub use package_analyzer::*;
