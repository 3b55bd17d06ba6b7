//! # deb-depgraph - Dependency Graphs for Debian Packages
//!
//! deb-depgraph reads a Debian/Ubuntu `Packages` index and builds the
//! dependency graph of a single package, expanding at most a fixed number of
//! levels below it. It records every dependency cycle met on the way, turns
//! unresolvable dependencies into `unknown` leaves, and renders the result as
//! a tree, Graphviz DOT, Mermaid or JSON.
//!
//! ## Main Components
//!
//! - **Index**: Parses `Packages` documents into an in-memory package index
//! - **Resolver**: Picks the record used for a package name
//! - **Graph**: Builds the depth-bounded graph and renders it
//! - **Analyzer**: Runs the whole pipeline for one configuration
//! - **Reports**: Generates human-readable and machine-readable cycle reports
//!
//! ## Usage
//!
//! ### Example: Building a Graph From an Index
//!
//! ```
//! use std::io::Cursor;
//!
//! use deb_depgraph::graph::{DependencyGraphBuilder, GraphRenderer};
//! use deb_depgraph::index::{PackageIndex, parse_packages};
//!
//! # fn main() -> miette::Result<()> {
//! let document = "\
//! Package: nginx
//! Version: 1.24.0-2
//! Depends: nginx-core (>= 1.24.0-2) | nginx-light, libc6
//!
//! Package: nginx-core
//! Version: 1.24.0-2
//! Depends: libc6, nginx
//!
//! Package: libc6
//! Version: 2.36-9
//! ";
//!
//! let index = PackageIndex::from_records(parse_packages(Cursor::new(document))?);
//! let graph = DependencyGraphBuilder::new(index, 10).build("nginx");
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.node("libc6").map(|n| n.depth()), Some(1));
//! assert_eq!(graph.cycles(), ["nginx -> nginx-core -> nginx"]);
//!
//! let mut tree = Vec::new();
//! GraphRenderer::new(false).render_tree(&graph, &mut tree)?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Running the Pipeline From a Configuration
//!
//! ```no_run
//! use deb_depgraph::analyzer::PackageAnalyzer;
//! use deb_depgraph::common::ConfigBuilder;
//! use deb_depgraph::config::RunConfig;
//! use deb_depgraph::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let config = RunConfig::builder()
//!     .with_package_name("curl")
//!     .with_repository(
//!         "http://deb.debian.org/debian/dists/bookworm/main/binary-amd64/Packages.gz",
//!     )
//!     .with_max_depth(5)
//!     .build()?;
//!
//! let mut analyzer = PackageAnalyzer::new(config);
//! analyzer.load_from_source()?;
//!
//! let graph = analyzer.build_graph()?;
//! println!("{}", HumanReportGenerator::new(Some(10)).generate_report(&graph)?);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod graph;
pub mod index;
pub mod reports;
pub mod resolver;
pub mod source;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::constants::logging::{DEFAULT_FILTER, FILTER_ENV, FORMAT_ENV};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let format = std::env::var(FORMAT_ENV).unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    init_tracing();

    execute_command(cli.command)
}
