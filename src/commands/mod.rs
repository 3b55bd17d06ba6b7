//! Command implementations for the deb-depgraph CLI
//!
//! This module contains the implementations for each CLI command:
//! - graph: Render the dependency graph of a package
//! - cycles: Report the dependency cycles reachable from a package
//! - deps: List the direct dependencies of a package

pub mod cycles;
pub mod deps;
pub mod graph;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Graph { .. } => graph::execute_graph_command(command),
        Commands::Cycles { .. } => cycles::execute_cycles_command(command),
        Commands::Deps { .. } => deps::execute_deps_command(command),
    }
}
