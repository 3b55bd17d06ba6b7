//! # Graph Construction and Rendering Module
//!
//! This module builds depth-bounded dependency graphs from a
//! [`PackageIndex`](crate::index::PackageIndex) and renders them in several
//! output formats.
//!
//! ## Components
//!
//! ### Graph Building
//! - **DependencyGraphBuilder**: Walks the index from a root package with an
//!   explicit stack, recording nodes, edges and cycles
//! - **GraphNode**: A package as first reached, with its discovery depth
//! - **CycleList**: Ordered cycle paths, de-duplicated by text
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Renders graphs as an indented tree, DOT, Mermaid or
//!   JSON, optionally highlighting cycles
//!
//! ## Example
//!
//! ```
//! use deb_depgraph::core::PackageRecord;
//! use deb_depgraph::graph::{DependencyGraphBuilder, GraphRenderer};
//! use deb_depgraph::index::PackageIndex;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let index = PackageIndex::from_records([
//!     PackageRecord::new("app", "1.0", vec!["libfoo".to_string()]),
//!     PackageRecord::new("libfoo", "2.1", vec!["app".to_string()]),
//! ]);
//!
//! let graph = DependencyGraphBuilder::new(index, 10).build("app");
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.cycles(), ["app -> libfoo -> app"]);
//!
//! let mut output = Vec::new();
//! GraphRenderer::new(true).render_dot(&graph, &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains("\"app\" -> \"libfoo\""));
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Formats
//!
//! - **Tree**: Indented text listing for terminals
//! - **DOT**: Graphviz format for detailed visualization
//! - **Mermaid**: Markdown-compatible diagrams for documentation
//! - **JSON**: Nodes, edges and cycles for further processing

mod builder;
mod cycles;
mod renderer;
mod types;

pub use builder::DependencyGraphBuilder;
pub use cycles::{CycleList, cycle_members, cycle_steps};
pub use renderer::GraphRenderer;
pub use types::{DependencyGraph, GraphNode};
