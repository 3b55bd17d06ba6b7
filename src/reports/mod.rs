//! Report generation modules for different output formats
//!
//! This module contains cycle report generators:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::DepGraphError;
use crate::graph::DependencyGraph;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from the cycles recorded in a graph
    fn generate_report(&self, graph: &DependencyGraph) -> Result<String, DepGraphError>;
}

pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
