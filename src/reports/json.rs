//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::error::DepGraphError;
use crate::graph::{DependencyGraph, cycle_members};

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, graph: &DependencyGraph) -> Result<String, DepGraphError> {
        // Discovery order is kept; it is deterministic for a given index
        let cycles: Vec<_> = graph
            .cycles()
            .iter()
            .map(|path| {
                let members = cycle_members(path);
                let packages = &members[..members.len().saturating_sub(1)];

                json!({
                    "path": path,
                    "packages": packages,
                })
            })
            .collect();

        let report = json!({
            "root": graph.root(),
            "max_depth": graph.max_depth(),
            "has_cycles": graph.has_cycles(),
            "cycle_count": graph.cycles().len(),
            "cycles": cycles,
        });

        serde_json::to_string_pretty(&report).map_err(DepGraphError::Json)
    }
}
