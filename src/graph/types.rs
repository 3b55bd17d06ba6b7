//! Core graph types
//!
//! This module contains the fundamental data structures produced by the
//! dependency graph builder.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use super::cycles::CycleList;
use crate::core::{PackageRecord, UNKNOWN_VERSION};
use crate::index::PackageIndex;

/// A package as it was first reached during traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub name: String,
    pub version: String,
    pub dependencies: Vec<String>,
    /// Depth at which the package was first discovered. Never updated.
    pub depth: usize,
}

impl GraphNode {
    pub fn from_record(record: &PackageRecord, depth: usize) -> Self {
        Self {
            name: record.name.clone(),
            version: record.version.clone(),
            dependencies: record.dependencies.clone(),
            depth,
        }
    }

    /// Leaf for a name that has no record in the index
    pub fn unknown(name: &str, depth: usize) -> Self {
        Self {
            name: name.to_string(),
            version: UNKNOWN_VERSION.to_string(),
            dependencies: Vec::new(),
            depth,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_unknown(&self) -> bool {
        self.version == UNKNOWN_VERSION
    }
}

/// The frozen result of one traversal
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    pub(super) root: String,
    pub(super) nodes: BTreeMap<String, GraphNode>,
    pub(super) edges: BTreeMap<String, Vec<String>>,
    pub(super) cycles: CycleList,
    pub(super) max_depth: usize,
    pub(super) index: Arc<PackageIndex>,
}

impl DependencyGraph {
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn nodes(&self) -> &BTreeMap<String, GraphNode> {
        &self.nodes
    }

    pub fn node(&self, name: &str) -> Option<&GraphNode> {
        self.nodes.get(name)
    }

    pub fn edges(&self) -> &BTreeMap<String, Vec<String>> {
        &self.edges
    }

    /// Dependency names recorded for `name`; empty for unknown packages.
    pub fn dependencies_of(&self, name: &str) -> &[String] {
        self.edges.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Cycle paths in the order they were found, e.g. `"a -> b -> a"`.
    pub fn cycles(&self) -> &[String] {
        self.cycles.as_slice()
    }

    pub fn cycle_list(&self) -> &CycleList {
        &self.cycles
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn index(&self) -> &PackageIndex {
        &self.index
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of dependency links across all nodes.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn unknown_count(&self) -> usize {
        self.nodes.values().filter(|node| node.is_unknown()).count()
    }
}
