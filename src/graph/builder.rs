use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use super::cycles::CycleList;
use super::types::{DependencyGraph, GraphNode};
use crate::index::PackageIndex;
use crate::resolver::select_record;

/// Builder for dependency graphs rooted at a single package
///
/// Traversal is depth-first over an explicit stack, so arbitrarily deep or
/// degenerate dependency chains never grow the call stack. Each package is
/// resolved once: its depth and record are fixed the first time it is
/// popped.
pub struct DependencyGraphBuilder {
    index: Arc<PackageIndex>,
    max_depth: usize,
    root_version: Option<String>,
}

/// One pending visit on the traversal stack
#[derive(Debug)]
struct TraversalFrame {
    name: String,
    depth: usize,
    /// Names above this frame, not including `name` itself
    ancestors: Vec<String>,
}

/// Mutable state of a single traversal
#[derive(Default)]
struct TraversalContext {
    nodes: BTreeMap<String, GraphNode>,
    edges: BTreeMap<String, Vec<String>>,
    cycles: CycleList,
    visited: HashSet<String>,
}

impl TraversalContext {
    fn record_cycle(&mut self, ancestors: &[String], repeated: &str) {
        if let Some(path) = self.cycles.record(ancestors, repeated) {
            debug!(cycle = path, "dependency cycle detected");
        }
    }

    fn add_node(&mut self, node: GraphNode, edges: Vec<String>) {
        self.visited.insert(node.name.clone());
        self.edges.insert(node.name.clone(), edges);
        self.nodes.entry(node.name.clone()).or_insert(node);
    }
}

impl DependencyGraphBuilder {
    /// Create a builder over `index` expanding at most `max_depth` levels
    /// below the root.
    pub fn new(index: impl Into<Arc<PackageIndex>>, max_depth: usize) -> Self {
        Self {
            index: index.into(),
            max_depth,
            root_version: None,
        }
    }

    /// Prefer this version for the root package.
    ///
    /// An empty string means no preference. Non-root packages always use the
    /// first record for their name.
    pub fn with_root_version(mut self, version: Option<String>) -> Self {
        self.root_version = version.filter(|v| !v.is_empty());
        self
    }

    pub fn build(&self, root: &str) -> DependencyGraph {
        let mut ctx = TraversalContext::default();
        let mut stack = vec![TraversalFrame {
            name: root.to_string(),
            depth: 0,
            ancestors: Vec::new(),
        }];

        debug!(root, max_depth = self.max_depth, "starting traversal");

        while let Some(frame) = stack.pop() {
            if frame.ancestors.contains(&frame.name) {
                ctx.record_cycle(&frame.ancestors, &frame.name);
                continue;
            }

            if ctx.visited.contains(&frame.name) || frame.depth > self.max_depth {
                continue;
            }

            let records = self.index.records(&frame.name);
            let version = if frame.name == root {
                self.root_version.as_deref()
            } else {
                None
            };

            let Some((record, _)) = select_record(records, version) else {
                ctx.add_node(GraphNode::unknown(&frame.name, frame.depth), Vec::new());
                continue;
            };

            ctx.add_node(
                GraphNode::from_record(record, frame.depth),
                record.dependencies.clone(),
            );

            if frame.depth >= self.max_depth {
                continue;
            }

            let mut path = frame.ancestors;
            path.push(frame.name);

            for dependency in &record.dependencies {
                if path.contains(dependency) {
                    ctx.record_cycle(&path, dependency);
                } else if !ctx.visited.contains(dependency) {
                    stack.push(TraversalFrame {
                        name: dependency.clone(),
                        depth: frame.depth + 1,
                        ancestors: path.clone(),
                    });
                }
            }
        }

        info!(
            root,
            nodes = ctx.nodes.len(),
            edges = ctx.edges.values().map(Vec::len).sum::<usize>(),
            cycles = ctx.cycles.len(),
            "dependency graph built"
        );

        DependencyGraph {
            root: root.to_string(),
            nodes: ctx.nodes,
            edges: ctx.edges,
            cycles: ctx.cycles,
            max_depth: self.max_depth,
            index: Arc::clone(&self.index),
        }
    }
}
