use std::collections::{BTreeSet, HashMap};
use std::io::Write;

use miette::Result;
use serde_json::json;

use super::types::{DependencyGraph, GraphNode};
use crate::error::DepGraphError;

// Blue-Orange Accessible Palette - Soothing colors with excellent contrast
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const ROOT_NODE_FILL: &str = "#BBDEFB"; // Stronger blue
    pub const UNKNOWN_NODE_FILL: &str = "#ECEFF1"; // Blue-grey
    pub const UNKNOWN_NODE_STROKE: &str = "#90A4AE"; // Blue-grey
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(DepGraphError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(DepGraphError::from)
    };
}

/// Renders a finished [`DependencyGraph`] in the supported output formats
pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    /// Indented tree starting at the root.
    ///
    /// A package is expanded the first time it is printed; later occurrences
    /// are marked `[already shown]`. Packages at the depth bound are printed
    /// without their dependencies.
    pub fn render_tree(&self, graph: &DependencyGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(
            output,
            "📦 Dependency tree for {} (max depth {})\n",
            graph.root(),
            graph.max_depth()
        )?;

        let mut printed: BTreeSet<&str> = BTreeSet::new();
        let mut stack: Vec<(&str, usize)> = vec![(graph.root(), 0)];

        while let Some((name, indent)) = stack.pop() {
            let prefix = "  ".repeat(indent);

            let Some(node) = graph.node(name) else {
                writeln_out!(output, "{prefix}- {name} (not found)")?;
                continue;
            };

            if !printed.insert(name) {
                writeln_out!(output, "{prefix}- {} [already shown]", self.describe(graph, node))?;
                continue;
            }

            writeln_out!(output, "{prefix}- {}", self.describe(graph, node))?;

            if node.depth() < graph.max_depth() {
                for dependency in node.dependencies().iter().rev() {
                    stack.push((dependency.as_str(), indent + 1));
                }
            }
        }

        if graph.has_cycles() {
            writeln_out!(output, "\n🔄 Detected cycles")?;
            for (i, cycle) in graph.cycles().iter().enumerate() {
                writeln_out!(output, "{}. {}", i + 1, cycle)?;
            }
        }

        Ok(())
    }

    pub fn render_dot(&self, graph: &DependencyGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "digraph dependencies {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(
            output,
            "    node [shape=box, style=\"rounded,filled\", fontname=\"Helvetica\"];"
        )?;
        writeln_out!(output, "    edge [color=\"{}\"];", colors::NORMAL_EDGE)?;
        writeln_out!(output)?;

        for node in graph.nodes().values() {
            let (fill, stroke) = self.node_colors(graph, node);
            writeln_out!(
                output,
                "    \"{}\" [label=\"{}\\n{}\", fillcolor=\"{}\", color=\"{}\"];",
                dot_escape(node.name()),
                dot_escape(node.name()),
                dot_escape(node.version()),
                fill,
                stroke
            )?;
        }

        writeln_out!(output)?;

        for (from, to) in rendered_edges(graph) {
            if self.highlight_cycles && graph.cycle_list().contains_edge(from, to) {
                writeln_out!(
                    output,
                    "    \"{}\" -> \"{}\" [color=\"{}\", penwidth=2.0];",
                    dot_escape(from),
                    dot_escape(to),
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(output, "    \"{}\" -> \"{}\";", dot_escape(from), dot_escape(to))?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    pub fn render_mermaid(&self, graph: &DependencyGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "graph TD")?;

        // Package names may contain characters Mermaid does not accept in ids
        let ids: HashMap<&str, String> = graph
            .nodes()
            .keys()
            .enumerate()
            .map(|(i, name)| (name.as_str(), format!("pkg{i}")))
            .collect();

        for node in graph.nodes().values() {
            let id = &ids[node.name()];
            let (fill, stroke) = self.node_colors(graph, node);
            let width = if self.in_cycle(graph, node) { 3 } else { 2 };

            writeln_out!(
                output,
                "    {}[\"{}<br/>{}\"]",
                id,
                mermaid_escape(node.name()),
                mermaid_escape(node.version())
            )?;
            writeln_out!(
                output,
                "    style {} fill:{},stroke:{},stroke-width:{}px",
                id,
                fill,
                stroke,
                width
            )?;
        }

        let mut cycle_links = Vec::new();
        for (i, (from, to)) in rendered_edges(graph).into_iter().enumerate() {
            writeln_out!(output, "    {} --> {}", ids[from], ids[to])?;
            if self.highlight_cycles && graph.cycle_list().contains_edge(from, to) {
                cycle_links.push(i);
            }
        }

        for link in cycle_links {
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:3px",
                link,
                colors::CYCLE_EDGE
            )?;
        }

        Ok(())
    }

    pub fn render_json(&self, graph: &DependencyGraph, output: &mut dyn Write) -> Result<()> {
        let document = json!({
            "root": graph.root(),
            "max_depth": graph.max_depth(),
            "nodes": graph.nodes().values().collect::<Vec<_>>(),
            "edges": graph.edges(),
            "cycles": graph.cycles(),
            "stats": {
                "indexed_records": graph.index().record_count(),
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "unknown": graph.unknown_count(),
                "cycles": graph.cycles().len(),
            },
        });

        serde_json::to_writer_pretty(&mut *output, &document).map_err(DepGraphError::from)?;
        writeln_out!(output)?;
        Ok(())
    }

    fn describe(&self, graph: &DependencyGraph, node: &GraphNode) -> String {
        let marker = if self.in_cycle(graph, node) {
            " ⚠️  [CYCLE]"
        } else {
            ""
        };

        format!(
            "{} [{}] (depth: {}){}",
            node.name(),
            node.version(),
            node.depth(),
            marker
        )
    }

    fn in_cycle(&self, graph: &DependencyGraph, node: &GraphNode) -> bool {
        self.highlight_cycles && graph.cycle_list().contains_package(node.name())
    }

    fn node_colors(&self, graph: &DependencyGraph, node: &GraphNode) -> (&'static str, &'static str) {
        if self.in_cycle(graph, node) {
            (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
        } else if node.is_unknown() {
            (colors::UNKNOWN_NODE_FILL, colors::UNKNOWN_NODE_STROKE)
        } else if node.name() == graph.root() {
            (colors::ROOT_NODE_FILL, colors::NORMAL_NODE_STROKE)
        } else {
            (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
        }
    }
}

/// Edges whose target was resolved into a node, without duplicates, in
/// source name order and then dependency order.
fn rendered_edges(graph: &DependencyGraph) -> Vec<(&str, &str)> {
    let mut edges = Vec::new();

    for (from, dependencies) in graph.edges() {
        let mut seen = BTreeSet::new();
        for to in dependencies {
            if graph.node(to).is_some() && seen.insert(to.as_str()) {
                edges.push((from.as_str(), to.as_str()));
            }
        }
    }

    edges
}

fn dot_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn mermaid_escape(value: &str) -> String {
    value.replace('"', "#quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PackageRecord;
    use crate::graph::DependencyGraphBuilder;
    use crate::index::PackageIndex;

    fn graph(max_depth: usize) -> DependencyGraph {
        let index = PackageIndex::from_records([
            PackageRecord::new("A", "1.0", vec!["B".into(), "C".into()]),
            PackageRecord::new("B", "2.0", vec!["A".into(), "ghost".into()]),
            PackageRecord::new("C", "3.0", vec![]),
        ]);
        DependencyGraphBuilder::new(index, max_depth).build("A")
    }

    fn render(
        f: impl Fn(&GraphRenderer, &DependencyGraph, &mut dyn Write) -> Result<()>,
        highlight: bool,
    ) -> String {
        let mut output: Vec<u8> = Vec::new();
        f(&GraphRenderer::new(highlight), &graph(5), &mut output as &mut dyn Write).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_tree_output() {
        let output = render(|r, g, o| r.render_tree(g, o), false);

        let expected = "\
📦 Dependency tree for A (max depth 5)

- A [1.0] (depth: 0)
  - B [2.0] (depth: 1)
    - A [1.0] (depth: 0) [already shown]
    - ghost [unknown] (depth: 2)
  - C [3.0] (depth: 1)

🔄 Detected cycles
1. A -> B -> A
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_tree_respects_depth_bound() {
        let mut output = Vec::new();
        GraphRenderer::new(false)
            .render_tree(&graph(1), &mut output)
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("  - B [2.0] (depth: 1)\n"));
        assert!(!output.contains("ghost"));
    }

    #[test]
    fn test_tree_highlights_cycle_members() {
        let output = render(|r, g, o| r.render_tree(g, o), true);

        assert!(output.contains("- A [1.0] (depth: 0) ⚠️  [CYCLE]"));
        assert!(output.contains("- C [3.0] (depth: 1)\n"));
    }

    #[test]
    fn test_dot_output() {
        let output = render(|r, g, o| r.render_dot(g, o), true);

        assert!(output.starts_with("digraph dependencies {"));
        assert!(output.contains("\"ghost\" [label=\"ghost\\nunknown\""));
        assert!(output.contains("\"A\" -> \"C\";"));
        assert!(output.contains(&format!(
            "\"B\" -> \"A\" [color=\"{}\", penwidth=2.0];",
            colors::CYCLE_EDGE
        )));
        assert!(output.trim_end().ends_with('}'));
    }

    #[test]
    fn test_mermaid_output() {
        let output = render(|r, g, o| r.render_mermaid(g, o), true);

        assert!(output.starts_with("graph TD\n"));
        // ids follow name order: A, B, C, ghost
        assert!(output.contains("    pkg0[\"A<br/>1.0\"]"));
        assert!(output.contains("    pkg0 --> pkg1"));
        assert!(output.contains("    pkg1 --> pkg3"));
        assert!(output.contains("linkStyle"));
    }

    #[test]
    fn test_json_output() {
        let output = render(|r, g, o| r.render_json(g, o), false);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["root"], "A");
        assert_eq!(value["max_depth"], 5);
        assert_eq!(value["nodes"].as_array().unwrap().len(), 4);
        assert_eq!(value["nodes"][0]["name"], "A");
        assert_eq!(value["edges"]["B"], json!(["A", "ghost"]));
        assert_eq!(value["cycles"], json!(["A -> B -> A"]));
        assert_eq!(value["stats"]["unknown"], 1);
    }
}
