//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::DepGraphError;
use crate::graph::{DependencyGraph, cycle_members};
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, graph: &DependencyGraph) -> Result<String, DepGraphError> {
        let mut output = String::new();

        if !graph.has_cycles() {
            write!(
                output,
                "\n{} No dependency cycles detected for {} within depth {}.\n",
                style("✅").green().bold(),
                style(graph.root()).bold(),
                graph.max_depth()
            )?;
            return Ok(output);
        }

        let total_cycles = graph.cycles().len();
        write!(
            output,
            "\n{} Found {} dependency {} reachable from {}:\n\n",
            style("❌").red().bold(),
            style(total_cycles).red().bold(),
            pluralize("cycle", total_cycles),
            style(graph.root()).bold()
        )?;

        let limit = self.max_cycles.unwrap_or(total_cycles);

        for (i, path) in graph.cycles().iter().take(limit).enumerate() {
            writeln!(output, "{} Cycle #{}", style("🔄").yellow(), i + 1)?;
            writeln!(output, "  {}", style(path).yellow())?;

            let members = cycle_members(path);
            let loop_len = members.len().saturating_sub(1);
            writeln!(
                output,
                "  {} {} {} in the loop:",
                style("📦").blue(),
                loop_len,
                pluralize("package", loop_len)
            )?;

            for name in &members[..loop_len] {
                let version = graph.node(name).map(|node| node.version()).unwrap_or("?");
                writeln!(
                    output,
                    "    {} {} {}",
                    style("•").dim(),
                    style(name).bold(),
                    style(format!("({version})")).dim()
                )?;
            }
            writeln!(output)?;
        }

        if limit < total_cycles {
            writeln!(
                output,
                "{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(limit).yellow(),
                style(total_cycles).yellow()
            )?;
        }

        writeln!(
            output,
            "{} Cycles are reported once per distinct path, so the same loop can appear \
             from different entry points.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}
