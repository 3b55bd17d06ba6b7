use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::core::SourceMode;
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Status lines and a spinner on stderr
///
/// Executors only create one when stderr is a terminal.
pub struct ProgressReporter {
    term: Term,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current_bar: None,
        }
    }

    /// A reporter when stderr is interactive, otherwise `None`
    pub fn for_stderr() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    fn create_spinner(&self, message: String) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            pb.set_style(spinner_style.tick_strings(SPINNER_FRAMES));
        }
        pb.set_message(message);
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_loading(&mut self, locator: &str, mode: SourceMode) {
        let verb = match mode {
            SourceMode::Local => "Reading",
            SourceMode::Remote => "Downloading",
        };
        eprintln!("{} {} package index...", style("📥").cyan(), verb);
        self.current_bar = Some(self.create_spinner(format!("{locator}...")));
    }

    pub fn finish_loading(&mut self, packages: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!(
            "\r{} Loaded {} {}",
            style("✓").green(),
            style(packages).yellow().bold(),
            pluralize("package", packages)
        );
    }

    /// Clear the spinner after a failure so the error is not overdrawn
    pub fn abandon(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
    }

    pub fn start_graph_building(&self, root: &str, max_depth: usize) {
        eprintln!(
            "{} Building dependency graph for {} (max depth {})...",
            style("🔍").cyan(),
            style(root).green(),
            max_depth
        );
    }

    pub fn finish_graph_building(&self, nodes: usize, cycles: usize) {
        if cycles == 0 {
            eprintln!(
                "{} {} {}, no cycles {}",
                style("✓").green().bold(),
                style(nodes).yellow().bold(),
                pluralize("package", nodes),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "{} {} {}, {} {}",
                style("⚠").yellow().bold(),
                style(nodes).yellow().bold(),
                pluralize("package", nodes),
                style(cycles).red().bold(),
                pluralize("cycle", cycles)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abandon_without_spinner() {
        let mut reporter = ProgressReporter::new();
        reporter.abandon();
        assert!(reporter.current_bar.is_none());
    }

    #[test]
    fn test_loading_clears_spinner() {
        let mut reporter = ProgressReporter::new();
        reporter.start_loading("Packages", SourceMode::Local);
        assert!(reporter.current_bar.is_some());

        reporter.finish_loading(1);
        assert!(reporter.current_bar.is_none());
    }
}
