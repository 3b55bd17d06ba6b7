//! Command executors that handle the actual logic for each command

pub mod cycles;
pub mod deps;
pub mod graph;

use miette::{Result, WrapErr};

use crate::analyzer::PackageAnalyzer;
use crate::config::RunConfig;
use crate::graph::DependencyGraph;
use crate::index::PackageIndex;
use crate::progress::ProgressReporter;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Read and parse the configured index
pub(crate) fn load_analyzer(
    run: RunConfig,
    mut progress: Option<&mut ProgressReporter>,
) -> Result<PackageAnalyzer> {
    let locator = run.repository.clone();
    if let Some(progress) = progress.as_deref_mut() {
        progress.start_loading(&locator, run.mode);
    }

    let mut analyzer = PackageAnalyzer::new(run);
    let loaded = analyzer
        .load_from_source()
        .map(PackageIndex::record_count);

    if let Some(progress) = progress {
        match &loaded {
            Ok(count) => progress.finish_loading(*count),
            Err(_) => progress.abandon(),
        }
    }

    loaded.wrap_err_with(|| format!("Failed to load package index from '{locator}'"))?;
    Ok(analyzer)
}

/// Build the graph for the analyzer's root package
pub(crate) fn build_graph(
    analyzer: &PackageAnalyzer,
    progress: Option<&ProgressReporter>,
) -> Result<DependencyGraph> {
    let run = analyzer.config();
    if let Some(progress) = progress {
        progress.start_graph_building(&run.package_name, run.max_depth);
    }

    let graph = analyzer
        .build_graph()
        .wrap_err("Failed to build dependency graph")?;

    if let Some(progress) = progress {
        progress.finish_graph_building(graph.node_count(), graph.cycles().len());
    }

    Ok(graph)
}
