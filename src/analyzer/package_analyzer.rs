use std::io::BufRead;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::error::DepGraphError;
use crate::graph::{DependencyGraph, DependencyGraphBuilder};
use crate::index::{PackageIndex, parse_packages};
use crate::resolver::{PackageResolver, Resolution};

/// The root package and the names it depends on directly
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectDependencies {
    pub package: String,
    pub version: String,
    pub dependencies: Vec<String>,
}

#[derive(Debug)]
pub struct PackageAnalyzer {
    config: RunConfig,
    index: Arc<PackageIndex>,
}

impl PackageAnalyzer {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            index: Arc::new(PackageIndex::new()),
        }
    }

    /// Analyze an index that has already been parsed
    pub fn with_index(mut self, index: impl Into<Arc<PackageIndex>>) -> Self {
        self.index = index.into();
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn index(&self) -> &PackageIndex {
        &self.index
    }

    /// Parse the whole document and replace the current index with it.
    pub fn load_index<R: BufRead>(&mut self, reader: R) -> Result<&PackageIndex, DepGraphError> {
        let index = PackageIndex::from_records(parse_packages(reader)?);

        info!(
            packages = index.record_count(),
            names = index.name_count(),
            "loaded {} packages",
            index.record_count()
        );

        self.index = Arc::new(index);
        Ok(self.index.as_ref())
    }

    /// Open the configured repository and load it.
    pub fn load_from_source(&mut self) -> Result<&PackageIndex, DepGraphError> {
        let reader = self.config.source().open()?;
        self.load_index(reader)
    }

    /// Resolve the root package, honouring the requested version.
    pub fn resolve_root(&self) -> Result<Resolution<'_>, DepGraphError> {
        PackageResolver::new(&self.index)
            .resolve(&self.config.package_name, self.config.version.as_deref())
    }

    pub fn direct_dependencies(&self) -> Result<DirectDependencies, DepGraphError> {
        let root = self.resolve_root()?.record;

        Ok(DirectDependencies {
            package: root.name().to_string(),
            version: root.version().to_string(),
            dependencies: root.dependencies().to_vec(),
        })
    }

    /// Build the dependency graph rooted at the configured package.
    ///
    /// Fails with [`DepGraphError::PackageNotFound`] when the root is not in
    /// the index; every other missing package becomes an unknown leaf.
    pub fn build_graph(&self) -> Result<DependencyGraph, DepGraphError> {
        let root = self.resolve_root()?;
        if root.fell_back {
            debug!(
                package = root.record.name(),
                version = root.record.version(),
                "building graph from fallback root version"
            );
        }

        let graph = DependencyGraphBuilder::new(Arc::clone(&self.index), self.config.max_depth)
            .with_root_version(Some(root.record.version().to_string()))
            .build(&self.config.package_name);

        if graph.has_cycles() {
            info!(cycles = graph.cycles().len(), "dependency cycles detected");
        }

        Ok(graph)
    }
}
