//! Graph command configuration

use std::path::PathBuf;

use super::{RunConfig, missing_field};
use crate::cli::GraphFormat;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub run: RunConfig,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub highlight_cycles: bool,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    run: Option<RunConfig>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    highlight_cycles: Option<bool>,
}

impl GraphOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_run(mut self, run: RunConfig) -> Self {
        self.run = Some(run);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, crate::error::DepGraphError> {
        Ok(GraphOptions {
            run: self.run.ok_or_else(|| missing_field("run"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            output: self.output.unwrap_or_default(),
            highlight_cycles: self.highlight_cycles.unwrap_or(true),
        })
    }
}
