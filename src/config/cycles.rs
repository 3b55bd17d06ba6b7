//! Cycles command configuration

use super::{RunConfig, missing_field};
use crate::cli::OutputFormat;

/// Configuration for the cycles command
///
/// Holds the run configuration plus the options that control how detected
/// cycles are reported.
#[derive(Debug, Clone)]
pub struct CyclesConfig {
    pub run: RunConfig,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
    /// Maximum number of cycles to report (None = all)
    pub max_cycles: Option<usize>,
}

impl CyclesConfig {
    pub fn builder() -> CyclesConfigBuilder {
        CyclesConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CyclesConfigBuilder {
    run: Option<RunConfig>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
    max_cycles: Option<Option<usize>>,
}

impl CyclesConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_run(mut self, run: RunConfig) -> Self {
        self.run = Some(run);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for CyclesConfigBuilder {
    type Config = CyclesConfig;

    fn build(self) -> Result<Self::Config, crate::error::DepGraphError> {
        Ok(CyclesConfig {
            run: self.run.ok_or_else(|| missing_field("run"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            error_on_cycles: self
                .error_on_cycles
                .ok_or_else(|| missing_field("error_on_cycles"))?,
            max_cycles: self.max_cycles.ok_or_else(|| missing_field("max_cycles"))?,
        })
    }
}
