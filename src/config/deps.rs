//! Deps command configuration

use super::{RunConfig, missing_field};
use crate::cli::OutputFormat;

#[derive(Debug, Clone)]
pub struct DirectDepsConfig {
    pub run: RunConfig,
    pub format: OutputFormat,
}

impl DirectDepsConfig {
    pub fn builder() -> DirectDepsConfigBuilder {
        DirectDepsConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct DirectDepsConfigBuilder {
    run: Option<RunConfig>,
    format: Option<OutputFormat>,
}

impl DirectDepsConfigBuilder {
    pub fn with_run(mut self, run: RunConfig) -> Self {
        self.run = Some(run);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for DirectDepsConfigBuilder {
    type Config = DirectDepsConfig;

    fn build(self) -> Result<Self::Config, crate::error::DepGraphError> {
        Ok(DirectDepsConfig {
            run: self.run.ok_or_else(|| missing_field("run"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
        })
    }
}
