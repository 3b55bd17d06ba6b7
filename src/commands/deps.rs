//! Deps command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::DirectDepsConfig;
use crate::error::DepGraphError;

impl FromCommand for DirectDepsConfig {
    fn from_command(command: Commands) -> Result<Self, DepGraphError> {
        match command {
            Commands::Deps { source, format } => DirectDepsConfig::builder()
                .with_run(source.to_run_config()?)
                .with_format(format.format)
                .build(),
            _ => Err(DepGraphError::ConfigurationError {
                message: "Invalid command type for DirectDepsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(DirectDepsConfig);

/// Execute the deps command for listing direct dependencies
pub fn execute_deps_command(command: Commands) -> Result<()> {
    let config = DirectDepsConfig::from_command(command)
        .wrap_err("Failed to parse deps command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::deps::DepsExecutor;
    DepsExecutor::execute(config)
}
