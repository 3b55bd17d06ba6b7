//! Cycles command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CyclesConfig;
use crate::error::DepGraphError;

impl FromCommand for CyclesConfig {
    fn from_command(command: Commands) -> Result<Self, DepGraphError> {
        match command {
            Commands::Cycles {
                source,
                format,
                cycle_display,
                error_on_cycles,
            } => CyclesConfig::builder()
                .with_run(source.to_run_config()?)
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(DepGraphError::ConfigurationError {
                message: "Invalid command type for CyclesConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CyclesConfig);

/// Execute the cycles command for reporting dependency cycles
pub fn execute_cycles_command(command: Commands) -> Result<()> {
    let config = CyclesConfig::from_command(command)
        .wrap_err("Failed to parse cycles command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::cycles::CyclesExecutor;
    CyclesExecutor::execute(config)
}
