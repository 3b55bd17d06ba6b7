//! Graph command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GraphOptions;
use crate::error::DepGraphError;

impl FromCommand for GraphOptions {
    fn from_command(command: Commands) -> Result<Self, DepGraphError> {
        match command {
            Commands::Graph {
                source,
                format,
                output,
                highlight_cycles,
            } => GraphOptions::builder()
                .with_run(source.to_run_config()?)
                .with_format(format)
                .with_output(output)
                .with_highlight_cycles(highlight_cycles)
                .build(),
            _ => Err(DepGraphError::ConfigurationError {
                message: "Invalid command type for GraphOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GraphOptions);

/// Execute the graph command for rendering a package's dependency graph
pub fn execute_graph_command(command: Commands) -> Result<()> {
    let config =
        GraphOptions::from_command(command).wrap_err("Failed to parse graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(config)
}
