//! Deps command executor

use console::style;
use miette::{Result, WrapErr};

use super::load_analyzer;
use crate::cli::OutputFormat;
use crate::config::DirectDepsConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;

pub struct DepsExecutor;

impl CommandExecutor for DepsExecutor {
    type Config = DirectDepsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut progress = ProgressReporter::for_stderr();

        let analyzer = load_analyzer(config.run, progress.as_mut())?;
        let deps = analyzer
            .direct_dependencies()
            .wrap_err("Failed to resolve root package")?;

        match config.format {
            OutputFormat::Human => {
                let count = deps.dependencies.len();
                println!(
                    "\n{} {} {} has {} direct {}:",
                    style("📦").blue(),
                    style(&deps.package).bold(),
                    style(format!("({})", deps.version)).dim(),
                    style(count).yellow().bold(),
                    if count == 1 { "dependency" } else { "dependencies" }
                );
                for name in &deps.dependencies {
                    println!("  {} {}", style("•").dim(), name);
                }
            }
            OutputFormat::Json => {
                let output = serde_json::to_string_pretty(&deps)
                    .map_err(crate::error::DepGraphError::from)
                    .wrap_err("Failed to generate JSON output")?;
                println!("{output}");
            }
        }

        Ok(())
    }
}
