//! Cycles command executor

use miette::{Result, WrapErr};

use super::{build_graph, load_analyzer};
use crate::cli::OutputFormat;
use crate::config::CyclesConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct CyclesExecutor;

impl CommandExecutor for CyclesExecutor {
    type Config = CyclesConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut progress = ProgressReporter::for_stderr();

        let analyzer = load_analyzer(config.run, progress.as_mut())?;
        let graph = build_graph(&analyzer, progress.as_ref())?;

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new(config.max_cycles)
                .generate_report(&graph)
                .wrap_err("Failed to generate human-readable report")?,
            OutputFormat::Json => JsonReportGenerator::new()
                .generate_report(&graph)
                .wrap_err("Failed to generate JSON report")?,
        };

        println!("{report}");

        if config.error_on_cycles && graph.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
