//! Graph command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::{build_graph, load_analyzer};
use crate::cli::GraphFormat;
use crate::config::GraphOptions;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;
use crate::progress::ProgressReporter;

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let mut progress = ProgressReporter::for_stderr();

        let analyzer = load_analyzer(config.run, progress.as_mut())?;
        let graph = build_graph(&analyzer, progress.as_ref())?;

        let renderer = GraphRenderer::new(config.highlight_cycles);

        // Determine output destination
        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        match config.format {
            GraphFormat::Tree => {
                renderer
                    .render_tree(&graph, output_writer.as_mut())
                    .wrap_err("Failed to render dependency tree")?;
            }
            GraphFormat::Dot => {
                renderer
                    .render_dot(&graph, output_writer.as_mut())
                    .wrap_err("Failed to render DOT graph")?;
            }
            GraphFormat::Mermaid => {
                renderer
                    .render_mermaid(&graph, output_writer.as_mut())
                    .wrap_err("Failed to render Mermaid graph")?;
            }
            GraphFormat::Json => {
                renderer
                    .render_json(&graph, output_writer.as_mut())
                    .wrap_err("Failed to render JSON graph")?;
            }
        }

        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to write graph output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
