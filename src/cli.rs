use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::common::{CycleDisplayArgs, FormatArgs, SourceArgs};

#[derive(Parser)]
#[command(
    name = "deb-depgraph",
    about = "📦 Explore dependency graphs of Debian and Ubuntu packages",
    long_about = "deb-depgraph reads a Debian/Ubuntu Packages index from a local file or a \
                  repository URL and builds the dependency graph of one package, up to a maximum \
                  depth. It reports dependency cycles, unknown packages and can render the graph \
                  for Graphviz or Mermaid.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        long_about = "Build the dependency graph of a package and render it. The default tree \
                      format prints every package once with its version and discovery depth; \
                      repeated packages are marked as already shown. DOT and Mermaid output \
                      highlight edges that belong to a dependency cycle."
    )]
    Graph {
        #[command(flatten)]
        source: SourceArgs,

        /// Graph output format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "DEB_DEPGRAPH_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "DEB_DEPGRAPH_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight packages and edges on dependency cycles (pass `false` to disable)
        #[arg(
            long,
            action = ArgAction::Set,
            value_name = "BOOL",
            default_value_t = true,
            env = "DEB_DEPGRAPH_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,
    },

    #[command(
        long_about = "Build the dependency graph of a package and report every dependency cycle \
                      found while walking it. Each cycle is printed as the path from the root to \
                      the repeated package. Use --error-on-cycles to fail CI jobs when cycles \
                      exist."
    )]
    Cycles {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with status 1 when any dependency cycle is found
        #[arg(long, env = "DEB_DEPGRAPH_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    #[command(
        long_about = "List the direct dependencies of a package as declared in its Depends \
                      field. Version constraints are dropped and only the first alternative of \
                      each dependency is listed."
    )]
    Deps {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Tree,
    Dot,
    Mermaid,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_graph_command() {
        let cli = Cli::try_parse_from([
            "deb-depgraph",
            "graph",
            "curl",
            "--repository",
            "Packages",
            "--format",
            "dot",
            "--max-depth",
            "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Graph { source, format, .. } => {
                assert_eq!(source.package.as_deref(), Some("curl"));
                assert_eq!(source.max_depth, Some(3));
                assert_eq!(format, GraphFormat::Dot);
            }
            _ => panic!("Expected graph command"),
        }
    }

    #[test]
    fn test_parse_cycles_command() {
        let cli = Cli::try_parse_from([
            "deb-depgraph",
            "cycles",
            "bash",
            "-r",
            "Packages",
            "--local",
            "--format",
            "json",
            "--max-cycles",
            "2",
            "--error-on-cycles",
        ])
        .unwrap();

        match cli.command {
            Commands::Cycles {
                source,
                format,
                cycle_display,
                error_on_cycles,
            } => {
                assert!(source.local);
                assert_eq!(format.format, OutputFormat::Json);
                assert_eq!(cycle_display.max_cycles, Some(2));
                assert!(error_on_cycles);
            }
            _ => panic!("Expected cycles command"),
        }
    }

    #[test]
    fn test_highlight_cycles_defaults_on_and_can_be_disabled() {
        let parse = |extra: &[&str]| {
            let mut args = vec!["deb-depgraph", "graph", "curl", "-r", "Packages"];
            args.extend_from_slice(extra);
            match Cli::try_parse_from(args).unwrap().command {
                Commands::Graph {
                    highlight_cycles, ..
                } => highlight_cycles,
                _ => panic!("Expected graph command"),
            }
        };

        assert!(parse(&[]));
        assert!(parse(&["--highlight-cycles", "true"]));
        assert!(!parse(&["--highlight-cycles", "false"]));
    }
}
