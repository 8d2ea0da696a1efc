//! CLI argument parsing for pathrace
//!
//! Global flags: --config, --format, --edge-mode, --quiet, --verbose,
//! --log-level, --log-json

pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use pathrace_core::format::OutputFormat;
use pathrace_core::graph::{EdgeMode, Strategy};
use parse::{parse_edge_mode, parse_format, parse_strategy};

/// Pathrace - race a linear-scan Dijkstra against a binary-heap Dijkstra
#[derive(Parser, Debug)]
#[command(name = "pathrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./pathrace.toml when present)
    #[arg(long, global = true, env = "PATHRACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human, json) [default: from config, else human]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// How edges enter the adjacency list (undirected, directed)
    #[arg(long, global = true, value_parser = parse_edge_mode)]
    pub edge_mode: Option<EdgeMode>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. debug, trace, pathrace_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Graph file plus the source and optional target node
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Graph JSON file
    pub graph: PathBuf,

    /// Source node [default: from config, else 0]
    #[arg(long, short)]
    pub source: Option<usize>,

    /// Stop once this node is finalized and report its path
    #[arg(long, short)]
    pub target: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one shortest-path engine and report its result
    Run {
        #[command(flatten)]
        query: QueryArgs,

        /// Engine to run (linear, heap) [default: from config, else heap]
        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<Strategy>,

        /// Print every recorded step
        #[arg(long)]
        steps: bool,
    },

    /// Run both engines on the same input and compare their work
    Race {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Parse a graph, build its adjacency list, and print a summary
    Validate {
        /// Graph JSON file
        graph: PathBuf,
    },

    /// Write the effective settings to ./pathrace.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_flags_parse() {
        let cli = Cli::try_parse_from([
            "pathrace",
            "--edge-mode",
            "directed",
            "run",
            "graph.json",
            "--strategy",
            "linear",
            "-s",
            "2",
            "-t",
            "5",
            "--steps",
        ])
        .unwrap();

        assert_eq!(cli.edge_mode, Some(EdgeMode::Directed));
        match cli.command {
            Commands::Run {
                query,
                strategy,
                steps,
            } => {
                assert_eq!(query.graph, PathBuf::from("graph.json"));
                assert_eq!(query.source, Some(2));
                assert_eq!(query.target, Some(5));
                assert_eq!(strategy, Some(Strategy::Linear));
                assert!(steps);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_format_after_subcommand() {
        let cli = Cli::try_parse_from(["pathrace", "validate", "g.json", "--format", "json"])
            .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let err = Cli::try_parse_from(["pathrace", "run", "g.json", "--strategy", "bfs"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
