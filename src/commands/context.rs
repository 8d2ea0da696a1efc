//! Settings merged from the config file and global flags

use std::env;
use std::path::Path;

use pathrace_core::config::PathraceConfig;
use pathrace_core::error::{PathraceError, Result};
use pathrace_core::format::OutputFormat;
use pathrace_core::graph::{Graph, RunOptions, Strategy};

use crate::cli::{Cli, QueryArgs};

/// Effective settings for one invocation; flags win over the config file
#[derive(Debug, Clone)]
pub struct Settings {
    pub format: OutputFormat,
    pub quiet: bool,
    pub options: RunOptions,
    pub source: usize,
    pub strategy: Strategy,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let cwd = env::current_dir()?;
        let config = PathraceConfig::resolve(cli.config.as_deref(), &cwd)?;
        Ok(Self::merge(cli, &config))
    }

    fn merge(cli: &Cli, config: &PathraceConfig) -> Self {
        let mut options = config.run_options();
        if let Some(mode) = cli.edge_mode {
            options.edge_mode = mode;
        }

        Settings {
            format: cli.format.unwrap_or(config.format),
            quiet: cli.quiet,
            options,
            source: config.source,
            strategy: config.strategy,
        }
    }

    /// Settings as a config file would record them
    pub fn to_config(&self) -> PathraceConfig {
        PathraceConfig {
            edge_mode: self.options.edge_mode,
            source: self.source,
            strategy: self.strategy,
            format: self.format,
        }
    }

    pub fn source_for(&self, query: &QueryArgs) -> usize {
        query.source.unwrap_or(self.source)
    }
}

/// Load a graph file, reporting a missing file as a data error
pub fn load_graph(path: &Path) -> Result<Graph> {
    if !path.exists() {
        return Err(PathraceError::not_found("graph file", path.display()));
    }
    Graph::load(path)
}
