//! Run configuration for pathrace
//!
//! Loaded from an explicit `--config` path or `pathrace.toml` in the working
//! directory. Every field is optional; command-line flags override it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PathraceError, Result};
use crate::format::OutputFormat;
use crate::graph::algos::Strategy;
use crate::graph::types::{EdgeMode, RunOptions};

/// Default configuration file name
pub const CONFIG_FILE: &str = "pathrace.toml";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathraceConfig {
    /// How edges enter the adjacency list
    #[serde(default)]
    pub edge_mode: EdgeMode,

    /// Default source node
    #[serde(default)]
    pub source: usize,

    /// Default strategy for `run`
    #[serde(default)]
    pub strategy: Strategy,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl PathraceConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PathraceError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: PathraceConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), edge_mode = %config.edge_mode, "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PathraceError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Locate `pathrace.toml` in `dir`, if present
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_FILE);
        path.is_file().then_some(path)
    }

    /// Load from `explicit`, else from a discovered file in `dir`, else defaults
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::discover(dir) {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            edge_mode: self.edge_mode,
        }
    }
}
