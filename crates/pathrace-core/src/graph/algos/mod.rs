//! Shortest-path engine implementations
//!
//! - `linear`: O(V²) Dijkstra selecting by linear scan
//! - `heap`: O((V+E) log V) Dijkstra selecting from a binary min-heap
//! - `shared`: search state, relaxation and step recording used by both

pub mod heap;
pub mod linear;
pub mod shared;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PathraceError, Result};
use crate::graph::model::Graph;
use crate::graph::types::{RunOptions, RunResult};

pub use heap::{run_heap_based, run_heap_based_with};
pub use linear::{run_linear_scan, run_linear_scan_with};
pub use shared::{SearchState, StepRecorder};

/// Node selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Unsorted linear scan over all unvisited nodes
    Linear,
    /// Binary min-heap with lazy deletion
    #[default]
    Heap,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Linear, Strategy::Heap];

    pub fn run(
        &self,
        graph: &Graph,
        source: usize,
        target: Option<usize>,
        opts: &RunOptions,
    ) -> Result<RunResult> {
        match self {
            Strategy::Linear => run_linear_scan_with(graph, source, target, opts),
            Strategy::Heap => run_heap_based_with(graph, source, target, opts),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = PathraceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(Strategy::Linear),
            "heap" => Ok(Strategy::Heap),
            other => Err(PathraceError::invalid_value(
                "strategy",
                format!("{} (expected: linear, heap)", other),
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Linear => write!(f, "linear"),
            Strategy::Heap => write!(f, "heap"),
        }
    }
}
