//! Side-by-side run of both engines on identical input

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::graph::algos::Strategy;
use crate::graph::model::Graph;
use crate::graph::types::{EdgeMode, RunOptions, RunResult};

/// Strategy that performed fewer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Linear,
    Heap,
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Linear => write!(f, "linear"),
            Winner::Heap => write!(f, "heap"),
            Winner::Tie => write!(f, "tie"),
        }
    }
}

/// Outcome of one engine in a race
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaceLane {
    pub strategy: Strategy,
    pub operations: u64,
    pub step_count: usize,
    pub result: RunResult,
}

impl RaceLane {
    fn new(strategy: Strategy, result: RunResult) -> Self {
        RaceLane {
            strategy,
            operations: result.operations(),
            step_count: result.steps().len(),
            result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaceReport {
    pub source: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<usize>,
    pub edge_mode: EdgeMode,
    pub linear: RaceLane,
    pub heap: RaceLane,
    /// Both engines found the same shortest distances
    pub distances_agree: bool,
    /// Both engines built the same predecessor tree (or the same path)
    pub paths_agree: bool,
    pub winner: Winner,
}

/// Compare the shortest distances two runs found
fn distances_agree(a: &RunResult, b: &RunResult) -> bool {
    match (a, b) {
        (RunResult::Target(a), RunResult::Target(b)) => a.distance == b.distance,
        (RunResult::Tree(a), RunResult::Tree(b)) => a.distances == b.distances,
        _ => false,
    }
}

/// Compare the paths two runs found. Ties between equal-length routes may be
/// broken differently by the two selection orders.
fn paths_agree(a: &RunResult, b: &RunResult) -> bool {
    match (a, b) {
        (RunResult::Target(a), RunResult::Target(b)) => a.path == b.path,
        (RunResult::Tree(a), RunResult::Tree(b)) => a.previous == b.previous,
        _ => false,
    }
}

/// Run both strategies on the same graph and compare their work
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn race(
    graph: &Graph,
    source: usize,
    target: Option<usize>,
    opts: &RunOptions,
) -> Result<RaceReport> {
    let linear = RaceLane::new(
        Strategy::Linear,
        Strategy::Linear.run(graph, source, target, opts)?,
    );
    let heap = RaceLane::new(
        Strategy::Heap,
        Strategy::Heap.run(graph, source, target, opts)?,
    );

    let winner = match linear.operations.cmp(&heap.operations) {
        std::cmp::Ordering::Less => Winner::Linear,
        std::cmp::Ordering::Greater => Winner::Heap,
        std::cmp::Ordering::Equal => Winner::Tie,
    };

    let report = RaceReport {
        source,
        target,
        edge_mode: opts.edge_mode,
        distances_agree: distances_agree(&linear.result, &heap.result),
        paths_agree: paths_agree(&linear.result, &heap.result),
        linear,
        heap,
        winner,
    };

    tracing::debug!(
        linear_ops = report.linear.operations,
        heap_ops = report.heap.operations,
        winner = %report.winner,
        distances_agree = report.distances_agree,
        "race_finished"
    );

    Ok(report)
}
