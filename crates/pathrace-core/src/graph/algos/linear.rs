use crate::error::Result;
use crate::graph::adjacency::AdjacencyList;
use crate::graph::algos::shared::{SearchState, StepRecorder};
use crate::graph::model::Graph;
use crate::graph::types::{Distance, RunOptions, RunResult};

/// Scan all unvisited nodes for the smallest finite tentative distance.
///
/// Two operations are counted per unvisited node (visited test and minimum
/// comparison). Ties keep the lower id.
fn select_min(state: &SearchState, recorder: &mut StepRecorder) -> Option<usize> {
    let mut min_distance = Distance::Infinite;
    let mut min_node = None;

    for (node, &distance) in state.distances.iter().enumerate() {
        if state.visited[node] {
            continue;
        }
        recorder.add(2);
        if distance < min_distance {
            min_distance = distance;
            min_node = Some(node);
        }
    }

    min_node
}

/// Dijkstra with O(V) linear-scan selection, default options
pub fn run_linear_scan(graph: &Graph, source: usize, target: Option<usize>) -> Result<RunResult> {
    run_linear_scan_with(graph, source, target, &RunOptions::default())
}

/// Dijkstra with O(V) linear-scan selection.
///
/// With a target the run stops as soon as the target is finalized; without
/// one every reachable node is finalized and the full tree is returned.
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count(), edge_mode = %opts.edge_mode))]
pub fn run_linear_scan_with(
    graph: &Graph,
    source: usize,
    target: Option<usize>,
    opts: &RunOptions,
) -> Result<RunResult> {
    let adjacency = AdjacencyList::build(graph, opts.edge_mode)?;
    adjacency.check_node("source", source)?;
    if let Some(target) = target {
        adjacency.check_node("target", target)?;
    }

    let mut state = SearchState::new(adjacency.node_count(), source);
    let mut recorder = StepRecorder::new();

    while let Some(current) = select_min(&state, &mut recorder) {
        state.visited[current] = true;
        tracing::trace!(node = current, distance = %state.distances[current], "finalized");

        if target == Some(current) {
            let result = state.into_target_result(recorder, source, current);
            tracing::debug!(operations = result.operations(), steps = result.steps().len(), "target reached");
            return Ok(result);
        }

        let relaxed = state.relax_neighbors(&adjacency, current, &mut recorder, |_, _| 0);
        recorder.record_node(&state, current, relaxed, "Processed");
    }

    let result = state.finish(recorder, source, target);
    tracing::debug!(operations = result.operations(), steps = result.steps().len(), "frontier exhausted");
    Ok(result)
}
