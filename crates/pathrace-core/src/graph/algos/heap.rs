use crate::error::Result;
use crate::graph::adjacency::AdjacencyList;
use crate::graph::algos::shared::{SearchState, StepRecorder};
use crate::graph::model::Graph;
use crate::graph::queue::MinPriorityQueue;
use crate::graph::types::{RunOptions, RunResult};

/// Dijkstra driven by a binary min-heap, default options
pub fn run_heap_based(graph: &Graph, source: usize, target: Option<usize>) -> Result<RunResult> {
    run_heap_based_with(graph, source, target, &RunOptions::default())
}

/// Dijkstra driven by a binary min-heap with lazy deletion.
///
/// Improved neighbors are pushed again instead of decreased in place; an
/// extracted entry for an already finalized node is dropped after its
/// visited check. Heap sift comparisons count toward the operation total.
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count(), edge_mode = %opts.edge_mode))]
pub fn run_heap_based_with(
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
    let mut queue = MinPriorityQueue::with_capacity(adjacency.entry_count() + 1);

    recorder.add(queue.insert(source, 0));

    while let Some(&head) = queue.peek() {
        tracing::trace!(node = head.node, priority = head.priority, queued = queue.len(), "queue head");
        let (entry, cost) = queue.extract_min()?;
        recorder.add(cost);

        let current = entry.node;
        recorder.tick();
        if state.visited[current] {
            tracing::trace!(node = current, priority = entry.priority, "stale entry skipped");
            continue;
        }

        state.visited[current] = true;
        tracing::trace!(node = current, distance = %state.distances[current], "finalized");

        if target == Some(current) {
            let result = state.into_target_result(recorder, source, current);
            tracing::debug!(operations = result.operations(), steps = result.steps().len(), "target reached");
            return Ok(result);
        }

        let relaxed = state.relax_neighbors(&adjacency, current, &mut recorder, |node, priority| {
            queue.insert(node, priority)
        });
        recorder.record_node(&state, current, relaxed, "Dequeued");
    }

    let result = state.finish(recorder, source, target);
    tracing::debug!(operations = result.operations(), steps = result.steps().len(), "queue exhausted");
    Ok(result)
}
