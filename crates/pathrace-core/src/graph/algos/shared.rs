use crate::graph::adjacency::AdjacencyList;
use crate::graph::types::{Distance, RunResult, Step, TargetResult, TreeResult};

/// Per-call instrumentation: the cumulative operation counter and the
/// ordered step snapshots. Owned by a single engine invocation.
#[derive(Debug, Default)]
pub struct StepRecorder {
    operations: u64,
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `cost` elementary comparisons
    pub fn add(&mut self, cost: u64) {
        self.operations += cost;
    }

    /// Count a single comparison
    pub fn tick(&mut self) {
        self.operations += 1;
    }

    pub fn operations(&self) -> u64 {
        self.operations
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Snapshot after finalizing `current`
    pub fn record_node(
        &mut self,
        state: &SearchState,
        current: usize,
        relaxed_edges: Vec<String>,
        verb: &str,
    ) {
        let description = format!(
            "{} node {}, explored edges: {}",
            verb,
            current,
            if relaxed_edges.is_empty() {
                "none".to_string()
            } else {
                relaxed_edges.join(", ")
            }
        );

        self.steps.push(Step {
            visited: state.visited_ids(),
            current_node: Some(current),
            relaxed_edges,
            cumulative_operations: self.operations,
            path: None,
            distance: None,
            description,
        });
    }

    /// Final snapshot carrying the reconstructed path
    pub fn record_path(&mut self, state: &SearchState, path: &[usize], distance: Distance) {
        let rendered: Vec<String> = path.iter().map(|id| id.to_string()).collect();
        self.steps.push(Step {
            visited: state.visited_ids(),
            current_node: None,
            relaxed_edges: Vec::new(),
            cumulative_operations: self.operations,
            path: Some(path.to_vec()),
            distance: Some(distance),
            description: format!("Path found: {}", rendered.join(" -> ")),
        });
    }
}

/// Distances, predecessors and the finalized set for one run
#[derive(Debug, Clone)]
pub struct SearchState {
    pub distances: Vec<Distance>,
    pub previous: Vec<Option<usize>>,
    pub visited: Vec<bool>,
}

impl SearchState {
    pub fn new(node_count: usize, source: usize) -> Self {
        let mut distances = vec![Distance::Infinite; node_count];
        distances[source] = Distance::ZERO;
        SearchState {
            distances,
            previous: vec![None; node_count],
            visited: vec![false; node_count],
        }
    }

    pub fn visited_ids(&self) -> Vec<usize> {
        self.visited
            .iter()
            .enumerate()
            .filter_map(|(id, &done)| done.then_some(id))
            .collect()
    }

    /// Relax every outgoing entry of `current`, one counted comparison each.
    ///
    /// `on_improved(node, distance)` runs after each successful relaxation and
    /// returns the extra cost it incurred. Returns the relaxed edge ids in
    /// adjacency order.
    pub fn relax_neighbors<F>(
        &mut self,
        adjacency: &AdjacencyList,
        current: usize,
        recorder: &mut StepRecorder,
        mut on_improved: F,
    ) -> Vec<String>
    where
        F: FnMut(usize, u64) -> u64,
    {
        let mut relaxed = Vec::new();
        let base = self.distances[current];

        for neighbor in adjacency.neighbors(current) {
            let candidate = base.add_weight(neighbor.weight);
            recorder.tick();
            if candidate < self.distances[neighbor.node] {
                self.distances[neighbor.node] = candidate;
                self.previous[neighbor.node] = Some(current);
                relaxed.push(neighbor.edge_id.clone());
                if let Some(priority) = candidate.value() {
                    recorder.add(on_improved(neighbor.node, priority));
                }
            }
        }

        relaxed
    }

    /// Walk `previous` back from `target`. `None` unless the walk ends at `source`.
    pub fn reconstruct_path(&self, source: usize, target: usize) -> Option<Vec<usize>> {
        let mut path = vec![target];
        let mut current = target;

        while let Some(prev) = self.previous[current] {
            // A predecessor chain longer than V would mean a cycle.
            if path.len() > self.previous.len() {
                return None;
            }
            path.push(prev);
            current = prev;
        }

        path.reverse();
        (path.first() == Some(&source)).then_some(path)
    }

    /// Target-mode result. Pushes the final path step when the target is reachable.
    pub fn into_target_result(
        self,
        mut recorder: StepRecorder,
        source: usize,
        target: usize,
    ) -> RunResult {
        let operations = recorder.operations();
        match self.reconstruct_path(source, target) {
            Some(path) => {
                let distance = self.distances[target];
                recorder.record_path(&self, &path, distance);
                RunResult::Target(TargetResult {
                    steps: recorder.steps,
                    path: Some(path),
                    distance,
                    operations,
                })
            }
            None => RunResult::Target(TargetResult {
                steps: recorder.steps,
                path: None,
                distance: Distance::Infinite,
                operations,
            }),
        }
    }

    /// Full-tree result
    pub fn into_tree_result(self, recorder: StepRecorder) -> RunResult {
        RunResult::Tree(TreeResult {
            operations: recorder.operations(),
            steps: recorder.steps,
            distances: self.distances,
            previous: self.previous,
        })
    }

    /// Result once the frontier is exhausted
    pub fn finish(self, recorder: StepRecorder, source: usize, target: Option<usize>) -> RunResult {
        match target {
            Some(target) => self.into_target_result(recorder, source, target),
            None => self.into_tree_result(recorder),
        }
    }
}
