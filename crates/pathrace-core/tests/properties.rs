//! Property tests comparing the two engines on random connected graphs

use pathrace_core::graph::{
    run_heap_based, run_linear_scan, Distance, EdgeMode, Graph, RunResult, Step,
};
use proptest::prelude::*;

/// Random connected graph: a random spanning tree plus up to `n` extra edges.
///
/// `weight_of(k, drawn)` picks the weight of the k-th edge.
fn arb_graph(weight_of: fn(usize, u32) -> u32) -> impl Strategy<Value = Graph> {
    (1usize..12).prop_flat_map(move |n| {
        let parents = prop::collection::vec(any::<prop::sample::Index>(), n - 1);
        let extras = prop::collection::vec((0..n, 0..n), 0..=n);
        let weights = prop::collection::vec(0u32..50, 2 * n);
        (Just(n), parents, extras, weights).prop_map(move |(n, parents, extras, weights)| {
            let mut pairs: Vec<(usize, usize)> = parents
                .iter()
                .enumerate()
                .map(|(i, idx)| (idx.index(i + 1), i + 1))
                .collect();
            pairs.extend(extras);
            let edges: Vec<(usize, usize, u32)> = pairs
                .into_iter()
                .enumerate()
                .map(|(k, (a, b))| (a, b, weight_of(k, weights[k])))
                .collect();
            Graph::from_edges(n, &edges)
        })
    })
}

fn drawn_weight(_: usize, drawn: u32) -> u32 {
    drawn
}

/// Distinct powers of two make every simple path sum distinct, so the
/// shortest path to each node is unique.
fn unique_weight(k: usize, _: u32) -> u32 {
    1 << k
}

fn tree_parts(result: &RunResult) -> (Vec<Distance>, Vec<Option<usize>>) {
    let tree = result.as_tree().expect("full-tree result");
    (tree.distances.clone(), tree.previous.clone())
}

fn assert_counter_monotone(steps: &[Step]) -> Result<(), TestCaseError> {
    for pair in steps.windows(2) {
        prop_assert!(pair[0].cumulative_operations <= pair[1].cumulative_operations);
        prop_assert!(pair[0].visited.len() <= pair[1].visited.len());
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_engines_agree_on_distances(graph in arb_graph(drawn_weight)) {
        let linear = run_linear_scan(&graph, 0, None).unwrap();
        let heap = run_heap_based(&graph, 0, None).unwrap();

        let (linear_distances, _) = tree_parts(&linear);
        let (heap_distances, _) = tree_parts(&heap);
        prop_assert_eq!(&linear_distances, &heap_distances);
        prop_assert!(linear_distances.iter().all(Distance::is_finite));
        prop_assert_eq!(linear.steps().len(), graph.node_count());
        prop_assert_eq!(heap.steps().len(), graph.node_count());
    }

    #[test]
    fn prop_engines_agree_on_unique_trees(graph in arb_graph(unique_weight)) {
        let linear = run_linear_scan(&graph, 0, None).unwrap();
        let heap = run_heap_based(&graph, 0, None).unwrap();
        prop_assert_eq!(tree_parts(&linear), tree_parts(&heap));
    }

    #[test]
    fn prop_counters_and_finalization_are_monotone(graph in arb_graph(drawn_weight)) {
        for result in [
            run_linear_scan(&graph, 0, None).unwrap(),
            run_heap_based(&graph, 0, None).unwrap(),
        ] {
            assert_counter_monotone(result.steps())?;

            // Nodes are finalized in non-decreasing distance order
            let (distances, _) = tree_parts(&result);
            let finalized: Vec<Distance> = result
                .steps()
                .iter()
                .filter_map(|s| s.current_node)
                .map(|node| distances[node])
                .collect();
            prop_assert!(finalized.windows(2).all(|w| w[0] <= w[1]));
            // Stale pops after the last step may still add operations
            let last = result.steps().last().map(|s| s.cumulative_operations);
            prop_assert!(last.is_some_and(|ops| ops <= result.operations()));
        }
    }

    #[test]
    fn prop_target_paths_are_valid(graph in arb_graph(drawn_weight), pick in any::<prop::sample::Index>()) {
        let target = pick.index(graph.node_count());
        for result in [
            run_linear_scan(&graph, 0, Some(target)).unwrap(),
            run_heap_based(&graph, 0, Some(target)).unwrap(),
        ] {
            let found = result.as_target().unwrap();
            let path = found.path.clone().expect("connected graph");
            prop_assert_eq!(path.first(), Some(&0));
            prop_assert_eq!(path.last(), Some(&target));

            let mut total = 0u64;
            for hop in path.windows(2) {
                let edge = graph.edge_between(hop[0], hop[1], EdgeMode::Undirected);
                prop_assert!(edge.is_some());
                total += u64::from(edge.unwrap().weight);
            }
            prop_assert_eq!(found.distance, Distance::Finite(total));
            assert_counter_monotone(&found.steps)?;
        }
    }

    #[test]
    fn prop_runs_are_deterministic(graph in arb_graph(drawn_weight)) {
        let target = Some(graph.node_count() - 1);
        let first = run_heap_based(&graph, 0, target).unwrap();
        let second = run_heap_based(&graph, 0, target).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );

        let first = run_linear_scan(&graph, 0, None).unwrap();
        let second = run_linear_scan(&graph, 0, None).unwrap();
        prop_assert_eq!(first, second);
    }
}
