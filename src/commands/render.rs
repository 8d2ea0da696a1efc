//! Human-readable rendering shared by the commands

use pathrace_core::graph::{EdgeMode, Graph, Step, TreeResult};

pub fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Edge id and weight for each hop of `path`, e.g. `0-1 (2), 1-2 (3)`
pub fn format_hops(graph: &Graph, path: &[usize], mode: EdgeMode) -> String {
    if path.len() < 2 {
        return "none".to_string();
    }
    path.windows(2)
        .map(|hop| match graph.edge_between(hop[0], hop[1], mode) {
            Some(edge) => format!("{} ({})", edge.id, edge.weight),
            None => format!("{}-{} (?)", hop[0], hop[1]),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_steps(steps: &[Step]) {
    println!("steps:");
    for (i, step) in steps.iter().enumerate() {
        println!(
            "  {:>3}. ops={:<6} {}",
            i + 1,
            step.cumulative_operations,
            step.description
        );
    }
}

pub fn print_tree(tree: &TreeResult) {
    println!("{:<6} {:<10} previous", "node", "distance");
    for (node, (distance, previous)) in tree.distances.iter().zip(&tree.previous).enumerate() {
        let previous = previous.map_or_else(|| "-".to_string(), |p| p.to_string());
        println!("{:<6} {:<10} {}", node, distance.to_string(), previous);
    }
}
