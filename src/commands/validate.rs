use std::path::Path;

use pathrace_core::error::Result;
use pathrace_core::format::OutputFormat;
use pathrace_core::graph::AdjacencyList;
use serde_json::json;

use super::context::{load_graph, Settings};

/// Execute the validate command
pub fn execute(settings: &Settings, path: &Path) -> Result<()> {
    let graph = load_graph(path)?;
    let adjacency = AdjacencyList::build(&graph, settings.options.edge_mode)?;

    tracing::debug!(
        nodes = graph.node_count(),
        entries = adjacency.entry_count(),
        "validated"
    );

    match settings.format {
        OutputFormat::Json => {
            let output = json!({
                "valid": true,
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "total_weight": graph.total_weight(),
                "adjacency_entries": adjacency.entry_count(),
                "edge_mode": settings.options.edge_mode,
                "graph": graph.to_record(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!(
                "valid: {} nodes, {} edges, total weight {}",
                graph.node_count(),
                graph.edge_count(),
                graph.total_weight()
            );
            if !settings.quiet {
                println!(
                    "adjacency: {} entries ({})",
                    adjacency.entry_count(),
                    settings.options.edge_mode
                );
            }
        }
    }

    Ok(())
}
