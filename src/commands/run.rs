use std::time::Instant;

use pathrace_core::error::Result;
use pathrace_core::format::OutputFormat;
use pathrace_core::graph::{Graph, RunResult, Strategy};
use serde_json::json;
use tracing::debug;

use super::context::{load_graph, Settings};
use super::render::{format_hops, format_path, print_steps, print_tree};
use crate::cli::QueryArgs;

/// Execute the run command
pub fn execute(
    settings: &Settings,
    query: &QueryArgs,
    strategy: Option<Strategy>,
    show_steps: bool,
) -> Result<()> {
    let start = Instant::now();

    let graph = load_graph(&query.graph)?;
    let strategy = strategy.unwrap_or(settings.strategy);
    let source = settings.source_for(query);

    let result = strategy.run(&graph, source, query.target, &settings.options)?;

    debug!(
        elapsed = ?start.elapsed(),
        %strategy,
        operations = result.operations(),
        steps = result.steps().len(),
        "run"
    );

    match settings.format {
        OutputFormat::Json => {
            let output = json!({
                "strategy": strategy,
                "source": source,
                "target": query.target,
                "edge_mode": settings.options.edge_mode,
                "result": result,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !settings.quiet {
                println!(
                    "strategy: {} ({}, source {})",
                    strategy, settings.options.edge_mode, source
                );
            }

            print_result(&graph, &result, settings);
            println!("operations: {}", result.operations());

            if show_steps {
                print_steps(result.steps());
            }
        }
    }

    Ok(())
}

fn print_result(graph: &Graph, result: &RunResult, settings: &Settings) {
    let found = match result {
        RunResult::Target(found) => found,
        RunResult::Tree(tree) => return print_tree(tree),
    };

    match &found.path {
        Some(path) => {
            println!("path: {}", format_path(path));
            if !settings.quiet {
                println!(
                    "hops: {}",
                    format_hops(graph, path, settings.options.edge_mode)
                );
            }
        }
        None => println!("path: none"),
    }
    println!("distance: {}", found.distance);
}
