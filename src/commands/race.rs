use std::time::Instant;

use pathrace_core::error::Result;
use pathrace_core::format::OutputFormat;
use pathrace_core::race::{race, RaceLane, RaceReport};
use tracing::debug;

use super::context::{load_graph, Settings};
use super::render::format_path;
use crate::cli::QueryArgs;

/// Execute the race command
pub fn execute(settings: &Settings, query: &QueryArgs) -> Result<()> {
    let start = Instant::now();

    let graph = load_graph(&query.graph)?;
    let source = settings.source_for(query);
    let report = race(&graph, source, query.target, &settings.options)?;

    debug!(elapsed = ?start.elapsed(), winner = %report.winner, "race");

    match settings.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => print_report(&report, settings.quiet),
    }

    Ok(())
}

fn print_report(report: &RaceReport, quiet: bool) {
    if !quiet {
        match report.target {
            Some(target) => println!(
                "race: {} -> {} ({})",
                report.source, target, report.edge_mode
            ),
            None => println!("race: {} -> all ({})", report.source, report.edge_mode),
        }
        println!("{:<9} {:<11} steps", "strategy", "operations");
        print_lane(&report.linear);
        print_lane(&report.heap);
    }

    println!("winner: {}", report.winner);
    println!("distances agree: {}", yes_no(report.distances_agree));
    println!("paths agree: {}", yes_no(report.paths_agree));

    if let Some(found) = report.heap.result.as_target() {
        match &found.path {
            Some(path) => println!("path: {} (distance {})", format_path(path), found.distance),
            None => println!("path: none"),
        }
    }
}

fn print_lane(lane: &RaceLane) {
    println!(
        "{:<9} {:<11} {}",
        lane.strategy.to_string(),
        lane.operations,
        lane.step_count
    );
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
