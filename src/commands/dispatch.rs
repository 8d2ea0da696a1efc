//! Command dispatch logic for pathrace

use std::time::Instant;

use pathrace_core::error::Result;
use pathrace_core::trace_time;
use tracing::debug;

use super::context::Settings;
use super::{init, race, run as run_command, validate};
use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let settings = Settings::resolve(cli)?;

    debug!(
        elapsed = ?start.elapsed(),
        format = %settings.format,
        edge_mode = %settings.options.edge_mode,
        "resolve_settings"
    );

    let result = match &cli.command {
        Commands::Run {
            query,
            strategy,
            steps,
        } => run_command::execute(&settings, query, *strategy, *steps),
        Commands::Race { query } => race::execute(&settings, query),
        Commands::Validate { graph } => validate::execute(&settings, graph),
        Commands::Init { force } => init::execute(&settings, *force),
    };

    trace_time!(start, "dispatch");
    result
}
