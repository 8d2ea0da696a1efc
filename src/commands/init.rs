use std::env;

use pathrace_core::config::CONFIG_FILE;
use pathrace_core::error::{PathraceError, Result};
use pathrace_core::format::OutputFormat;
use serde_json::json;

use super::context::Settings;

/// Execute the init command
pub fn execute(settings: &Settings, force: bool) -> Result<()> {
    let path = env::current_dir()?.join(CONFIG_FILE);
    if path.exists() && !force {
        return Err(PathraceError::UsageError(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let config = settings.to_config();
    config.save(&path)?;
    tracing::debug!(path = %path.display(), "config_written");

    match settings.format {
        OutputFormat::Json => {
            let output = json!({
                "path": path.display().to_string(),
                "config": config,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !settings.quiet {
                println!("wrote {}", path.display());
            }
        }
    }

    Ok(())
}
