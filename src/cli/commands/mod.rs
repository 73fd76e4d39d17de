//! CLI command implementations

mod info;
mod list;
mod sample;
mod space;
mod validate;

#[cfg(test)]
mod tests;

use std::path::Path;

use tracing::debug;

use crate::cli::LogLevel;
use crate::config::{load_config, Cli, Command, HyperspaceConfig};
use crate::space::Hyperspace;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
        Command::Space(args) => space::run_space(args, log_level),
        Command::List(args) => list::run_list(args, log_level),
        Command::Sample(args) => sample::run_sample(args, log_level),
    }
}

/// Load a configuration and fold it into its hyperspace
fn load_hyperspace(path: &Path) -> Result<(HyperspaceConfig, Hyperspace), String> {
    let config = load_config(path).map_err(|e| format!("Config error: {e}"))?;
    let hyperspace = config.build().map_err(|e| format!("Build failed: {e}"))?;
    debug!(path = %path.display(), spaces = hyperspace.len(), "hyperspace ready");
    Ok((config, hyperspace))
}
