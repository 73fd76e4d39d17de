//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{HyperspaceConfig, ValidateArgs};
use crate::space::Hyperspace;

/// Format the one-line summary of a folded configuration
pub fn format_summary(hyperspace: &Hyperspace) -> String {
    let n = hyperspace.n_dims();
    let noun = if n == 1 { "hyperparameter" } else { "hyperparameters" };
    format!("  {n} {noun} → {} spaces", hyperspace.len())
}

/// Format one line per hyperparameter
pub fn format_hyperparameters(config: &HyperspaceConfig, hyperspace: &Hyperspace) -> String {
    hyperspace
        .lows()
        .iter()
        .enumerate()
        .map(|(i, low)| {
            let fixed = hyperspace.pair(i).is_some_and(|p| p.is_degenerate());
            let suffix = if fixed { " (fixed)" } else { "" };
            format!("  {}: {} ~ {}{suffix}", config.name(i), low.kind(), low.transform())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(level, LogLevel::Normal, &format!("Validating config: {}", args.config.display()));

    let (config, hyperspace) = super::load_hyperspace(&args.config)?;

    log(level, LogLevel::Normal, "Configuration is valid");
    log(level, LogLevel::Normal, &format_summary(&hyperspace));
    log(level, LogLevel::Verbose, &format_hyperparameters(&config, &hyperspace));

    Ok(())
}
