//! List command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::ListArgs;

use super::space::{format_space, SpaceReport};

/// Largest number of spaces the list command prints
pub const MAX_LISTED_SPACES: usize = 1 << 16;

pub fn format_list(reports: &[SpaceReport]) -> String {
    reports.iter().map(format_space).collect::<Vec<_>>().join("\n\n")
}

pub fn run_list(args: ListArgs, level: LogLevel) -> Result<(), String> {
    let (config, hyperspace) = super::load_hyperspace(&args.config)?;

    if hyperspace.len() > MAX_LISTED_SPACES {
        return Err(format!(
            "Refusing to list {} spaces (limit {MAX_LISTED_SPACES})\n  → Use `hyperfold space --index` or `--rank` to print one space",
            hyperspace.len()
        ));
    }

    log(level, LogLevel::Normal, &format!("{} spaces", hyperspace.len()));
    let reports: Vec<SpaceReport> =
        hyperspace.iter().map(|space| SpaceReport::new(&config, &space, None)).collect();
    let rendered = args.format.render(&reports, |r| format_list(r)).map_err(|e| e.to_string())?;
    println!("{rendered}");

    Ok(())
}
