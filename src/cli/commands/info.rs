//! Info command implementation

use serde::Serialize;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{HyperspaceConfig, InfoArgs};
use crate::space::{Dimension, Hyperspace, Kind, Transform};

/// Full range and both halves of one hyperparameter
#[derive(Debug, Clone, Serialize)]
pub struct HyperparameterInfo {
    pub name: String,
    pub kind: Kind,
    pub transform: Transform,
    pub full: Dimension,
    pub low: Dimension,
    pub high: Dimension,
}

#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    pub n_dims: usize,
    pub spaces: usize,
    pub hyperparameters: Vec<HyperparameterInfo>,
}

pub fn build_report(config: &HyperspaceConfig, hyperspace: &Hyperspace) -> Result<InfoReport, String> {
    let full = config.dimensions().map_err(|e| e.to_string())?;
    let hyperparameters = full
        .into_iter()
        .zip(hyperspace.lows().iter().zip(hyperspace.highs()))
        .enumerate()
        .map(|(i, (full, (low, high)))| HyperparameterInfo {
            name: config.name(i),
            kind: full.kind(),
            transform: full.transform(),
            full,
            low: low.clone(),
            high: high.clone(),
        })
        .collect();
    Ok(InfoReport { n_dims: hyperspace.n_dims(), spaces: hyperspace.len(), hyperparameters })
}

pub fn format_report(report: &InfoReport) -> String {
    let mut lines = vec![format!(
        "Hyperspace: {} hyperparameters, {} spaces",
        report.n_dims, report.spaces
    )];
    for h in &report.hyperparameters {
        lines.push(String::new());
        lines.push(format!("  {} ({}, {})", h.name, h.kind, h.transform));
        lines.push(format!("    range: {}", h.full));
        lines.push(format!("    low:   {}", h.low));
        lines.push(format!("    high:  {}", h.high));
    }
    lines.join("\n")
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let (config, hyperspace) = super::load_hyperspace(&args.config)?;
    let report = build_report(&config, &hyperspace)?;

    log(level, LogLevel::Verbose, &format!("Config: {}", args.config.display()));
    let rendered = args.format.render(&report, format_report).map_err(|e| e.to_string())?;
    println!("{rendered}");

    Ok(())
}
