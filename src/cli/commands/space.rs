//! Space command implementation

use serde::Serialize;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{HyperspaceConfig, SpaceArgs};
use crate::space::{Dimension, Space};

/// One position of a space, labelled with its hyperparameter and half
#[derive(Debug, Clone, Serialize)]
pub struct NamedDimension {
    pub name: String,
    pub half: &'static str,
    pub dimension: Dimension,
}

/// Serializable view of a [`Space`]
#[derive(Debug, Clone, Serialize)]
pub struct SpaceReport {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
    pub hyperparameters: Vec<NamedDimension>,
}

impl SpaceReport {
    pub fn new(config: &HyperspaceConfig, space: &Space, rank: Option<usize>) -> Self {
        let hyperparameters = space
            .dimensions()
            .iter()
            .enumerate()
            .map(|(i, dim)| NamedDimension {
                name: config.name(i),
                half: if space.uses_low(i) { "low" } else { "high" },
                dimension: dim.clone(),
            })
            .collect();
        Self { index: space.index(), rank, hyperparameters }
    }
}

pub fn format_space(report: &SpaceReport) -> String {
    let header = match report.rank {
        Some(rank) => format!("Space #{} (rank {rank})", report.index),
        None => format!("Space #{}", report.index),
    };
    let mut lines = vec![header];
    let width = report.hyperparameters.iter().map(|h| h.name.len()).max().unwrap_or(0);
    for h in &report.hyperparameters {
        lines.push(format!("  {:<width$}  {:<4}  {}", h.name, h.half, h.dimension));
    }
    lines.join("\n")
}

pub fn run_space(args: SpaceArgs, level: LogLevel) -> Result<(), String> {
    let (config, hyperspace) = super::load_hyperspace(&args.config)?;

    let (space, rank) = match (args.index, args.rank) {
        (Some(index), _) => {
            let space = hyperspace
                .get(index)
                .ok_or_else(|| format!("Index {index} out of range (0..{})", hyperspace.len()))?;
            (space, None)
        }
        (None, Some(rank)) => (hyperspace.for_rank(rank), Some(rank)),
        (None, None) => return Err("Either --index or --rank is required".to_string()),
    };

    log(
        level,
        LogLevel::Verbose,
        &format!("Selected space {} of {}", space.index(), hyperspace.len()),
    );
    let report = SpaceReport::new(&config, &space, rank);
    let rendered = args.format.render(&report, format_space).map_err(|e| e.to_string())?;
    println!("{rendered}");

    Ok(())
}
