//! Sample command implementation

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::SampleArgs;
use crate::space::Scalar;

/// Points drawn from one worker's space
#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    pub index: usize,
    pub rank: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub names: Vec<String>,
    pub points: Vec<Vec<Scalar>>,
}

pub fn format_samples(report: &SampleReport) -> String {
    report
        .points
        .iter()
        .map(|point| {
            report
                .names
                .iter()
                .zip(point)
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run_sample(args: SampleArgs, level: LogLevel) -> Result<(), String> {
    let (config, hyperspace) = super::load_hyperspace(&args.config)?;
    let space = hyperspace.for_rank(args.rank);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    log(
        level,
        LogLevel::Verbose,
        &format!("Sampling {} points from space #{} (rank {})", args.count, space.index(), args.rank),
    );
    let report = SampleReport {
        index: space.index(),
        rank: args.rank,
        seed: args.seed,
        names: config.names(),
        points: space.sample_n(args.count, &mut rng),
    };
    let rendered = args.format.render(&report, format_samples).map_err(|e| e.to_string())?;
    println!("{rendered}");

    Ok(())
}
