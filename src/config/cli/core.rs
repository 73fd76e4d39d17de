//! Core CLI types - Cli, Command, and argument structs

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Hyperfold: split a hyperparameter search space into 2^N sub-spaces
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "hyperfold")]
#[command(version)]
#[command(
    about = "Split a hyperparameter search space into 2^N sub-spaces, one per parallel optimizer"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a configuration and report how many spaces it folds into
    Validate(ValidateArgs),

    /// Show every hyperparameter with its low and high half
    Info(InfoArgs),

    /// Print the sub-space for one index or worker rank
    Space(SpaceArgs),

    /// Print every sub-space
    List(ListArgs),

    /// Draw random points from a worker's sub-space
    Sample(SampleArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML or JSON configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML or JSON configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the space command
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(group(ArgGroup::new("selector").required(true).args(["index", "rank"])))]
pub struct SpaceArgs {
    /// Path to YAML or JSON configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Combination index in [0, 2^N)
    #[arg(short, long)]
    pub index: Option<usize>,

    /// Worker rank, mapped to index rank mod 2^N
    #[arg(short, long)]
    pub rank: Option<usize>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the list command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ListArgs {
    /// Path to YAML or JSON configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the sample command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SampleArgs {
    /// Path to YAML or JSON configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Worker rank, mapped to index rank mod 2^N
    #[arg(short, long, default_value_t = 0)]
    pub rank: usize,

    /// Number of points to draw
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
