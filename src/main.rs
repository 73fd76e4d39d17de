//! Hyperfold CLI
//!
//! Splits the hyperparameter search space described by a config file into
//! 2^N sub-spaces, one per parallel optimizer.
//!
//! # Usage
//!
//! ```bash
//! # Check a config and count its spaces
//! hyperfold validate hyperspace.yaml
//!
//! # Show each hyperparameter with its two halves
//! hyperfold info hyperspace.yaml --format yaml
//!
//! # Space for worker rank 5
//! hyperfold space hyperspace.yaml --rank 5
//!
//! # Draw points from that space
//! hyperfold sample hyperspace.yaml --rank 5 --count 10 --seed 42
//! ```

use clap::Parser;
use hyperfold::cli::{run_command, Cli};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("hyperfold=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hyperfold=warn"))
    };
    fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
