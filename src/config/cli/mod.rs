//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! hyperfold validate hyperspace.yaml
//! hyperfold info hyperspace.yaml --format json
//! hyperfold space hyperspace.yaml --rank 5
//! hyperfold list hyperspace.yaml
//! hyperfold sample hyperspace.yaml --rank 3 --count 10 --seed 42
//! ```

mod core;
mod types;


pub use core::{
    parse_args, Cli, Command, InfoArgs, ListArgs, SampleArgs, SpaceArgs, ValidateArgs,
};
pub use types::OutputFormat;
