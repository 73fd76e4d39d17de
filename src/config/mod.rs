//! Hyperspace configuration files and command-line arguments
//!
//! A configuration lists the hyperparameters to search, each with a range in
//! any shape the normalizer accepts, an optional name and an optional
//! transform.

pub mod cli;
mod loader;
mod schema;
pub mod validate;

pub use cli::{
    parse_args, Cli, Command, InfoArgs, ListArgs, OutputFormat, SampleArgs, SpaceArgs, ValidateArgs,
};
pub use loader::load_config;
pub use schema::{HyperparameterSpec, HyperspaceConfig};
pub use validate::{validate_config, ValidationError};
