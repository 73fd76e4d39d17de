//! CLI module for hyperfold
//!
//! Command handlers and console output helpers for the `hyperfold` binary.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::LogLevel;

// Re-export Cli from config for convenience
pub use crate::config::Cli;
