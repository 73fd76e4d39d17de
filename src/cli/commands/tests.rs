//! CLI command tests
//!
//! Runs each command handler against configuration files on disk.

use super::*;
use crate::cli::LogLevel;
use crate::config::cli::{InfoArgs, ListArgs, SampleArgs, SpaceArgs, ValidateArgs};
use crate::config::{Cli, Command, OutputFormat};
use std::path::PathBuf;
use tempfile::TempDir;

const CONFIG: &str = r"
hyperparameters:
  - name: max_depth
    range: [2, 10]
  - name: learning_rate
    range: [0.01, 1.0, log-uniform]
  - name: criterion
    range: [gini, entropy, log_loss]
";

/// Write a config file into `dir` and return its path
fn create_test_config(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let config_path = dir.path().join(file_name);
    std::fs::write(&config_path, content).expect("file write should succeed");
    config_path
}

fn valid_config(dir: &TempDir) -> PathBuf {
    create_test_config(dir, "hyperspace.yaml", CONFIG)
}

// ---- Validate Tests ----

#[test]
fn test_validate_command_basic() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let args = ValidateArgs { config: valid_config(&dir) };
    assert!(validate::run_validate(args, LogLevel::Quiet).is_ok());
}

#[test]
fn test_validate_command_missing_file() {
    let args = ValidateArgs { config: PathBuf::from("/nonexistent/hyperspace.yaml") };
    let err = validate::run_validate(args, LogLevel::Quiet).unwrap_err();
    assert!(err.starts_with("Config error"));
}

#[test]
fn test_validate_command_bad_range() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let path = create_test_config(
        &dir,
        "bad.yaml",
        "hyperparameters:\n  - name: a\n    range: [1, 10]\n  - name: b\n    range: [10, 1]\n",
    );
    let err = validate::run_validate(ValidateArgs { config: path }, LogLevel::Quiet).unwrap_err();
    assert!(err.starts_with("Build failed"));
    assert!(err.contains("position 1"));
}

#[test]
fn test_validate_command_empty_list() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let path = create_test_config(&dir, "empty.yaml", "hyperparameters: []\n");
    let err = validate::run_validate(ValidateArgs { config: path }, LogLevel::Quiet).unwrap_err();
    assert!(err.contains("No hyperparameters"));
}

// ---- Info Tests ----

#[test]
fn test_info_command_all_formats() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let config = valid_config(&dir);
    for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml] {
        let args = InfoArgs { config: config.clone(), format };
        assert!(info::run_info(args, LogLevel::Quiet).is_ok(), "format {format}");
    }
}

#[test]
fn test_info_command_json_config() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let path = create_test_config(
        &dir,
        "hyperspace.json",
        r#"{"hyperparameters": [{"name": "units", "range": [16, 256]}, [0.0, 0.5]]}"#,
    );
    let args = InfoArgs { config: path, format: OutputFormat::Json };
    assert!(info::run_info(args, LogLevel::Quiet).is_ok());
}

// ---- Space Tests ----

#[test]
fn test_space_command_by_index() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let args = SpaceArgs {
        config: valid_config(&dir),
        index: Some(7),
        rank: None,
        format: OutputFormat::Text,
    };
    assert!(space::run_space(args, LogLevel::Quiet).is_ok());
}

#[test]
fn test_space_command_index_out_of_range() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let args = SpaceArgs {
        config: valid_config(&dir),
        index: Some(8),
        rank: None,
        format: OutputFormat::Text,
    };
    let err = space::run_space(args, LogLevel::Quiet).unwrap_err();
    assert!(err.contains("out of range"));
}

#[test]
fn test_space_command_rank_wraps() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let args = SpaceArgs {
        config: valid_config(&dir),
        index: None,
        rank: Some(1_000_003),
        format: OutputFormat::Yaml,
    };
    assert!(space::run_space(args, LogLevel::Quiet).is_ok());
}

#[test]
fn test_space_command_needs_selector() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let args =
        SpaceArgs { config: valid_config(&dir), index: None, rank: None, format: OutputFormat::Text };
    assert!(space::run_space(args, LogLevel::Quiet).is_err());
}

// ---- List Tests ----

#[test]
fn test_list_command() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let args = ListArgs { config: valid_config(&dir), format: OutputFormat::Json };
    assert!(list::run_list(args, LogLevel::Quiet).is_ok());
}

#[test]
fn test_list_command_refuses_huge_output() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let mut content = String::from("hyperparameters:\n");
    for _ in 0..17 {
        content.push_str("  - [0, 100]\n");
    }
    let path = create_test_config(&dir, "wide.yaml", &content);
    let err = list::run_list(ListArgs { config: path, format: OutputFormat::Text }, LogLevel::Quiet)
        .unwrap_err();
    assert!(err.contains("Refusing to list 131072 spaces"));
}

// ---- Sample Tests ----

#[test]
fn test_sample_command_seeded() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let args = SampleArgs {
        config: valid_config(&dir),
        rank: 3,
        count: 5,
        seed: Some(42),
        format: OutputFormat::Text,
    };
    assert!(sample::run_sample(args, LogLevel::Quiet).is_ok());
}

#[test]
fn test_sample_command_unseeded() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let args = SampleArgs {
        config: valid_config(&dir),
        rank: 0,
        count: 2,
        seed: None,
        format: OutputFormat::Json,
    };
    assert!(sample::run_sample(args, LogLevel::Quiet).is_ok());
}

// ---- Dispatch Tests ----

#[test]
fn test_run_command_quiet() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let cli = Cli {
        verbose: false,
        quiet: true,
        command: Command::List(ListArgs { config: valid_config(&dir), format: OutputFormat::Text }),
    };
    assert!(run_command(cli).is_ok());
}

#[test]
fn test_run_command_verbose() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let cli = Cli {
        verbose: true,
        quiet: false,
        command: Command::Validate(ValidateArgs { config: valid_config(&dir) }),
    };
    assert!(run_command(cli).is_ok());
}

#[test]
fn test_load_hyperspace() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let (config, hyperspace) = load_hyperspace(&valid_config(&dir)).unwrap();
    assert_eq!(config.names(), vec!["max_depth", "learning_rate", "criterion"]);
    assert_eq!(hyperspace.len(), 8);
}
