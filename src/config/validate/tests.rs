//! Unit tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use crate::space::{Descriptor, MAX_DIMENSIONS};

fn create_valid_config() -> HyperspaceConfig {
    HyperspaceConfig::new(vec![
        HyperparameterSpec::new("max_depth", (2, 10)),
        HyperparameterSpec::new("learning_rate", (0.01, 1.0, "log-uniform")),
        HyperparameterSpec::new("criterion", vec!["gini", "entropy"]),
    ])
}

#[test]
fn test_valid_config() {
    assert!(validate_config(&create_valid_config()).is_ok());
}

#[test]
fn test_unnamed_entries_are_valid() {
    let mut config = create_valid_config();
    config.hyperparameters.push(HyperparameterSpec {
        name: None,
        range: Descriptor::from((1, 100)),
        transform: None,
    });
    config.hyperparameters.push(HyperparameterSpec {
        name: None,
        range: Descriptor::from((1, 100)),
        transform: None,
    });
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_empty_hyperparameters() {
    let config = HyperspaceConfig::default();
    let err = validate_config(&config).unwrap_err();
    assert_eq!(err, ValidationError::EmptyHyperparameters);
}

#[test]
fn test_duplicate_name() {
    let mut config = create_valid_config();
    config.hyperparameters.push(HyperparameterSpec::new("max_depth", (1, 3)));
    let err = validate_config(&config).unwrap_err();
    assert_eq!(
        err,
        ValidationError::DuplicateName { name: "max_depth".to_string(), first: 0, second: 3 }
    );
    assert!(err.to_string().contains("positions 0 and 3"));
}

#[test]
fn test_empty_name() {
    let mut config = create_valid_config();
    config.hyperparameters[1].name = Some("  ".to_string());
    let err = validate_config(&config).unwrap_err();
    assert_eq!(err, ValidationError::EmptyName(1));
}

#[test]
fn test_too_many_hyperparameters() {
    let specs = (0..=MAX_DIMENSIONS).map(|i| HyperparameterSpec::new(format!("p{i}"), (0, 1))).collect();
    let err = validate_config(&HyperspaceConfig::new(specs)).unwrap_err();
    assert!(matches!(err, ValidationError::TooManyHyperparameters { .. }));
}

#[test]
fn test_range_contents_not_checked() {
    // malformed ranges are left to the normalizer
    let config = HyperspaceConfig::new(vec![HyperparameterSpec::new("bad", Descriptor::values([1]))]);
    assert!(validate_config(&config).is_ok());
    assert!(config.build().is_err());
}
