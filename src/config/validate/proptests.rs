//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use proptest::prelude::*;

fn arb_valid_config() -> impl Strategy<Value = HyperspaceConfig> {
    proptest::collection::btree_set("[a-z_]{1,12}", 1..12).prop_map(|names| {
        HyperspaceConfig::new(
            names.into_iter().map(|name| HyperparameterSpec::new(name, (0, 10))).collect(),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_unique_names_pass(config in arb_valid_config()) {
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_repeated_name_fails(config in arb_valid_config(), pick in any::<prop::sample::Index>()) {
        let mut config = config;
        let source = pick.index(config.hyperparameters.len());
        let name = config.hyperparameters[source].name.clone();
        config.hyperparameters.push(HyperparameterSpec {
            name,
            range: (1, 2).into(),
            transform: None,
        });
        let second = config.hyperparameters.len() - 1;
        let is_duplicate = matches!(
            validate_config(&config),
            Err(ValidationError::DuplicateName { first, second: s, .. }) if first == source && s == second
        );
        prop_assert!(is_duplicate);
    }

    #[test]
    fn prop_valid_config_builds(config in arb_valid_config()) {
        let hs = config.build().unwrap();
        prop_assert_eq!(hs.len(), 1usize << config.hyperparameters.len());
    }
}
