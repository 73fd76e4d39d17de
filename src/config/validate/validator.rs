//! Configuration validation logic

use std::collections::HashMap;

use super::error::ValidationError;
use crate::config::schema::HyperspaceConfig;
use crate::space::MAX_DIMENSIONS;

/// Validate a hyperspace configuration
///
/// Checks:
/// - At least one hyperparameter, and no more than a combination index can address
/// - Names, when given, are non-empty and unique
///
/// Range contents are checked later by the normalizer.
pub fn validate_config(config: &HyperspaceConfig) -> Result<(), ValidationError> {
    let count = config.hyperparameters.len();
    if count == 0 {
        return Err(ValidationError::EmptyHyperparameters);
    }
    if count > MAX_DIMENSIONS {
        return Err(ValidationError::TooManyHyperparameters { count, max: MAX_DIMENSIONS });
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (position, spec) in config.hyperparameters.iter().enumerate() {
        let Some(name) = spec.name.as_deref() else {
            continue;
        };
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName(position));
        }
        if let Some(&first) = seen.get(name) {
            return Err(ValidationError::DuplicateName {
                name: name.to_string(),
                first,
                second: position,
            });
        }
        seen.insert(name, position);
    }

    Ok(())
}
