//! Validation error types

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("No hyperparameters defined (at least one is required)")]
    EmptyHyperparameters,

    #[error("Too many hyperparameters: {count} (must be <= {max})")]
    TooManyHyperparameters { count: usize, max: usize },

    #[error("Hyperparameter at position {0} has an empty name")]
    EmptyName(usize),

    #[error("Duplicate hyperparameter name '{name}' at positions {first} and {second}")]
    DuplicateName { name: String, first: usize, second: usize },
}
