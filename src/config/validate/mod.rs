//! Configuration validation
//!
//! Checks hyperspace configurations for structural problems before any
//! dimension is normalized.

mod error;
mod validator;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

pub use error::ValidationError;
pub use validator::validate_config;
