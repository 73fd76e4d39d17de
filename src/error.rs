//! Error types with actionable diagnostics.
//!
//! Every variant states what went wrong and, where the caller can fix it,
//! how to fix it.

use std::path::PathBuf;
use thiserror::Error;

use crate::space::Kind;

/// Result type alias for hyperfold operations.
pub type Result<T> = std::result::Result<T, HyperspaceError>;

/// Errors raised while normalizing, splitting, or folding a hyperspace.
#[derive(Debug, Error)]
pub enum HyperspaceError {
    /// Descriptor shape or element types are not recognized.
    #[error(
        "Invalid descriptor{} {descriptor}: {reason}\n  → Use (lower, upper), (lower, upper, \"uniform\"|\"log-uniform\"), or a list of categories",
        position(.index)
    )]
    InvalidDescriptor { index: Option<usize>, descriptor: String, reason: String },

    /// Transform name is unknown, or not valid for the dimension kind.
    #[error(
        "Unsupported transform '{transform}'{}{}\n  → {}",
        for_kind(.kind),
        position(.index),
        supported(.kind)
    )]
    UnsupportedTransform { index: Option<usize>, transform: String, kind: Option<Kind> },

    /// Low and high sequences handed to the folder differ in length.
    #[error("Low and high sequences must have the same length, got {lows} and {highs}")]
    LengthMismatch { lows: usize, highs: usize },

    /// More dimensions than a combination index can address.
    #[error("Too many dimensions to fold: {count} (maximum {max})\n  → Fix some hyperparameters or search them in separate runs")]
    TooManyDimensions { count: usize, max: usize },

    /// Configuration file could not be parsed or is semantically invalid.
    #[error("Invalid configuration in {path}:\n  {message}\n  → Check the hyperparameters section of the file")]
    Config { path: PathBuf, message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Output could not be serialized.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

fn position(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at position {i}"),
        None => String::new(),
    }
}

fn for_kind(kind: &Option<Kind>) -> String {
    match kind {
        Some(k) => format!(" for {k} dimension"),
        None => String::new(),
    }
}

fn supported(kind: &Option<Kind>) -> &'static str {
    match kind {
        Some(Kind::Integer | Kind::Real) => "Supported for numeric dimensions: identity, normalize",
        Some(Kind::Categorical) => "Supported for categorical dimensions: identity, onehot",
        None => "Supported transforms: identity, normalize, onehot",
    }
}

impl HyperspaceError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Create an invalid-descriptor error without a position.
    pub(crate) fn invalid(descriptor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor { index: None, descriptor: descriptor.into(), reason: reason.into() }
    }

    /// Attach the offending descriptor position, keeping any position already set.
    pub fn at(self, position: usize) -> Self {
        match self {
            Self::InvalidDescriptor { index: None, descriptor, reason } => {
                Self::InvalidDescriptor { index: Some(position), descriptor, reason }
            }
            Self::UnsupportedTransform { index: None, transform, kind } => {
                Self::UnsupportedTransform { index: Some(position), transform, kind }
            }
            other => other,
        }
    }

    /// Create a serialization error from any displayable cause.
    pub fn serialization(cause: impl std::fmt::Display) -> Self {
        Self::Serialization { message: cause.to_string() }
    }

    /// Check if this error is caused by user input rather than a pipeline defect.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDescriptor { .. }
                | Self::UnsupportedTransform { .. }
                | Self::TooManyDimensions { .. }
                | Self::Config { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDescriptor { .. } => "E001",
            Self::UnsupportedTransform { .. } => "E002",
            Self::LengthMismatch { .. } => "E010",
            Self::TooManyDimensions { .. } => "E011",
            Self::Config { .. } => "E020",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
        }
    }
}
