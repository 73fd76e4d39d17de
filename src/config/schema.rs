//! YAML/JSON schema for hyperspace configuration files
//!
//! ```yaml
//! transform: normalize          # optional, applied to every hyperparameter
//! hyperparameters:
//!   - name: max_depth
//!     range: [2, 10]
//!   - name: learning_rate
//!     range: [0.01, 1.0, log-uniform]
//!   - name: criterion
//!     range: [gini, entropy]
//!     transform: onehot         # overrides the file-wide transform
//!   - [1, 100]                  # bare range, shown as x3
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::space::{normalize, Descriptor, Dimension, Hyperspace, HyperspaceBuilder, Transform};

/// One hyperparameter entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "HyperparameterEntry")]
pub struct HyperparameterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub range: Descriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
}

impl HyperparameterSpec {
    pub fn new(name: impl Into<String>, range: impl Into<Descriptor>) -> Self {
        Self { name: Some(name.into()), range: range.into(), transform: None }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }
}

/// Accept either a full entry or a bare range
#[derive(Deserialize)]
#[serde(untagged)]
enum HyperparameterEntry {
    Full {
        #[serde(default)]
        name: Option<String>,
        range: Descriptor,
        #[serde(default)]
        transform: Option<Transform>,
    },
    Bare(Descriptor),
}

impl From<HyperparameterEntry> for HyperparameterSpec {
    fn from(entry: HyperparameterEntry) -> Self {
        match entry {
            HyperparameterEntry::Full { name, range, transform } => Self { name, range, transform },
            HyperparameterEntry::Bare(range) => Self { name: None, range, transform: None },
        }
    }
}

/// Complete hyperspace configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HyperspaceConfig {
    /// Transform for every hyperparameter without its own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
    pub hyperparameters: Vec<HyperparameterSpec>,
}

impl HyperspaceConfig {
    pub fn new(hyperparameters: Vec<HyperparameterSpec>) -> Self {
        Self { transform: None, hyperparameters }
    }

    /// Display name of hyperparameter `i` (`x{i}` when unnamed)
    pub fn name(&self, i: usize) -> String {
        self.hyperparameters
            .get(i)
            .and_then(|h| h.name.clone())
            .unwrap_or_else(|| format!("x{i}"))
    }

    pub fn names(&self) -> Vec<String> {
        (0..self.hyperparameters.len()).map(|i| self.name(i)).collect()
    }

    fn effective_transform(&self, spec: &HyperparameterSpec) -> Option<Transform> {
        spec.transform.or(self.transform)
    }

    /// Normalize every range into its full, unsplit dimension
    pub fn dimensions(&self) -> Result<Vec<Dimension>> {
        self.hyperparameters
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                normalize(&spec.range, self.effective_transform(spec)).map_err(|e| e.at(i))
            })
            .collect()
    }

    /// Run the build pipeline over the configured hyperparameters
    pub fn build(&self) -> Result<Hyperspace> {
        let mut builder = HyperspaceBuilder::new();
        if let Some(transform) = self.transform {
            builder = builder.with_transform(transform);
        }
        builder.build_entries(self.hyperparameters.iter().map(|spec| (&spec.range, spec.transform)))
    }
}
