//! Typed search-space dimensions
//!
//! A [`Dimension`] is the validated form of one hyperparameter's domain. The
//! kind lives in the [`Domain`] tag, so every kind-specific operation is an
//! exhaustive `match` rather than a trait object.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{HyperspaceError, Result};

/// Semantic kind of a dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Integer,
    Real,
    Categorical,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Integer => "integer",
            Kind::Real => "real",
            Kind::Categorical => "categorical",
        };
        f.write_str(name)
    }
}

/// Sampling prior of a real dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Prior {
    #[default]
    #[serde(rename = "uniform")]
    Uniform,
    #[serde(rename = "log-uniform")]
    LogUniform,
}

impl Prior {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prior::Uniform => "uniform",
            Prior::LogUniform => "log-uniform",
        }
    }
}

impl FromStr for Prior {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(Prior::Uniform),
            "log-uniform" => Ok(Prior::LogUniform),
            _ => Err(format!("Unknown prior: {s}. Valid priors: uniform, log-uniform")),
        }
    }
}

/// Encoding applied when a point is handed to an optimizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    /// Values are passed through as-is (category index for categorical)
    Identity,
    /// Numeric values scaled into [0, 1]
    Normalize,
    /// One column per category
    Onehot,
}

impl Transform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transform::Identity => "identity",
            Transform::Normalize => "normalize",
            Transform::Onehot => "onehot",
        }
    }

    /// Transform used when none is requested
    pub fn default_for(kind: Kind) -> Self {
        match kind {
            Kind::Integer | Kind::Real => Transform::Identity,
            Kind::Categorical => Transform::Onehot,
        }
    }

    /// Whether this transform is defined for `kind`
    pub fn supports(&self, kind: Kind) -> bool {
        matches!(
            (self, kind),
            (Transform::Identity, _)
                | (Transform::Normalize, Kind::Integer | Kind::Real)
                | (Transform::Onehot, Kind::Categorical)
        )
    }
}

impl FromStr for Transform {
    type Err = HyperspaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "identity" => Ok(Transform::Identity),
            "normalize" => Ok(Transform::Normalize),
            "onehot" => Ok(Transform::Onehot),
            _ => Err(HyperspaceError::UnsupportedTransform {
                index: None,
                transform: s.to_string(),
                kind: None,
            }),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loosely typed element of a range descriptor or category list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Real(f64),
    Text(String),
}

impl Scalar {
    /// Integers and reals; booleans are not numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self, Scalar::Int(_) | Scalar::Real(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(v) => Some(*v as f64),
            Scalar::Real(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Real(v) => write!(f, "{v:?}"),
            Scalar::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(i64::from(v))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Real(v)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

/// Domain of a dimension, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Domain {
    /// Inclusive integer range [low, high]
    Integer { low: i64, high: i64 },
    /// Real range [low, high]
    Real {
        low: f64,
        high: f64,
        #[serde(default)]
        prior: Prior,
    },
    /// Ordered category list
    Categorical { categories: Vec<Scalar> },
}

impl Domain {
    pub fn kind(&self) -> Kind {
        match self {
            Domain::Integer { .. } => Kind::Integer,
            Domain::Real { .. } => Kind::Real,
            Domain::Categorical { .. } => Kind::Categorical,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Domain::Integer { low, high } => {
                if low > high {
                    return Err(HyperspaceError::invalid(
                        self.to_string(),
                        "lower bound must not exceed upper bound",
                    ));
                }
            }
            Domain::Real { low, high, prior } => {
                if !low.is_finite() || !high.is_finite() {
                    return Err(HyperspaceError::invalid(self.to_string(), "bounds must be finite"));
                }
                if low > high {
                    return Err(HyperspaceError::invalid(
                        self.to_string(),
                        "lower bound must not exceed upper bound",
                    ));
                }
                if *prior == Prior::LogUniform && *low <= 0.0 {
                    return Err(HyperspaceError::invalid(
                        self.to_string(),
                        "log-uniform prior requires a positive lower bound",
                    ));
                }
            }
            Domain::Categorical { categories } => {
                if categories.is_empty() {
                    return Err(HyperspaceError::invalid(
                        self.to_string(),
                        "at least one category is required",
                    ));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Integer { low, high } => write!(f, "Integer({low}, {high})"),
            Domain::Real { low, high, prior } => {
                write!(f, "Real({low:?}, {high:?}, {})", prior.as_str())
            }
            Domain::Categorical { categories } => {
                let items: Vec<String> = categories.iter().map(ToString::to_string).collect();
                write!(f, "Categorical[{}]", items.join(", "))
            }
        }
    }
}

#[derive(Serialize, Deserialize)]
struct DimensionRepr {
    #[serde(flatten)]
    domain: Domain,
    #[serde(default)]
    transform: Option<Transform>,
}

/// Validated, typed hyperparameter dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DimensionRepr", into = "DimensionRepr")]
pub struct Dimension {
    domain: Domain,
    transform: Transform,
}

impl TryFrom<DimensionRepr> for Dimension {
    type Error = HyperspaceError;

    fn try_from(repr: DimensionRepr) -> Result<Self> {
        Dimension::new(repr.domain, repr.transform)
    }
}

impl From<Dimension> for DimensionRepr {
    fn from(dim: Dimension) -> Self {
        DimensionRepr { domain: dim.domain, transform: Some(dim.transform) }
    }
}

impl Dimension {
    /// Validate `domain` and attach `transform`, or the kind's default when `None`
    pub fn new(domain: Domain, transform: Option<Transform>) -> Result<Self> {
        domain.validate()?;
        let kind = domain.kind();
        let transform = match transform {
            Some(t) if t.supports(kind) => t,
            Some(t) => {
                return Err(HyperspaceError::UnsupportedTransform {
                    index: None,
                    transform: t.as_str().to_string(),
                    kind: Some(kind),
                })
            }
            None => Transform::default_for(kind),
        };
        Ok(Self { domain, transform })
    }

    /// Integer dimension over [low, high]
    pub fn integer(low: i64, high: i64) -> Result<Self> {
        Self::new(Domain::Integer { low, high }, None)
    }

    /// Real dimension over [low, high] with a uniform prior
    pub fn real(low: f64, high: f64) -> Result<Self> {
        Self::real_with_prior(low, high, Prior::Uniform)
    }

    pub fn real_with_prior(low: f64, high: f64, prior: Prior) -> Result<Self> {
        Self::new(Domain::Real { low, high, prior }, None)
    }

    /// Categorical dimension over an ordered category list
    pub fn categorical<T: Into<Scalar>>(categories: impl IntoIterator<Item = T>) -> Result<Self> {
        let categories = categories.into_iter().map(Into::into).collect();
        Self::new(Domain::Categorical { categories }, None)
    }

    /// Replace the transform, checking it against the kind
    pub fn with_transform(self, transform: Transform) -> Result<Self> {
        Self::new(self.domain, Some(transform))
    }

    /// Build a sibling dimension sharing this one's transform
    pub(crate) fn with_domain(&self, domain: Domain) -> Self {
        Self { domain, transform: self.transform }
    }

    pub fn kind(&self) -> Kind {
        self.domain.kind()
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Prior of a numeric dimension; integers are always uniform
    pub fn prior(&self) -> Option<Prior> {
        match &self.domain {
            Domain::Integer { .. } => Some(Prior::Uniform),
            Domain::Real { prior, .. } => Some(*prior),
            Domain::Categorical { .. } => None,
        }
    }

    /// Numeric bounds as `(lower, upper)`
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match &self.domain {
            Domain::Integer { low, high } => Some((*low as f64, *high as f64)),
            Domain::Real { low, high, .. } => Some((*low, *high)),
            Domain::Categorical { .. } => None,
        }
    }

    pub fn categories(&self) -> Option<&[Scalar]> {
        match &self.domain {
            Domain::Categorical { categories } => Some(categories),
            _ => None,
        }
    }

    /// A dimension that admits exactly one value
    pub fn is_degenerate(&self) -> bool {
        match &self.domain {
            Domain::Integer { low, high } => low == high,
            Domain::Real { low, high, .. } => low == high,
            Domain::Categorical { categories } => categories.len() < 2,
        }
    }

    /// Check if a value lies in this dimension
    pub fn contains(&self, value: &Scalar) -> bool {
        match (&self.domain, value) {
            (Domain::Integer { low, high }, Scalar::Int(v)) => v >= low && v <= high,
            (Domain::Real { low, high, .. }, Scalar::Int(_) | Scalar::Real(_)) => {
                value.as_f64().is_some_and(|v| v >= *low && v <= *high)
            }
            (Domain::Categorical { categories }, v) => categories.contains(v),
            _ => false,
        }
    }

    /// Sample a random value from this dimension
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Scalar {
        match &self.domain {
            Domain::Integer { low, high } => Scalar::Int(rng.random_range(*low..=*high)),
            Domain::Real { low, high, prior } => {
                let value = match prior {
                    Prior::LogUniform => {
                        let log_low = low.ln();
                        let log_high = high.ln();
                        (log_low + rng.random::<f64>() * (log_high - log_low)).exp()
                    }
                    Prior::Uniform => {
                        // weighted form stays finite when high - low overflows
                        let r = rng.random::<f64>();
                        low * (1.0 - r) + high * r
                    }
                };
                // exp/ln round trips can step just outside the bounds
                Scalar::Real(value.clamp(*low, *high))
            }
            Domain::Categorical { categories } => {
                categories[rng.random_range(0..categories.len())].clone()
            }
        }
    }

    /// Number of columns a value occupies after the transform
    pub fn transformed_size(&self) -> usize {
        match (&self.domain, self.transform) {
            (Domain::Categorical { categories }, Transform::Onehot) => categories.len(),
            _ => 1,
        }
    }

    /// Encode a value with this dimension's transform
    pub fn transform_value(&self, value: &Scalar) -> Option<Vec<f64>> {
        if !self.contains(value) {
            return None;
        }
        let encoded = match &self.domain {
            Domain::Integer { .. } | Domain::Real { .. } => {
                let v = value.as_f64()?;
                match self.transform {
                    Transform::Normalize => vec![self.normalize(v)],
                    _ => vec![v],
                }
            }
            Domain::Categorical { categories } => {
                let idx = categories.iter().position(|c| c == value)?;
                match self.transform {
                    Transform::Onehot => {
                        let mut row = vec![0.0; categories.len()];
                        row[idx] = 1.0;
                        row
                    }
                    _ => vec![idx as f64],
                }
            }
        };
        Some(encoded)
    }

    /// Decode a transformed value back into this dimension
    pub fn inverse_transform(&self, encoded: &[f64]) -> Option<Scalar> {
        if encoded.len() != self.transformed_size() || encoded.iter().any(|v| !v.is_finite()) {
            return None;
        }
        match &self.domain {
            Domain::Integer { low, high } => {
                let raw = match self.transform {
                    Transform::Normalize => self.denormalize(encoded[0]),
                    _ => encoded[0],
                };
                let v = (raw.round().clamp(*low as f64, *high as f64) as i64).clamp(*low, *high);
                Some(Scalar::Int(v))
            }
            Domain::Real { low, high, .. } => {
                let raw = match self.transform {
                    Transform::Normalize => self.denormalize(encoded[0]),
                    _ => encoded[0],
                };
                Some(Scalar::Real(raw.clamp(*low, *high)))
            }
            Domain::Categorical { categories } => {
                let idx = match self.transform {
                    Transform::Onehot => encoded
                        .iter()
                        .enumerate()
                        .max_by(|a, b| a.1.total_cmp(b.1))
                        .map(|(i, _)| i)?,
                    _ => encoded[0].round().clamp(0.0, (categories.len() - 1) as f64) as usize,
                };
                categories.get(idx).cloned()
            }
        }
    }

    fn normalize(&self, v: f64) -> f64 {
        let Some((low, high)) = self.scaled_bounds() else {
            return v;
        };
        if high == low {
            return 0.0;
        }
        let v = if self.prior() == Some(Prior::LogUniform) { v.ln() } else { v };
        (v - low) / (high - low)
    }

    fn denormalize(&self, t: f64) -> f64 {
        let Some((low, high)) = self.scaled_bounds() else {
            return t;
        };
        let v = low + t.clamp(0.0, 1.0) * (high - low);
        if self.prior() == Some(Prior::LogUniform) {
            v.exp()
        } else {
            v
        }
    }

    /// Bounds in the space where normalization is linear
    fn scaled_bounds(&self) -> Option<(f64, f64)> {
        let (low, high) = self.bounds()?;
        match self.prior() {
            Some(Prior::LogUniform) => Some((low.ln(), high.ln())),
            _ => Some((low, high)),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.domain)?;
        if self.transform != Transform::default_for(self.kind()) {
            write!(f, " ~ {}", self.transform)?;
        }
        Ok(())
    }
}
