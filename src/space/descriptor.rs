//! Raw range descriptors and the normalizer that types them

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::dimension::{Dimension, Domain, Prior, Scalar, Transform};
use crate::error::{HyperspaceError, Result};

/// Untyped hyperparameter range as supplied by the caller
///
/// Either an already-typed [`Dimension`] or a list of scalars in one of the
/// shapes `(lower, upper)`, `(lower, upper, prior)`, or `[category, ...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Descriptor {
    Values(Vec<Scalar>),
    Typed(Dimension),
}

impl Descriptor {
    pub fn values<T: Into<Scalar>>(values: impl IntoIterator<Item = T>) -> Self {
        Descriptor::Values(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Typed(dim) => write!(f, "{dim}"),
            Descriptor::Values(values) => {
                let items: Vec<String> = values
                    .iter()
                    .map(|v| match v {
                        Scalar::Text(s) => format!("{s:?}"),
                        other => other.to_string(),
                    })
                    .collect();
                write!(f, "[{}]", items.join(", "))
            }
        }
    }
}

impl From<Dimension> for Descriptor {
    fn from(dim: Dimension) -> Self {
        Descriptor::Typed(dim)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for Descriptor {
    fn from(values: Vec<T>) -> Self {
        Descriptor::values(values)
    }
}

impl<A: Into<Scalar>, B: Into<Scalar>> From<(A, B)> for Descriptor {
    fn from((a, b): (A, B)) -> Self {
        Descriptor::Values(vec![a.into(), b.into()])
    }
}

impl<A: Into<Scalar>, B: Into<Scalar>, C: Into<Scalar>> From<(A, B, C)> for Descriptor {
    fn from((a, b, c): (A, B, C)) -> Self {
        Descriptor::Values(vec![a.into(), b.into(), c.into()])
    }
}

/// Turn a descriptor into a validated dimension.
///
/// Shapes are tried in a fixed order and the first match wins:
///
/// 1. A typed dimension is returned unchanged.
/// 2. Fewer than two values is rejected.
/// 3. Two values: any text or boolean makes it categorical; two integers make
///    an integer range; otherwise a real range.
/// 4. Three values: two numbers followed by `"uniform"` or `"log-uniform"`
///    make a real range with that prior; anything else is categorical.
/// 5. More than three values is categorical.
///
/// `transform` is attached to the produced dimension and must suit its kind.
pub fn normalize(descriptor: &Descriptor, transform: Option<Transform>) -> Result<Dimension> {
    let values = match descriptor {
        Descriptor::Typed(dim) => return Ok(dim.clone()),
        Descriptor::Values(values) => values,
    };

    let domain = infer_domain(values).ok_or_else(|| {
        HyperspaceError::invalid(descriptor.to_string(), "expected at least two elements")
    })?;
    let dim = Dimension::new(domain, transform)?;
    debug!(descriptor = %descriptor, kind = %dim.kind(), "normalized descriptor");
    Ok(dim)
}

fn infer_domain(values: &[Scalar]) -> Option<Domain> {
    let categorical = || Domain::Categorical { categories: values.to_vec() };

    let domain = match values {
        [] | [_] => return None,
        [a, b] => {
            if !a.is_numeric() || !b.is_numeric() {
                categorical()
            } else if let (Scalar::Int(low), Scalar::Int(high)) = (a, b) {
                Domain::Integer { low: *low, high: *high }
            } else {
                Domain::Real { low: a.as_f64()?, high: b.as_f64()?, prior: Prior::Uniform }
            }
        }
        [a, b, Scalar::Text(prior)] if a.is_numeric() && b.is_numeric() => {
            match prior.parse::<Prior>() {
                Ok(prior) => Domain::Real { low: a.as_f64()?, high: b.as_f64()?, prior },
                Err(_) => categorical(),
            }
        }
        _ => categorical(),
    };
    Some(domain)
}
