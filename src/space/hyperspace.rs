//! Finalized search spaces and the build pipeline
//!
//! descriptors → dimensions → half-pairs → folded combinations → spaces

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use super::descriptor::{normalize, Descriptor};
use super::dimension::{Dimension, Scalar, Transform};
use super::fold::{check_halves, combination, fold, uses_low, SubSpace};
use super::split::{split, HalfPair};
use crate::error::Result;

/// Search space handed to one optimizer worker
///
/// Dimensions are positional: entry `i` belongs to the `i`-th hyperparameter
/// of the original list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    index: usize,
    dimensions: Vec<Dimension>,
}

impl Space {
    pub fn new(index: usize, dimensions: SubSpace) -> Self {
        Self { index, dimensions }
    }

    /// Combination index that produced this space
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn n_dims(&self) -> usize {
        self.dimensions.len()
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn into_dimensions(self) -> SubSpace {
        self.dimensions
    }

    /// Whether position `i` holds the low half
    pub fn uses_low(&self, i: usize) -> bool {
        i < self.n_dims() && uses_low(self.index, i)
    }

    /// Numeric `(lower, upper)` per position, `None` for categorical
    pub fn bounds(&self) -> Vec<Option<(f64, f64)>> {
        self.dimensions.iter().map(Dimension::bounds).collect()
    }

    /// Check that a point has one in-domain value per dimension
    pub fn contains(&self, point: &[Scalar]) -> bool {
        point.len() == self.n_dims()
            && self.dimensions.iter().zip(point).all(|(dim, value)| dim.contains(value))
    }

    /// Sample one point, positional
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<Scalar> {
        self.dimensions.iter().map(|dim| dim.sample(rng)).collect()
    }

    pub fn sample_n<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<Vec<Scalar>> {
        (0..n).map(|_| self.sample(rng)).collect()
    }

    /// Concatenate each dimension's transformed encoding of `point`
    pub fn transform_point(&self, point: &[Scalar]) -> Option<Vec<f64>> {
        if point.len() != self.n_dims() {
            return None;
        }
        let mut encoded = Vec::new();
        for (dim, value) in self.dimensions.iter().zip(point) {
            encoded.extend(dim.transform_value(value)?);
        }
        Some(encoded)
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims: Vec<String> = self.dimensions.iter().map(ToString::to_string).collect();
        write!(f, "#{} [{}]", self.index, dims.join(", "))
    }
}

/// All `2^N` spaces of a folded hyperparameter list
///
/// Only the low and high halves are stored; each [`Space`] is produced on
/// demand from its index, so the full set never has to be materialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hyperspace {
    lows: Vec<Dimension>,
    highs: Vec<Dimension>,
}

impl Hyperspace {
    pub fn from_halves(lows: Vec<Dimension>, highs: Vec<Dimension>) -> Result<Self> {
        check_halves(&lows, &highs)?;
        Ok(Self { lows, highs })
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = HalfPair>) -> Result<Self> {
        let (lows, highs) = pairs.into_iter().map(HalfPair::into_parts).unzip();
        Self::from_halves(lows, highs)
    }

    /// Number of hyperparameters
    pub fn n_dims(&self) -> usize {
        self.lows.len()
    }

    /// Number of spaces, `2^N`
    pub fn len(&self) -> usize {
        1usize << self.n_dims()
    }

    /// Always false: an empty hyperparameter list still folds to one space
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn lows(&self) -> &[Dimension] {
        &self.lows
    }

    pub fn highs(&self) -> &[Dimension] {
        &self.highs
    }

    /// Half-pair for hyperparameter `i`
    pub fn pair(&self, i: usize) -> Option<HalfPair> {
        Some(HalfPair { low: self.lows.get(i)?.clone(), high: self.highs.get(i)?.clone() })
    }

    pub fn get(&self, index: usize) -> Option<Space> {
        (index < self.len()).then(|| Space::new(index, combination(&self.lows, &self.highs, index)))
    }

    /// Space for worker `rank`, wrapping at `2^N`
    pub fn for_rank(&self, rank: usize) -> Space {
        let index = rank % self.len();
        Space::new(index, combination(&self.lows, &self.highs, index))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Space> + '_ {
        (0..self.len()).map(|index| Space::new(index, combination(&self.lows, &self.highs, index)))
    }

    /// Materialize every space at once
    pub fn to_spaces(&self) -> Result<Vec<Space>> {
        let spaces = fold(&self.lows, &self.highs)?;
        Ok(spaces.into_iter().enumerate().map(|(index, dims)| Space::new(index, dims)).collect())
    }
}

/// Pipeline from raw descriptors to a [`Hyperspace`]
#[derive(Debug, Clone, Default)]
pub struct HyperspaceBuilder {
    transform: Option<Transform>,
}

impl HyperspaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform attached to every normalized dimension
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn build(&self, descriptors: &[Descriptor]) -> Result<Hyperspace> {
        self.build_entries(descriptors.iter().map(|d| (d, None)))
    }

    /// Build from descriptors with optional per-entry transforms.
    ///
    /// An entry's transform takes precedence over the builder's. The first
    /// invalid descriptor aborts the build and is reported with its position.
    pub fn build_entries<'a>(
        &self,
        entries: impl IntoIterator<Item = (&'a Descriptor, Option<Transform>)>,
    ) -> Result<Hyperspace> {
        let mut lows = Vec::new();
        let mut highs = Vec::new();
        for (position, (descriptor, transform)) in entries.into_iter().enumerate() {
            let dim = normalize(descriptor, transform.or(self.transform))
                .map_err(|e| e.at(position))?;
            let pair = split(&dim);
            debug!(position, low = %pair.low, high = %pair.high, "split dimension");
            lows.push(pair.low);
            highs.push(pair.high);
        }
        let hyperspace = Hyperspace::from_halves(lows, highs)?;
        info!(n_dims = hyperspace.n_dims(), spaces = hyperspace.len(), "built hyperspace");
        Ok(hyperspace)
    }
}

/// Build a hyperspace with default transforms
pub fn build(descriptors: &[Descriptor]) -> Result<Hyperspace> {
    HyperspaceBuilder::new().build(descriptors)
}
