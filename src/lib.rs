//! # Hyperfold: hyperparameter space decomposition
//!
//! Splits every dimension of a hyperparameter search space into a lower and
//! an upper half and folds the halves into all `2^N` combinations. Each
//! combination is a complete search space of its own, so `2^N` optimizer
//! workers can each search a separate region in parallel.
//!
//! # Pipeline
//!
//! - [`space::normalize`]: loose descriptors such as `(1, 10)`,
//!   `(0.01, 1.0, "log-uniform")` or `["relu", "gelu"]` become typed
//!   [`Dimension`]s
//! - [`space::split`]: each dimension becomes a low/high [`HalfPair`]
//! - [`space::fold`]: half-pairs expand into the `2^N` sub-spaces
//! - [`Hyperspace`]: lazy view over all sub-spaces, indexed by combination
//!   or worker rank
//!
//! # Example
//!
//! ```
//! use hyperfold::{build, Descriptor};
//!
//! let descriptors: Vec<Descriptor> = vec![(2, 10).into(), (0.01, 1.0, "log-uniform").into()];
//! let hyperspace = build(&descriptors)?;
//! assert_eq!(hyperspace.len(), 4);
//!
//! let space = hyperspace.for_rank(5);
//! assert_eq!(space.index(), 1);
//! # Ok::<(), hyperfold::HyperspaceError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod space;

pub use error::{HyperspaceError, Result};
pub use space::{
    build, fold, normalize, split, Descriptor, Dimension, Domain, HalfPair, Hyperspace,
    HyperspaceBuilder, Kind, Prior, Scalar, Space, SubSpace, Transform, MAX_DIMENSIONS,
};
