//! Hyperparameter space decomposition
//!
//! Splits every hyperparameter range into a low and a high half and folds
//! the halves into `2^N` disjoint sub-spaces, one per optimizer worker.
//!
//! # Example
//!
//! ```
//! use hyperfold::space::{build, Descriptor};
//!
//! let hyperparameters: Vec<Descriptor> = vec![
//!     (2, 10).into(),                      // max_depth
//!     (0.01, 1.0, "log-uniform").into(),   // learning_rate
//!     vec!["gini", "entropy"].into(),      // criterion
//! ];
//!
//! let hyperspace = build(&hyperparameters)?;
//! assert_eq!(hyperspace.len(), 8);
//!
//! // worker 11 of a larger pool wraps onto space 3
//! let space = hyperspace.for_rank(11);
//! assert_eq!(space.index(), 3);
//! # Ok::<(), hyperfold::HyperspaceError>(())
//! ```

mod descriptor;
mod dimension;
mod fold;
mod hyperspace;
mod split;


pub use descriptor::{normalize, Descriptor};
pub use dimension::{Dimension, Domain, Kind, Prior, Scalar, Transform};
pub use fold::{fold, uses_low, SubSpace, MAX_DIMENSIONS};
pub use hyperspace::{build, Hyperspace, HyperspaceBuilder, Space};
pub use split::{split, HalfPair};
