//! Half-splitting of dimensions

use serde::{Deserialize, Serialize};

use super::dimension::{Dimension, Domain};

/// A dimension split into its lower and upper half
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalfPair {
    pub low: Dimension,
    pub high: Dimension,
}

impl HalfPair {
    /// Both halves admit the same values (fixed hyperparameter)
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    pub fn into_parts(self) -> (Dimension, Dimension) {
        (self.low, self.high)
    }
}

/// Split a dimension into its lower and upper half.
///
/// Numeric halves meet at the midpoint `(lower + upper) / 2`, floored for
/// integers. Categories are cut by position: the low half keeps the first
/// `ceil(k / 2)` categories and the high half the rest, both in their
/// original order. A single category, or a zero-width range, yields two
/// identical halves. Kind, prior and transform carry over unchanged.
pub fn split(dim: &Dimension) -> HalfPair {
    let (low, high) = match dim.domain() {
        Domain::Integer { low, high } => {
            let mid = integer_midpoint(*low, *high);
            (Domain::Integer { low: *low, high: mid }, Domain::Integer { low: mid, high: *high })
        }
        Domain::Real { low, high, prior } => {
            let mid = real_midpoint(*low, *high);
            (
                Domain::Real { low: *low, high: mid, prior: *prior },
                Domain::Real { low: mid, high: *high, prior: *prior },
            )
        }
        Domain::Categorical { categories } if categories.len() < 2 => {
            (dim.domain().clone(), dim.domain().clone())
        }
        Domain::Categorical { categories } => {
            let (first, second) = categories.split_at(categories.len().div_ceil(2));
            (
                Domain::Categorical { categories: first.to_vec() },
                Domain::Categorical { categories: second.to_vec() },
            )
        }
    };
    HalfPair { low: dim.with_domain(low), high: dim.with_domain(high) }
}

fn integer_midpoint(low: i64, high: i64) -> i64 {
    // i128 keeps the sum from overflowing near i64::MAX
    (i128::from(low) + i128::from(high)).div_euclid(2) as i64
}

fn real_midpoint(low: f64, high: f64) -> f64 {
    let mid = (low + high) / 2.0;
    if mid.is_finite() {
        mid
    } else {
        low / 2.0 + high / 2.0
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::space::Scalar;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_real_halves_meet_and_cover(low in -1e6f64..1e6, width in 0.0f64..1e6) {
            let high = low + width;
            let dim = Dimension::real(low, high).unwrap();
            let pair = split(&dim);
            let (l_low, l_high) = pair.low.bounds().unwrap();
            let (h_low, h_high) = pair.high.bounds().unwrap();
            prop_assert_eq!(l_high, h_low);
            prop_assert_eq!(l_low, low);
            prop_assert_eq!(h_high, high);
            prop_assert!(l_low <= l_high && h_low <= h_high);
        }

        #[test]
        fn prop_integer_halves_meet_and_cover(low in -10_000i64..10_000, width in 0i64..10_000) {
            let high = low + width;
            let pair = split(&Dimension::integer(low, high).unwrap());
            match (pair.low.domain(), pair.high.domain()) {
                (Domain::Integer { low: a, high: b }, Domain::Integer { low: c, high: d }) => {
                    prop_assert_eq!(*a, low);
                    prop_assert_eq!(b, c);
                    prop_assert_eq!(*d, high);
                    prop_assert!(a <= b && c <= d);
                }
                _ => prop_assert!(false, "integer split changed kind"),
            }
        }

        #[test]
        fn prop_categorical_halves_partition(n in 1usize..20) {
            let dim = Dimension::categorical((0..n).map(|i| format!("c{i}"))).unwrap();
            let pair = split(&dim);
            let low = pair.low.categories().unwrap();
            let high = pair.high.categories().unwrap();
            prop_assert!(!low.is_empty() && !high.is_empty());
            if n > 1 {
                let joined: Vec<Scalar> = low.iter().chain(high).cloned().collect();
                prop_assert_eq!(joined.as_slice(), dim.categories().unwrap());
            }
        }
    }
}
