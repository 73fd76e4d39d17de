//! Combinatorial folding of half-pairs into sub-spaces
//!
//! With `N` dimensions there are `2^N` ways to pick a half per dimension.
//! Combination `combo` takes `lows[i]` when bit `i` of `combo` is set and
//! `highs[i]` otherwise, so a worker can rebuild its sub-space from its index
//! and the two half sequences alone.

use tracing::debug;

use super::dimension::Dimension;
use crate::error::{HyperspaceError, Result};

/// One pick of low or high half per dimension, in hyperparameter order
pub type SubSpace = Vec<Dimension>;

/// Largest dimension count whose `2^N` combinations fit a `usize` index
pub const MAX_DIMENSIONS: usize = usize::BITS as usize - 1;

/// Whether combination `combo` takes the low half at position `index`
pub fn uses_low(combo: usize, index: usize) -> bool {
    index < usize::BITS as usize && combo & (1usize << index) != 0
}

/// Enumerate all `2^N` sub-spaces, ordered by combination index.
///
/// Fails with [`HyperspaceError::LengthMismatch`] when the sequences differ
/// in length. `N = 0` gives a single empty sub-space.
pub fn fold(lows: &[Dimension], highs: &[Dimension]) -> Result<Vec<SubSpace>> {
    check_halves(lows, highs)?;
    let count = 1usize << lows.len();
    debug!(n_dims = lows.len(), count, "folding half-pairs");
    Ok((0..count).map(|combo| combination(lows, highs, combo)).collect())
}

pub(crate) fn check_halves(lows: &[Dimension], highs: &[Dimension]) -> Result<()> {
    if lows.len() != highs.len() {
        return Err(HyperspaceError::LengthMismatch { lows: lows.len(), highs: highs.len() });
    }
    if lows.len() > MAX_DIMENSIONS {
        return Err(HyperspaceError::TooManyDimensions { count: lows.len(), max: MAX_DIMENSIONS });
    }
    Ok(())
}

/// Sub-space at `combo`; callers guarantee equal lengths
pub(crate) fn combination(lows: &[Dimension], highs: &[Dimension], combo: usize) -> SubSpace {
    lows.iter()
        .zip(highs)
        .enumerate()
        .map(|(index, (low, high))| {
            if uses_low(combo, index) {
                low.clone()
            } else {
                high.clone()
            }
        })
        .collect()
}
