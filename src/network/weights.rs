use serde::Serialize;

use crate::error::WeightError;

/// Smallest value any weight may take.
pub const MIN_WEIGHT: u32 = 1;
/// Largest value any weight may take.
pub const MAX_WEIGHT: u32 = 100;

/// The learned state: one weight per unary position plus a trailing
/// extrapolation weight.
///
/// For a `capacity` of `C` the vector holds `C + 1` weights. Indices
/// `0..C` are summed for inputs up to `C`; index `C` is the constant unit
/// rate applied to every count beyond `C`.
///
/// Every element stays within `[MIN_WEIGHT, MAX_WEIGHT]`. Only the trainer
/// mutates a `WeightVector`, through crate-private methods that clamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightVector {
    weights: Vec<u32>,
}

impl WeightVector {
    /// Creates `capacity + 1` weights, all set to `MIN_WEIGHT`.
    ///
    /// With every weight at 1 the forward pass computes `max(0, a - b)`
    /// exactly, so training starts from a correct baseline.
    ///
    /// # Panics
    /// Panics if `capacity + 1` weights cannot be allocated; run configs cap
    /// the capacity at `config::MAX_CAPACITY`.
    pub fn new(capacity: usize) -> WeightVector {
        WeightVector {
            weights: vec![MIN_WEIGHT; capacity + 1],
        }
    }

    /// Builds a vector from explicit values. The capacity is `len - 1`.
    pub fn from_weights(weights: Vec<u32>) -> Result<WeightVector, WeightError> {
        if weights.is_empty() {
            return Err(WeightError::Empty);
        }
        if let Some((index, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !(MIN_WEIGHT..=MAX_WEIGHT).contains(*w))
        {
            return Err(WeightError::OutOfRange {
                index,
                value,
                min: MIN_WEIGHT,
                max: MAX_WEIGHT,
            });
        }
        Ok(WeightVector { weights })
    }

    /// Largest input magnitude addressed by a dedicated weight.
    pub fn capacity(&self) -> usize {
        self.weights.len() - 1
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false: a vector holds at least the extrapolation weight.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.weights
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        self.weights.get(index).copied()
    }

    /// The extrapolation weight at index `capacity`.
    pub fn last(&self) -> u32 {
        self.weights[self.capacity()]
    }

    /// Sum of the first `count` weights. `count` must not exceed `capacity`.
    pub(crate) fn prefix_sum(&self, count: usize) -> i128 {
        self.weights[..count].iter().map(|&w| i128::from(w)).sum()
    }

    /// Adds `delta` to one weight and floors the result at `MIN_WEIGHT`.
    ///
    /// The ceiling is not applied here; see `cap_prefix`.
    pub(crate) fn nudge_floored(&mut self, index: usize, delta: i64) {
        let nudged = (i64::from(self.weights[index]) + delta).max(i64::from(MIN_WEIGHT));
        // At most one step above MAX_WEIGHT before `cap_prefix` runs.
        self.weights[index] = nudged as u32;
    }

    /// Caps the first `count` weights at `MAX_WEIGHT`.
    pub(crate) fn cap_prefix(&mut self, count: usize) {
        for w in &mut self.weights[..count] {
            *w = (*w).min(MAX_WEIGHT);
        }
    }
}
