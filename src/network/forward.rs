use crate::network::weights::WeightVector;

/// Estimates `max(0, input1 - input2)` from the weights.
///
/// Each input is read as a unary count: the first `min(input, capacity)`
/// weights are summed, and every unit beyond `capacity` contributes the
/// extrapolation weight once. The minuend's total minus the subtrahend's
/// total, floored at zero, is the output.
///
/// Pure; the weights are only borrowed. Results too large for `u64`
/// saturate at `u64::MAX`.
pub fn forward(input1: u64, input2: u64, weights: &WeightVector) -> u64 {
    let hidden = unary_count(input1, weights) - unary_count(input2, weights);
    if hidden <= 0 {
        0
    } else {
        u64::try_from(hidden).unwrap_or(u64::MAX)
    }
}

/// Weighted unary value of one input: in-range prefix sum plus the
/// extrapolated excess.
fn unary_count(input: u64, weights: &WeightVector) -> i128 {
    let capacity = weights.capacity();
    let in_range = usize::try_from(input).map_or(capacity, |i| i.min(capacity));
    let mut count = weights.prefix_sum(in_range);

    let excess = i128::from(input) - capacity as i128;
    if excess > 0 {
        count += excess * i128::from(weights.last());
    }
    count
}
