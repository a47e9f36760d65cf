use log::debug;

use crate::network::forward::forward;
use crate::network::weights::WeightVector;

/// Applies one error-driven correction for a single example.
///
/// Every position below `min(max(input1, input2), capacity)` moves by one
/// step: towards the error for positions the minuend covers, against it for
/// positions the subtrahend covers. When both inputs cover a position the two
/// steps cancel, except where the floor at 1 absorbed the first one.
///
/// The floor is applied after each individual step; the ceiling only once the
/// whole range has been visited. The extrapolation weight is never touched.
///
/// Returns the signed error `target - prediction`; zero means the weights
/// were left as they were.
pub fn train_step(
    weights: &mut WeightVector,
    input1: u64,
    input2: u64,
    target: u64,
) -> i128 {
    let predicted = forward(input1, input2, weights);
    let error = i128::from(target) - i128::from(predicted);
    if error == 0 {
        return 0;
    }

    let sign: i64 = if error > 0 { 1 } else { -1 };
    let reach = input1.max(input2);
    let bound = usize::try_from(reach).map_or(weights.capacity(), |r| r.min(weights.capacity()));

    for i in 0..bound {
        let position = i as u64;
        if position < input1 {
            weights.nudge_floored(i, sign);
        }
        if position < input2 {
            weights.nudge_floored(i, -sign);
        }
    }
    weights.cap_prefix(bound);

    debug!(
        "corrected ({input1}, {input2}) -> {target}: predicted {predicted}, error {error}, {bound} positions"
    );
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_prediction_is_a_no_op() {
        let mut w = WeightVector::new(5);
        assert_eq!(train_step(&mut w, 3, 1, 2), 0);
        assert_eq!(w, WeightVector::new(5));
    }

    #[test]
    fn positive_error_raises_minuend_only_positions() {
        let mut w = WeightVector::new(5);
        assert_eq!(train_step(&mut w, 3, 1, 5), 3);
        assert_eq!(w.as_slice(), &[1, 2, 2, 1, 1, 1]);
    }

    #[test]
    fn negative_error_floors_at_one_then_raises_shared_positions() {
        let mut w = WeightVector::new(5);
        // predicted 2, target 0: minuend positions fall (floored), the
        // shared position 0 is then raised by the subtrahend step
        assert_eq!(train_step(&mut w, 3, 1, 0), -2);
        assert_eq!(w.as_slice(), &[2, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn equal_inputs_cancel_above_the_floor() {
        let mut w = WeightVector::from_weights(vec![5, 5, 5, 1]).unwrap();
        // forward(2, 2) is 0; a target of 1 forces a correction
        assert_eq!(train_step(&mut w, 2, 2, 1), 1);
        assert_eq!(w.as_slice(), &[5, 5, 5, 1]);
    }

    #[test]
    fn ceiling_is_applied_after_the_loop() {
        let mut w = WeightVector::from_weights(vec![100, 100, 100, 1]).unwrap();
        // position 0 goes 100 -> 101 -> 100 before the cap runs; capping
        // inside the loop would have left it at 99
        assert_eq!(train_step(&mut w, 2, 1, 150), 50);
        assert_eq!(w.as_slice(), &[100, 100, 100, 1]);
    }

    #[test]
    fn subtrahend_positions_fall_on_positive_error() {
        let mut w = WeightVector::from_weights(vec![100, 100, 100, 1]).unwrap();
        train_step(&mut w, 0, 2, 50);
        assert_eq!(w.as_slice(), &[99, 99, 100, 1]);
    }

    #[test]
    fn never_touches_the_extrapolation_weight() {
        let mut w = WeightVector::new(3);
        train_step(&mut w, 9, 0, 50);
        assert_eq!(w.last(), 1);
        assert_eq!(w.as_slice(), &[2, 2, 2, 1]);
    }
}
