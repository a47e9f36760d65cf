use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::network::forward::forward;
use crate::network::weights::WeightVector;
use crate::progress::ProgressReporter;
use crate::train::example::Example;

/// Result of an accuracy run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    pub num_tests: usize,
    /// Samples whose prediction matched exactly.
    pub correct: usize,
    /// `100 * correct / num_tests`, always within `[0, 100]`.
    pub accuracy: f64,
    pub elapsed_ms: u64,
}

/// Measures exact-match accuracy on `num_tests` random examples.
///
/// Inputs are drawn uniformly from `[0, 2 * capacity]`, twice the training
/// range, so roughly three quarters of the samples exercise extrapolation.
/// The weights are only read.
pub fn evaluate<R, P>(
    weights: &WeightVector,
    num_tests: usize,
    rng: &mut R,
    mut reporter: P,
) -> Result<EvalReport, EvalError>
where
    R: Rng + ?Sized,
    P: ProgressReporter,
{
    if num_tests == 0 {
        return Err(EvalError::NoTests);
    }

    let t_start = Instant::now();
    let max_input = 2 * weights.capacity() as u64;
    reporter.evaluation_started(num_tests);

    let correct = (0..num_tests)
        .filter(|_| {
            let example = Example::sample(rng, max_input);
            forward(example.input1, example.input2, weights) == example.target
        })
        .count();

    let report = EvalReport {
        num_tests,
        correct,
        accuracy: (correct * 100) as f64 / num_tests as f64,
        elapsed_ms: t_start.elapsed().as_millis() as u64,
    };
    reporter.evaluation_finished(&report);
    Ok(report)
}
