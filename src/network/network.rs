use rand::Rng;

use crate::error::EvalError;
use crate::eval::evaluator::{evaluate, EvalReport};
use crate::network::forward::forward;
use crate::network::weights::WeightVector;
use crate::progress::ProgressReporter;
use crate::train::epoch_stats::TrainSummary;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_step;

/// A unary subtraction network: the weight vector plus the three operations
/// a caller drives it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryNetwork {
    weights: WeightVector,
}

impl UnaryNetwork {
    /// Builds a network with `capacity + 1` weights, all at 1.
    pub fn new(capacity: usize) -> UnaryNetwork {
        UnaryNetwork {
            weights: WeightVector::new(capacity),
        }
    }

    pub fn from_weights(weights: WeightVector) -> UnaryNetwork {
        UnaryNetwork { weights }
    }

    pub fn capacity(&self) -> usize {
        self.weights.capacity()
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// Estimated `max(0, input1 - input2)`.
    pub fn forward(&self, input1: u64, input2: u64) -> u64 {
        forward(input1, input2, &self.weights)
    }

    /// One correction towards `target`; returns the signed error.
    pub fn train(&mut self, input1: u64, input2: u64, target: u64) -> i128 {
        train_step(&mut self.weights, input1, input2, target)
    }

    /// Runs the random-sampling training loop.
    pub fn train_model<R, P>(&mut self, config: &TrainConfig, rng: &mut R, reporter: P) -> TrainSummary
    where
        R: Rng + ?Sized,
        P: ProgressReporter,
    {
        train_loop(&mut self.weights, config, rng, reporter)
    }

    /// Exact-match accuracy over `num_tests` samples from twice the
    /// training range.
    pub fn test<R, P>(&self, num_tests: usize, rng: &mut R, reporter: P) -> Result<EvalReport, EvalError>
    where
        R: Rng + ?Sized,
        P: ProgressReporter,
    {
        evaluate(&self.weights, num_tests, rng, reporter)
    }
}
