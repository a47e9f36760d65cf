use std::time::Instant;

use rand::Rng;

use crate::network::weights::WeightVector;
use crate::progress::ProgressReporter;
use crate::train::epoch_stats::{EpochStats, TrainSummary};
use crate::train::example::Example;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_step;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `weights` on `config.epochs` randomly sampled examples.
///
/// # Arguments
/// - `weights`  — mutable reference to the weight vector; modified in place
/// - `config`   — iteration count and report cadence
/// - `rng`      — source for the example inputs
/// - `reporter` — receives start, periodic and completion events
///
/// Both inputs of every example are drawn uniformly from `[0, capacity]`,
/// so training never visits the extrapolation region. Iterations run in
/// order; each one sees the weights left by the previous.
pub fn train_loop<R, P>(
    weights: &mut WeightVector,
    config: &TrainConfig,
    rng: &mut R,
    mut reporter: P,
) -> TrainSummary
where
    R: Rng + ?Sized,
    P: ProgressReporter,
{
    let t_start = Instant::now();
    let max_input = weights.capacity() as u64;
    let mut corrections = 0;

    reporter.training_started(config.epochs);

    for epoch in 1..=config.epochs {
        let example = Example::sample(rng, max_input);
        if train_step(weights, example.input1, example.input2, example.target) != 0 {
            corrections += 1;
        }

        if config.reports_at(epoch) {
            reporter.epoch(&EpochStats {
                epoch,
                total_epochs: config.epochs,
                corrections,
            });
        }
    }

    let summary = TrainSummary {
        epochs: config.epochs,
        corrections,
        elapsed_ms: t_start.elapsed().as_millis() as u64,
    };
    reporter.training_finished(&summary);
    summary
}
