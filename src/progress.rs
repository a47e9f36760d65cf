use std::sync::mpsc;

use log::{debug, info};

use crate::eval::evaluator::EvalReport;
use crate::train::epoch_stats::{EpochStats, TrainSummary};

/// Receives progress from training and evaluation runs.
///
/// Every method has an empty default so implementors only pick the events
/// they care about. Calls happen inline on the thread running the loop.
pub trait ProgressReporter {
    fn training_started(&mut self, _total_epochs: usize) {}

    /// Iteration 1 and every `report_every` iterations.
    fn epoch(&mut self, _stats: &EpochStats) {}

    fn training_finished(&mut self, _summary: &TrainSummary) {}

    fn evaluation_started(&mut self, _num_tests: usize) {}

    fn evaluation_finished(&mut self, _report: &EvalReport) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {}

/// Reports through the `log` facade at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ProgressReporter for LogReporter {
    fn training_started(&mut self, total_epochs: usize) {
        info!("Starting training ({total_epochs} epochs)...");
    }

    fn epoch(&mut self, stats: &EpochStats) {
        info!("Completed {} epochs", stats.epoch);
    }

    fn training_finished(&mut self, summary: &TrainSummary) {
        info!(
            "Training completed in {:.2} seconds ({} corrections).",
            summary.elapsed_ms as f64 / 1000.0,
            summary.corrections
        );
    }

    fn evaluation_started(&mut self, num_tests: usize) {
        info!("Running {num_tests} automated tests...");
    }

    fn evaluation_finished(&mut self, report: &EvalReport) {
        info!("Accuracy: {:.2}%", report.accuracy);
        info!(
            "Testing completed in {:.2} seconds.",
            report.elapsed_ms as f64 / 1000.0
        );
    }
}

/// Forwards epoch snapshots to a channel.
///
/// A dropped receiver does not stop training; progress is observational.
impl ProgressReporter for mpsc::Sender<EpochStats> {
    fn epoch(&mut self, stats: &EpochStats) {
        if self.send(*stats).is_err() {
            debug!("progress receiver dropped at epoch {}", stats.epoch);
        }
    }
}

impl<P: ProgressReporter + ?Sized> ProgressReporter for &mut P {
    fn training_started(&mut self, total_epochs: usize) {
        (**self).training_started(total_epochs);
    }

    fn epoch(&mut self, stats: &EpochStats) {
        (**self).epoch(stats);
    }

    fn training_finished(&mut self, summary: &TrainSummary) {
        (**self).training_finished(summary);
    }

    fn evaluation_started(&mut self, num_tests: usize) {
        (**self).evaluation_started(num_tests);
    }

    fn evaluation_finished(&mut self, report: &EvalReport) {
        (**self).evaluation_finished(report);
    }
}
