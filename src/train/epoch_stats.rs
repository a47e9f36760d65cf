use serde::{Serialize, Deserialize};

/// Progress snapshot emitted by `train_loop`.
///
/// Sent at the first iteration and then every `report_every` iterations of
/// the loop. Receivers (the log reporter, a channel consumer) use it to
/// report how far training has come.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based iteration number.
    pub epoch: usize,
    /// Total iterations requested for this run.
    pub total_epochs: usize,
    /// Iterations so far whose example triggered a weight correction.
    pub corrections: usize,
}

/// Outcome of a complete `train_loop` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainSummary {
    pub epochs: usize,
    /// Iterations whose prediction was wrong and moved the weights.
    pub corrections: usize,
    /// Wall-clock duration of the whole run in milliseconds.
    pub elapsed_ms: u64,
}
