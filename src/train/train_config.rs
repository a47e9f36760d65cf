/// Default spacing between progress reports.
pub const DEFAULT_REPORT_EVERY: usize = 10_000;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`       — number of sampled examples, one correction attempt each
/// - `report_every` — progress is reported at iteration 1 and at every
///                    multiple of this value; must be at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub report_every: usize,
}

impl TrainConfig {
    /// Creates a `TrainConfig` reporting at the default cadence.
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            report_every: DEFAULT_REPORT_EVERY,
        }
    }

    pub fn with_report_every(mut self, report_every: usize) -> Self {
        self.report_every = report_every;
        self
    }

    /// True when iteration `epoch` (1-based) should produce a progress report.
    pub fn reports_at(&self, epoch: usize) -> bool {
        epoch == 1 || (self.report_every > 0 && epoch % self.report_every == 0)
    }
}
