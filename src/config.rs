use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::train::train_config::{TrainConfig, DEFAULT_REPORT_EVERY};

/// Largest capacity a run accepts: 16M weights, 64 MiB of `u32`.
pub const MAX_CAPACITY: usize = 1 << 24;

/// Settings for one train / test / interactive run.
///
/// Saved and loaded as JSON. Missing fields fall back to the defaults, so a
/// file only needs to mention what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Largest input with a dedicated weight.
    pub capacity: usize,
    /// Training iterations.
    pub epochs: usize,
    /// Evaluation samples.
    pub num_tests: usize,
    /// Iterations between progress reports.
    pub report_every: usize,
    /// Fixed RNG seed; `None` seeds from system entropy.
    pub seed: Option<u64>,
    /// Whether to open the interactive prompt after testing.
    pub interactive: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            capacity: 100,
            epochs: 100_000,
            num_tests: 10_000,
            report_every: DEFAULT_REPORT_EVERY,
            seed: None,
            interactive: true,
        }
    }
}

impl RunConfig {
    /// Rejects settings that cannot drive a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Invalid("capacity must be at least 1".into()));
        }
        if self.capacity > MAX_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "capacity {} exceeds the maximum of {MAX_CAPACITY}",
                self.capacity
            )));
        }
        if self.num_tests == 0 {
            return Err(ConfigError::Invalid("num_tests must be at least 1".into()));
        }
        if self.report_every == 0 {
            return Err(ConfigError::Invalid("report_every must be at least 1".into()));
        }
        Ok(())
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.epochs).with_report_every(self.report_every)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a config from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<RunConfig, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
