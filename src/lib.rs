pub mod error;
pub mod network;
pub mod train;
pub mod eval;
pub mod progress;
pub mod config;
pub mod session;

// Convenience re-exports
pub use error::{ConfigError, EvalError, InputError, WeightError};
pub use network::{forward, UnaryNetwork, WeightVector};
pub use train::{train_loop, train_step, EpochStats, Example, TrainConfig, TrainSummary};
pub use eval::{evaluate, EvalReport};
pub use progress::{LogReporter, NullReporter, ProgressReporter};
pub use config::RunConfig;
pub use session::run_session;
