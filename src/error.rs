//! Error types for unary-sub.
//!
//! The core engine has very few failure modes: weight vectors built from
//! explicit values can be out of bounds, and an evaluation needs at least one
//! sample. Everything else belongs to the outer layers (config files and
//! interactive input).

use thiserror::Error;

/// Rejected explicit weight values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightError {
    /// A weight vector needs at least the extrapolation weight.
    #[error("weight vector must hold at least one weight")]
    Empty,

    /// A value lies outside the `[1, 100]` band.
    #[error("weight {value} at index {index} is outside [{min}, {max}]")]
    OutOfRange {
        index: usize,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// Evaluation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Accuracy over zero samples is undefined.
    #[error("number of tests must be positive")]
    NoTests,
}

/// Run configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value that parses but cannot drive a run.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Malformed interactive input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),

    #[error("{0} is negative")]
    Negative(i128),
}
