//! Unified error handling for PathBench.
//!
//! Core errors (invalid nodes, negative weights, negative cycles, empty
//! samples) are precondition violations: under the default configuration
//! they never occur, and when they do they abort the current sweep instead
//! of being swallowed. External errors (io, toml, logger) convert into
//! string-carrying variants to keep module coupling low.

use thiserror::Error;

/// Unified benchmark error type
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("invalid node id {node}: must be in [0, {bound})")]
    InvalidNode { node: usize, bound: usize },

    #[error("negative edge weight {weight} on edge ({u}, {v})")]
    NegativeWeight { u: usize, v: usize, weight: f64 },

    #[error("negative cycle reachable from node {start}")]
    NegativeCycle { start: usize },

    #[error("cannot summarize an empty sample sequence")]
    EmptyInput,

    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Unified result type
pub type BenchResult<T> = Result<T, BenchError>;

impl From<toml::de::Error> for BenchError {
    fn from(err: toml::de::Error) -> Self {
        BenchError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for BenchError {
    fn from(err: toml::ser::Error) -> Self {
        BenchError::Config(err.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for BenchError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        BenchError::Logging(err.to_string())
    }
}
