//! Error types for randomization testing
//!
//! Provides a unified error type for all randtest crates.

use thiserror::Error;

/// Core error type for randomization test operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A central tendency or test statistic function failed
    #[error("Statistic computation error: {0}")]
    StatisticComputation(String),

    /// A worker task aborted while evaluating its share of permutations
    #[error("Worker {worker} failed: {message}")]
    WorkerFailure { worker: usize, message: String },

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a permutation count that selects no valid method
    pub fn invalid_permutations(count: i64) -> Self {
        Self::InvalidParameter(format!(
            "Number of permutations must be positive or -1 (systematic), got {count}"
        ))
    }

    /// True for the error kinds raised before any computation starts
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_) | Self::InvalidInput(_) | Self::InsufficientData { .. }
        )
    }
}
