//! Core traits and types for randomization testing
//!
//! This crate provides the building blocks the permutation engine is
//! parameterized over:
//!
//! 1. **Statistic traits** - [`CentralTendency`] and [`TestStatistic`], the
//!    two pluggable functions of a randomization test
//! 2. **Built-in measures** - arithmetic mean, trimmed mean, median and the
//!    difference-of-MCTs statistic
//! 3. **Execution engines** - sequential and Rayon-backed fan-out/fan-in
//!
//! # Example
//!
//! ```rust
//! use randtest_core::{ArithmeticMean, MctDifference, TestStatistic};
//!
//! let mut a = vec![5.0, 6.0];
//! let mut b = vec![8.0, 10.0];
//! let t = MctDifference.compute(&mut a, &mut b, &ArithmeticMean).unwrap();
//! assert_eq!(t, -3.5);
//! ```

pub mod error;
pub mod execution;
pub mod math;
pub mod mct;
pub mod statistic;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{
    available_workers, clamp_workers, ExecutionEngine, ExecutionStrategy, SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use execution::ParallelEngine;

pub use math::binomial;
pub use mct::{ArithmeticMean, Median, TrimmedMean};
pub use statistic::MctDifference;
pub use traits::{CentralTendency, TestStatistic};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ArithmeticMean, CentralTendency, Error, ExecutionEngine, MctDifference, Median, Result,
        SequentialEngine, TestStatistic, TrimmedMean,
    };

    #[cfg(feature = "parallel")]
    pub use crate::ParallelEngine;
}
