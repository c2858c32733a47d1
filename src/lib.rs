//! Two-sample randomization tests
//!
//! Facade over the workspace crates:
//!
//! - [`randtest_core`]: error type, statistic traits, built-in measures of central
//!   tendency and execution engines
//! - [`randtest_permutation`]: systematic and Monte Carlo permutation engine
//!
//! # Example
//!
//! ```rust
//! use randtest::prelude::*;
//!
//! let result = RandTest::new(&[5.0, 6.0], &[8.0, 10.0])
//!     .with_mct(TrimmedMean::new(0.0).unwrap())
//!     .systematic()
//!     .run()
//!     .unwrap();
//! assert_eq!(result.num_successes(), 2);
//! ```

pub use randtest_core;
pub use randtest_permutation;

pub use randtest_core::{
    ArithmeticMean, CentralTendency, Error, MctDifference, Median, Result, TestStatistic,
    TrimmedMean,
};
pub use randtest_permutation::{
    run_test, Alternative, Method, RandTest, RandTestConfig, RandTestResult,
    DEFAULT_PERMUTATIONS, SYSTEMATIC,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use randtest_permutation::prelude::*;
}
