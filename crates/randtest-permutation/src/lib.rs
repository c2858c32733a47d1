//! Two-sample randomization tests
//!
//! This crate decides whether two groups of real-valued observations differ
//! in a measure of central tendency (MCT) by comparing an observed test
//! statistic against its distribution over relabelings of the pooled data:
//!
//! - **Systematic**: every one of the `C(n_a + n_b, n_a)` labelings exactly
//!   once
//! - **Monte Carlo**: a fixed number of uniformly drawn labelings, with the
//!   observed labeling counted as one of them
//!
//! The labelings are split into disjoint ranges evaluated by independent
//! workers. Monte Carlo draw `d` always uses the same random stream, so a
//! seeded run gives the same result for any worker count.
//!
//! # Example
//!
//! ```rust
//! use randtest_permutation::{Alternative, RandTest};
//!
//! let result = RandTest::new(&[5.0, 6.0], &[8.0, 10.0])
//!     .systematic()
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(result.statistic(), -3.5);
//! assert_eq!(result.num_successes(), 2);
//! assert_eq!(result.num_permutations(), 6);
//! assert_eq!(result.alternative(), Alternative::TwoSided);
//! println!("{result}");
//! ```

pub mod aggregator;
pub mod api;
mod config;
mod evaluator;
pub mod generator;
mod randtest;
mod result;
mod types;

// Re-exports
pub use api::{
    mean_difference_test, run_test, trimmed_mean_difference_test, DEFAULT_PERMUTATIONS,
    SYSTEMATIC,
};
pub use config::RandTestConfig;
pub use evaluator::{compute_statistic, Evaluator, SplitWorkspace};
pub use generator::LabelingGenerator;
pub use randtest::RandTest;
pub use result::{format_general, RandTestResult};
pub use types::{Alternative, Method};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        run_test, Alternative, Method, RandTest, RandTestConfig, RandTestResult, SYSTEMATIC,
    };
    pub use randtest_core::prelude::*;
}
