//! Function-style entry points
//!
//! Thin wrappers over [`RandTest`] for callers that prefer passing every
//! setting at once.

use crate::config::RandTestConfig;
use crate::randtest::RandTest;
use crate::result::RandTestResult;
use crate::types::{Alternative, Method};
use randtest_core::{CentralTendency, Result, TestStatistic, TrimmedMean};

/// Number of Monte Carlo permutations used when none is given
pub const DEFAULT_PERMUTATIONS: i64 = 10_000;

/// Permutation count that selects systematic enumeration
pub const SYSTEMATIC: i64 = Method::SYSTEMATIC_SENTINEL;

/// Run a two-sample randomization test
///
/// `num_permutations` is `-1` for a systematic test or a positive Monte
/// Carlo permutation count. `seed` only affects Monte Carlo tests.
///
/// # Example
///
/// ```rust
/// use randtest_core::{ArithmeticMean, MctDifference};
/// use randtest_permutation::{run_test, Alternative, SYSTEMATIC};
///
/// let result = run_test(
///     &[5.0, 6.0],
///     &[8.0, 10.0],
///     ArithmeticMean,
///     MctDifference,
///     SYSTEMATIC,
///     Alternative::TwoSided,
///     1,
///     None,
/// )
/// .unwrap();
/// assert_eq!(result.num_successes(), 2);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn run_test<M, S>(
    sample_a: &[f64],
    sample_b: &[f64],
    mct: M,
    tstat: S,
    num_permutations: i64,
    alternative: Alternative,
    num_workers: usize,
    seed: Option<u64>,
) -> Result<RandTestResult>
where
    M: CentralTendency,
    S: TestStatistic,
{
    let mut test = RandTest::new(sample_a, sample_b)
        .with_mct(mct)
        .with_statistic(tstat)
        .with_permutations(num_permutations)
        .with_alternative(alternative)
        .with_workers(num_workers);
    if let Some(seed) = seed {
        test = test.with_seed(seed);
    }
    test.run()
}

/// Difference of arithmetic means under `config`
pub fn mean_difference_test(
    sample_a: &[f64],
    sample_b: &[f64],
    config: RandTestConfig,
) -> Result<RandTestResult> {
    RandTest::new(sample_a, sample_b).with_config(config).run()
}

/// Difference of trimmed means under `config`
///
/// `trim_proportion` is the share cut from each tail, in `[0, 0.5)`.
pub fn trimmed_mean_difference_test(
    sample_a: &[f64],
    sample_b: &[f64],
    trim_proportion: f64,
    config: RandTestConfig,
) -> Result<RandTestResult> {
    let mct = TrimmedMean::new(trim_proportion)?;
    RandTest::new(sample_a, sample_b)
        .with_mct(mct)
        .with_config(config)
        .run()
}
