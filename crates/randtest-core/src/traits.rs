//! Pluggable statistic traits
//!
//! A randomization test is parameterized by two functions: a measure of
//! central tendency (MCT) that summarizes one group, and a test statistic
//! that compares the two groups. Both are passed into the engine as values
//! and shared read-only between workers, hence the `Send + Sync` bounds.

use crate::Result;

/// Measure of central tendency
///
/// # API Convention
///
/// `estimate` receives a scratch copy of the group and may reorder it in
/// place (a trimmed mean sorts). Implementations must be pure with respect
/// to the values: the same multiset in any order yields the same estimate
/// up to floating point rounding.
///
/// Empty input must fail with [`crate::Error::InsufficientData`] instead
/// of returning NaN.
///
/// # Example
///
/// ```rust
/// use randtest_core::{CentralTendency, Error, Result};
///
/// struct Midrange;
///
/// impl CentralTendency for Midrange {
///     fn estimate(&self, data: &mut [f64]) -> Result<f64> {
///         if data.is_empty() {
///             return Err(Error::empty_input("midrange"));
///         }
///         let (lo, hi) = data
///             .iter()
///             .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));
///         Ok((lo + hi) / 2.0)
///     }
///
///     fn name(&self) -> &str {
///         "Midrange"
///     }
/// }
///
/// assert_eq!(Midrange.estimate(&mut [1.0, 9.0, 4.0]).unwrap(), 5.0);
/// ```
pub trait CentralTendency: Send + Sync {
    /// Summarize one group to a single value
    fn estimate(&self, data: &mut [f64]) -> Result<f64>;

    /// Human-readable name of the measure
    fn name(&self) -> &str {
        "Custom"
    }
}

/// Any `Fn(&[f64]) -> Result<f64>` can serve as a measure of central tendency
impl<F> CentralTendency for F
where
    F: Fn(&[f64]) -> Result<f64> + Send + Sync,
{
    fn estimate(&self, data: &mut [f64]) -> Result<f64> {
        self(data)
    }
}

/// Two-sample test statistic
///
/// The engine treats the returned value as opaque: no symmetry, sign
/// convention or monotonicity is assumed.
pub trait TestStatistic: Send + Sync {
    /// Compute the statistic for one split of the pooled data
    fn compute(
        &self,
        group_a: &mut [f64],
        group_b: &mut [f64],
        mct: &dyn CentralTendency,
    ) -> Result<f64>;

    /// Human-readable name of the statistic
    fn name(&self) -> &str {
        "Custom"
    }
}

impl<F> TestStatistic for F
where
    F: Fn(&mut [f64], &mut [f64], &dyn CentralTendency) -> Result<f64> + Send + Sync,
{
    fn compute(
        &self,
        group_a: &mut [f64],
        group_b: &mut [f64],
        mct: &dyn CentralTendency,
    ) -> Result<f64> {
        self(group_a, group_b, mct)
    }
}
