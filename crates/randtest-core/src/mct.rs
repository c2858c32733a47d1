//! Built-in measures of central tendency

use crate::{CentralTendency, Error, Result};

/// Arithmetic mean, the default measure
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArithmeticMean;

impl CentralTendency for ArithmeticMean {
    fn estimate(&self, data: &mut [f64]) -> Result<f64> {
        mean(data)
    }

    fn name(&self) -> &str {
        "Arithmetic Mean"
    }
}

/// Symmetrically trimmed mean
///
/// Sorts the group, drops `floor(n * trim_proportion)` values from each end
/// and averages what remains. A proportion of `0.0` is the arithmetic mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimmedMean {
    trim_proportion: f64,
}

impl TrimmedMean {
    /// Create with specified trim proportion (per tail)
    pub fn new(trim_proportion: f64) -> Result<Self> {
        if !(0.0..0.5).contains(&trim_proportion) {
            return Err(Error::InvalidParameter(format!(
                "Trim proportion must be in [0, 0.5), got {trim_proportion}"
            )));
        }
        Ok(Self { trim_proportion })
    }

    /// Create from a whole percentage in `0..50`
    pub fn from_percent(percent: u8) -> Result<Self> {
        Self::new(f64::from(percent) / 100.0)
    }

    /// Get the trim proportion
    pub fn trim_proportion(&self) -> f64 {
        self.trim_proportion
    }

    /// Number of values cut from each tail for a group of size `n`
    pub fn cut_count(&self, n: usize) -> usize {
        (n as f64 * self.trim_proportion).floor() as usize
    }
}

impl Default for TrimmedMean {
    /// 20% trimming on each tail
    fn default() -> Self {
        Self {
            trim_proportion: 0.2,
        }
    }
}

impl CentralTendency for TrimmedMean {
    fn estimate(&self, data: &mut [f64]) -> Result<f64> {
        if data.is_empty() {
            return Err(Error::empty_input("trimmed mean"));
        }
        data.sort_unstable_by(f64::total_cmp);
        let cut = self.cut_count(data.len());
        mean(&data[cut..data.len() - cut])
    }

    fn name(&self) -> &str {
        "Trimmed Mean"
    }
}

/// Sample median (average of the two middle values for even sizes)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Median;

impl CentralTendency for Median {
    fn estimate(&self, data: &mut [f64]) -> Result<f64> {
        if data.is_empty() {
            return Err(Error::empty_input("median"));
        }
        data.sort_unstable_by(f64::total_cmp);
        let mid = data.len() / 2;
        if data.len() % 2 == 0 {
            Ok((data[mid - 1] + data[mid]) / 2.0)
        } else {
            Ok(data[mid])
        }
    }

    fn name(&self) -> &str {
        "Median"
    }
}

fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input("arithmetic mean"));
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arithmetic_mean() {
        assert_eq!(ArithmeticMean.estimate(&mut [5.0, 6.0]).unwrap(), 5.5);
        assert_eq!(ArithmeticMean.estimate(&mut [8.0, 10.0]).unwrap(), 9.0);
        assert_eq!(ArithmeticMean.estimate(&mut [42.0]).unwrap(), 42.0);
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(
            ArithmeticMean.estimate(&mut []),
            Err(Error::InsufficientData { expected: 1, actual: 0 })
        ));
        assert!(TrimmedMean::default().estimate(&mut []).is_err());
        assert!(Median.estimate(&mut []).is_err());
    }

    #[test]
    fn test_trimmed_mean_cuts_tails() {
        // 10 values, 20% => 2 from each side
        let mut data = vec![100.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, -50.0];
        let tm = TrimmedMean::new(0.2).unwrap();
        assert_eq!(tm.cut_count(data.len()), 2);
        assert_relative_eq!(tm.estimate(&mut data).unwrap(), 4.5);
    }

    #[test]
    fn test_trimmed_mean_small_groups_keep_everything() {
        // floor(4 * 0.2) == 0
        let tm = TrimmedMean::default();
        assert_relative_eq!(tm.estimate(&mut [1.0, 2.0, 3.0, 10.0]).unwrap(), 4.0);
        assert_relative_eq!(tm.estimate(&mut [7.0]).unwrap(), 7.0);
    }

    #[test]
    fn test_trimmed_mean_zero_is_mean() {
        let tm = TrimmedMean::from_percent(0).unwrap();
        let mut data = vec![1.0, 2.0, 9.0];
        assert_relative_eq!(tm.estimate(&mut data).unwrap(), 4.0);
    }

    #[test]
    fn test_trimmed_mean_invalid_proportion() {
        assert!(TrimmedMean::new(0.5).is_err());
        assert!(TrimmedMean::new(-0.1).is_err());
        assert!(TrimmedMean::from_percent(50).is_err());
        assert!(TrimmedMean::from_percent(49).is_ok());
    }

    #[test]
    fn test_median() {
        assert_eq!(Median.estimate(&mut [3.0, 1.0, 2.0]).unwrap(), 2.0);
        assert_eq!(Median.estimate(&mut [4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_names() {
        assert_eq!(ArithmeticMean.name(), "Arithmetic Mean");
        assert_eq!(TrimmedMean::default().name(), "Trimmed Mean");
        assert_eq!(Median.name(), "Median");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Every built-in measure lies within the range of the data
        #[test]
        fn prop_measures_within_range(
            data in prop::collection::vec(-1e6f64..1e6, 1..60),
            percent in 0u8..50
        ) {
            let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let tol = 1e-6;

            let measures: [Box<dyn CentralTendency>; 3] = [
                Box::new(ArithmeticMean),
                Box::new(TrimmedMean::from_percent(percent).unwrap()),
                Box::new(Median),
            ];
            for measure in &measures {
                let mut scratch = data.clone();
                let value = measure.estimate(&mut scratch).unwrap();
                prop_assert!(value >= lo - tol && value <= hi + tol,
                    "{} = {} outside [{}, {}]", measure.name(), value, lo, hi);
            }
        }

        // Order of the input never changes the estimate
        #[test]
        fn prop_trimmed_mean_order_invariant(
            data in prop::collection::vec(-1e3f64..1e3, 1..40),
            percent in 0u8..50
        ) {
            let tm = TrimmedMean::from_percent(percent).unwrap();
            let mut forward = data.clone();
            let mut backward: Vec<f64> = data.iter().rev().copied().collect();
            prop_assert_eq!(tm.estimate(&mut forward).unwrap(), tm.estimate(&mut backward).unwrap());
        }
    }
}
