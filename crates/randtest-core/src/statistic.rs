//! Built-in test statistics

use crate::{CentralTendency, Result, TestStatistic};

/// Difference of central tendencies, `MCT(A) - MCT(B)`
///
/// This is the default statistic. Combined with [`crate::ArithmeticMean`]
/// it is the classic difference of means.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MctDifference;

impl TestStatistic for MctDifference {
    fn compute(
        &self,
        group_a: &mut [f64],
        group_b: &mut [f64],
        mct: &dyn CentralTendency,
    ) -> Result<f64> {
        Ok(mct.estimate(group_a)? - mct.estimate(group_b)?)
    }

    fn name(&self) -> &str {
        "Difference of MCTs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArithmeticMean, Median};

    #[test]
    fn test_difference_of_means() {
        let value = MctDifference
            .compute(&mut [5.0, 6.0], &mut [8.0, 10.0], &ArithmeticMean)
            .unwrap();
        assert_eq!(value, -3.5);
    }

    #[test]
    fn test_difference_uses_supplied_mct() {
        let value = MctDifference
            .compute(&mut [1.0, 2.0, 100.0], &mut [1.0, 1.0, 1.0], &Median)
            .unwrap();
        assert_eq!(value, 1.0);
    }

    #[test]
    fn test_empty_group_propagates() {
        assert!(MctDifference
            .compute(&mut [], &mut [1.0], &ArithmeticMean)
            .is_err());
    }
}
