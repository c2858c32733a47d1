//! Evaluation of a single labeling against the observed statistic

use crate::types::Alternative;
use randtest_core::{CentralTendency, Error, Result, TestStatistic};

/// Per-worker scratch buffers for splitting the pooled data
///
/// Statistic functions may reorder their input, so every evaluation works
/// on fresh copies held here instead of on the shared pooled slice.
#[derive(Debug, Clone, Default)]
pub struct SplitWorkspace {
    group_a: Vec<f64>,
    group_b: Vec<f64>,
}

impl SplitWorkspace {
    pub fn new(n_a: usize, n_b: usize) -> Self {
        Self {
            group_a: Vec::with_capacity(n_a),
            group_b: Vec::with_capacity(n_b),
        }
    }

    /// Copy the pooled values into the two groups described by `labeling`
    pub fn split(
        &mut self,
        pooled: &[f64],
        labeling: &[usize],
        n_a: usize,
    ) -> (&mut [f64], &mut [f64]) {
        let (positions_a, positions_b) = labeling.split_at(n_a);
        self.group_a.clear();
        self.group_a.extend(positions_a.iter().map(|&i| pooled[i]));
        self.group_b.clear();
        self.group_b.extend(positions_b.iter().map(|&i| pooled[i]));
        (self.group_a.as_mut_slice(), self.group_b.as_mut_slice())
    }
}

/// Apply a test statistic and reject non-finite values
pub fn compute_statistic<M, S>(
    statistic: &S,
    mct: &M,
    group_a: &mut [f64],
    group_b: &mut [f64],
) -> Result<f64>
where
    M: CentralTendency,
    S: TestStatistic,
{
    let value = statistic.compute(group_a, group_b, mct)?;
    if !value.is_finite() {
        return Err(Error::StatisticComputation(format!(
            "{} returned a non-finite value ({value})",
            statistic.name()
        )));
    }
    Ok(value)
}

/// Decides whether a labeling is at least as extreme as the observed data
///
/// Holds only shared references, so one evaluator is shared by all workers.
pub struct Evaluator<'a, M, S> {
    pooled: &'a [f64],
    n_a: usize,
    mct: &'a M,
    statistic: &'a S,
    observed: f64,
    alternative: Alternative,
}

impl<'a, M, S> Evaluator<'a, M, S>
where
    M: CentralTendency,
    S: TestStatistic,
{
    pub fn new(
        pooled: &'a [f64],
        n_a: usize,
        mct: &'a M,
        statistic: &'a S,
        observed: f64,
        alternative: Alternative,
    ) -> Self {
        Self {
            pooled,
            n_a,
            mct,
            statistic,
            observed,
            alternative,
        }
    }

    /// Statistic value for one labeling
    pub fn statistic_for(&self, labeling: &[usize], workspace: &mut SplitWorkspace) -> Result<f64> {
        let (group_a, group_b) = workspace.split(self.pooled, labeling, self.n_a);
        compute_statistic(self.statistic, self.mct, group_a, group_b)
    }

    /// Whether one labeling counts as a success under the alternative
    pub fn is_success(&self, labeling: &[usize], workspace: &mut SplitWorkspace) -> Result<bool> {
        let value = self.statistic_for(labeling, workspace)?;
        Ok(self.alternative.is_success(value, self.observed))
    }
}
