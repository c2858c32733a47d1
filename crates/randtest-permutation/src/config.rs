//! Configuration for a randomization test run

use crate::types::{Alternative, Method};
use randtest_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Everything that controls a run apart from the data and the statistic
/// functions
///
/// Deserializing fills missing fields from [`Default`], so a partial
/// configuration file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandTestConfig {
    /// Systematic enumeration or Monte Carlo sampling
    pub method: Method,
    /// Comparison rule against the observed statistic
    pub alternative: Alternative,
    /// Number of concurrent workers (at least 1)
    pub workers: usize,
    /// Base seed for Monte Carlo draws; `None` draws one from OS entropy
    pub seed: Option<u64>,
    /// Count the observed labeling as one of the Monte Carlo permutations
    pub include_observed: bool,
}

impl Default for RandTestConfig {
    fn default() -> Self {
        Self {
            method: Method::default(),
            alternative: Alternative::default(),
            workers: 1,
            seed: None,
            include_observed: true,
        }
    }
}

impl RandTestConfig {
    /// Check the parameters that do not depend on the data
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::InvalidParameter(
                "Number of workers must be at least 1".to_string(),
            ));
        }
        if let Method::MonteCarlo { permutations: 0 } = self.method {
            return Err(Error::invalid_permutations(0));
        }
        Ok(())
    }
}
