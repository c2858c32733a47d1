//! Common types for randomization tests

use randtest_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Alternative hypothesis, fixed for the duration of one test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alternative {
    /// Extreme in either direction: `|T| >= |T_obs|`
    #[default]
    TwoSided,
    /// Group A larger: `T >= T_obs`
    Greater,
    /// Group A smaller: `T <= T_obs`
    Less,
}

impl Alternative {
    /// Canonical lowercase name (`two_sided`, `greater`, `less`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoSided => "two_sided",
            Self::Greater => "greater",
            Self::Less => "less",
        }
    }

    /// Whether a permuted statistic counts as at least as extreme as the
    /// observed one
    ///
    /// Ties count as successes.
    pub fn is_success(&self, statistic: f64, observed: f64) -> bool {
        match self {
            Self::TwoSided => statistic.abs() >= observed.abs(),
            Self::Greater => statistic >= observed,
            Self::Less => statistic <= observed,
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alternative {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "two_sided" => Ok(Self::TwoSided),
            "greater" => Ok(Self::Greater),
            "less" => Ok(Self::Less),
            other => Err(Error::InvalidParameter(format!(
                "Alternative must be one of 'two_sided', 'greater', 'less', got '{other}'"
            ))),
        }
    }
}

/// How labelings are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Method {
    /// Every distinct labeling exactly once
    Systematic,
    /// A fixed number of uniformly drawn labelings
    MonteCarlo { permutations: u64 },
}

impl Method {
    /// Permutation count that selects systematic enumeration
    pub const SYSTEMATIC_SENTINEL: i64 = -1;

    /// Interpret a permutation count: `-1` is systematic, a positive value
    /// is a Monte Carlo draw count, everything else is rejected
    pub fn from_count(count: i64) -> Result<Self> {
        match count {
            Self::SYSTEMATIC_SENTINEL => Ok(Self::Systematic),
            n if n > 0 => Ok(Self::MonteCarlo {
                permutations: n as u64,
            }),
            n => Err(Error::invalid_permutations(n)),
        }
    }

    /// Display name of the method
    pub fn name(&self) -> &'static str {
        match self {
            Self::Systematic => "Systematic",
            Self::MonteCarlo { .. } => "Monte Carlo",
        }
    }

    pub fn is_systematic(&self) -> bool {
        matches!(self, Self::Systematic)
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::MonteCarlo {
            permutations: crate::api::DEFAULT_PERMUTATIONS as u64,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
