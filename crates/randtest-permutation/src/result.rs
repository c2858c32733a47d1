//! Result record of a randomization test

use crate::aggregator::Tally;
use crate::types::{Alternative, Method};
use serde::Serialize;
use std::fmt;

/// Outcome of one randomization test
///
/// Assembled once at the end of a successful run. Fields are read through
/// accessors; there is no way to modify a result after assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RandTestResult {
    method: Method,
    alternative: Alternative,
    mct_a: f64,
    mct_b: f64,
    statistic: f64,
    num_successes: u64,
    num_permutations: u64,
    p_value: f64,
    seed: Option<u64>,
}

impl RandTestResult {
    /// Combine the merged tally with the run metadata
    pub(crate) fn assemble(
        method: Method,
        alternative: Alternative,
        mct_a: f64,
        mct_b: f64,
        statistic: f64,
        tally: Tally,
        seed: Option<u64>,
    ) -> Self {
        Self {
            method,
            alternative,
            mct_a,
            mct_b,
            statistic,
            num_successes: tally.successes,
            num_permutations: tally.evaluated,
            p_value: tally.successes as f64 / tally.evaluated as f64,
            seed,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn alternative(&self) -> Alternative {
        self.alternative
    }

    /// Measure of central tendency of group A
    pub fn mct_a(&self) -> f64 {
        self.mct_a
    }

    /// Measure of central tendency of group B
    pub fn mct_b(&self) -> f64 {
        self.mct_b
    }

    /// Observed test statistic value
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    /// Number of permutations at least as extreme as the observed data
    pub fn num_successes(&self) -> u64 {
        self.num_successes
    }

    /// Number of permutations evaluated (including the observed labeling)
    pub fn num_permutations(&self) -> u64 {
        self.num_permutations
    }

    /// `num_successes / num_permutations`
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Caller-supplied seed, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether the p value is at or below a significance level
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value <= alpha
    }
}

impl fmt::Display for RandTestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Method = {}", self.method)?;
        writeln!(f, "Alternative = {}", self.alternative)?;
        writeln!(f, "MCT(data of group A) = {}", format_general(self.mct_a))?;
        writeln!(f, "MCT(data of group B) = {}", format_general(self.mct_b))?;
        writeln!(
            f,
            "Observed test statistic value = {}",
            format_general(self.statistic)
        )?;
        writeln!(f, "Number of successes = {}", self.num_successes)?;
        writeln!(f, "Number of permutations = {}", self.num_permutations)?;
        writeln!(f, "p value = {}", format_general(self.p_value))?;
        match self.seed {
            Some(seed) => write!(f, "seed = {seed}"),
            None => write!(f, "seed = None"),
        }
    }
}

/// Format a real with six significant digits, `%g` style
///
/// Fixed notation for decimal exponents in `-4..6`, scientific otherwise;
/// trailing zeros are dropped in both.
pub fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> RandTestResult {
        RandTestResult::assemble(
            Method::Systematic,
            Alternative::TwoSided,
            5.5,
            9.0,
            -3.5,
            Tally::new(2, 6),
            None,
        )
    }

    #[test]
    fn test_p_value() {
        let result = example();
        assert_eq!(result.num_successes(), 2);
        assert_eq!(result.num_permutations(), 6);
        assert_eq!(result.p_value(), 2.0 / 6.0);
        assert!(!result.is_significant(0.05));
    }

    #[test]
    fn test_display_layout() {
        let expected = "Method = Systematic\n\
                        Alternative = two_sided\n\
                        MCT(data of group A) = 5.5\n\
                        MCT(data of group B) = 9\n\
                        Observed test statistic value = -3.5\n\
                        Number of successes = 2\n\
                        Number of permutations = 6\n\
                        p value = 0.333333\n\
                        seed = None";
        assert_eq!(example().to_string(), expected);
    }

    #[test]
    fn test_display_with_seed() {
        let result = RandTestResult::assemble(
            Method::MonteCarlo { permutations: 1000 },
            Alternative::Greater,
            101.915,
            100.357,
            1.55775,
            Tally::new(128, 1000),
            Some(0),
        );
        let text = result.to_string();
        assert!(text.starts_with("Method = Monte Carlo\nAlternative = greater\n"));
        assert!(text.contains("p value = 0.128\n"));
        assert!(text.ends_with("seed = 0"));
    }

    #[test]
    fn test_format_general() {
        assert_eq!(format_general(5.5), "5.5");
        assert_eq!(format_general(9.0), "9");
        assert_eq!(format_general(-3.5), "-3.5");
        assert_eq!(format_general(1.0 / 3.0), "0.333333");
        assert_eq!(format_general(0.01), "0.01");
        assert_eq!(format_general(101.91489361702128), "101.915");
        assert_eq!(format_general(0.9577677), "0.957768");
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(123456.0), "123456");
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(999999.7), "1e+06");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(0.00001234), "1.234e-05");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(example()).unwrap();
        assert_eq!(json["method"]["kind"], "systematic");
        assert_eq!(json["alternative"], "two_sided");
        assert_eq!(json["num_successes"], 2);
        assert_eq!(json["seed"], serde_json::Value::Null);
    }
}
