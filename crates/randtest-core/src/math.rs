//! Combinatorial helpers for permutation counting

use statrs::function::factorial::ln_binomial;

/// Exact binomial coefficient `C(n, k)`
///
/// Returns `None` when the coefficient does not fit into a `u64`. Uses the
/// multiplicative formula, which stays integral at every step.
pub fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for j in 1..=k {
        acc = acc.checked_mul(u128::from(n - k + j))? / u128::from(j);
    }
    u64::try_from(acc).ok()
}

/// Approximate base-10 magnitude of `C(n, k)`, for diagnostics only
pub fn binomial_log10(n: u64, k: u64) -> f64 {
    ln_binomial(n, k) / std::f64::consts::LN_10
}
