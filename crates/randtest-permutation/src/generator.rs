//! Labeling generation for systematic and Monte Carlo tests
//!
//! A labeling is a buffer of `n` pooled positions: the first `n_a` entries
//! are assigned to group A, the remaining `n_b` to group B.
//!
//! Both schedules work over a half-open range of indices so that the job
//! splitter can hand disjoint ranges to independent workers:
//!
//! - **Systematic** indices are ranks in the lexicographic order of the
//!   chosen A positions. A worker starts by unranking its first index and
//!   then steps to the next combination, so no worker replays a prefix.
//! - **Monte Carlo** indices are draw numbers. Draw `d` uses ChaCha8 stream
//!   `d` of the run seed, so its labeling depends only on `(seed, d)` and not
//!   on which worker performs it.
//!
//! Positions within each group are always ascending, so a labeling hands
//! the statistic its values in the same order as every other labeling of
//! the same partition, the observed one included.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use randtest_core::{binomial, Error, Result};
use std::ops::Range;

enum Schedule {
    Systematic {
        combination: Vec<usize>,
        primed: bool,
    },
    MonteCarlo {
        seed: u64,
    },
}

/// Lazy producer of labelings over an index range
///
/// Yields borrowed labelings one at a time; the buffer is reused between
/// calls so a worker allocates once.
pub struct LabelingGenerator {
    schedule: Schedule,
    n_a: usize,
    labeling: Vec<usize>,
    range: Range<u64>,
}

impl LabelingGenerator {
    /// Enumerate the systematic ranks in `range`
    ///
    /// Fails when `range` reaches past `C(n, n_a)` or when that count does
    /// not fit into a `u64`.
    pub fn systematic(n: usize, n_a: usize, range: Range<u64>) -> Result<Self> {
        check_sizes(n, n_a)?;
        let total = systematic_count(n, n_a)?;
        if range.end > total || range.start > range.end {
            return Err(Error::InvalidParameter(format!(
                "Systematic range {}..{} is outside 0..{}",
                range.start, range.end, total
            )));
        }
        Ok(Self {
            schedule: Schedule::Systematic {
                combination: Vec::with_capacity(n_a),
                primed: false,
            },
            n_a,
            labeling: vec![0; n],
            range,
        })
    }

    /// Produce the Monte Carlo draws numbered `range` for the given seed
    pub fn monte_carlo(n: usize, n_a: usize, seed: u64, range: Range<u64>) -> Result<Self> {
        check_sizes(n, n_a)?;
        Ok(Self {
            schedule: Schedule::MonteCarlo { seed },
            n_a,
            labeling: vec![0; n],
            range,
        })
    }

    /// Advance to the next labeling
    ///
    /// Returns `None` once the range is exhausted.
    pub fn next_labeling(&mut self) -> Option<&[usize]> {
        if self.range.start >= self.range.end {
            return None;
        }
        let n = self.labeling.len();
        match &mut self.schedule {
            Schedule::Systematic {
                combination,
                primed,
            } => {
                if *primed {
                    next_combination(combination, n);
                } else {
                    unrank_combination(n, self.n_a, self.range.start, combination);
                    *primed = true;
                }
                fill_labeling(combination, &mut self.labeling);
            }
            Schedule::MonteCarlo { seed } => {
                let mut rng = draw_rng(*seed, self.range.start);
                for (position, slot) in self.labeling.iter_mut().enumerate() {
                    *slot = position;
                }
                self.labeling.shuffle(&mut rng);
                let (positions_a, positions_b) = self.labeling.split_at_mut(self.n_a);
                positions_a.sort_unstable();
                positions_b.sort_unstable();
            }
        }
        self.range.start += 1;
        Some(&self.labeling)
    }

    /// Index of the next labeling to be produced
    pub fn position(&self) -> u64 {
        self.range.start
    }

    /// Number of labelings left in the range
    pub fn remaining(&self) -> u64 {
        self.range.end.saturating_sub(self.range.start)
    }
}

/// Number of distinct labelings, `C(n, n_a)`
pub fn systematic_count(n: usize, n_a: usize) -> Result<u64> {
    binomial(n as u64, n_a as u64).ok_or_else(|| {
        Error::InvalidParameter(format!(
            "Systematic enumeration of C({n}, {n_a}) ~ 1e{:.0} labelings cannot be indexed; \
             use a Monte Carlo test instead",
            randtest_core::math::binomial_log10(n as u64, n_a as u64)
        ))
    })
}

/// The RNG for Monte Carlo draw `draw` of a run seeded with `seed`
pub fn draw_rng(seed: u64, draw: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(draw);
    rng
}

fn check_sizes(n: usize, n_a: usize) -> Result<()> {
    if n_a == 0 || n_a >= n {
        return Err(Error::InvalidInput(format!(
            "Both groups need at least one value (n = {n}, n_a = {n_a})"
        )));
    }
    Ok(())
}

/// Write the combination of rank `rank` (lexicographic) into `out`
///
/// `rank` must be below `C(n, k)`.
fn unrank_combination(n: usize, k: usize, rank: u64, out: &mut Vec<usize>) {
    out.clear();
    let mut rank = rank;
    let mut candidate = 0;
    for slot in 0..k {
        loop {
            // Bounded by C(n, k), which is known to fit
            let with_candidate =
                binomial((n - candidate - 1) as u64, (k - slot - 1) as u64).unwrap_or(u64::MAX);
            if rank < with_candidate {
                out.push(candidate);
                candidate += 1;
                break;
            }
            rank -= with_candidate;
            candidate += 1;
        }
    }
}

/// Step `combination` to its lexicographic successor; false at the last one
fn next_combination(combination: &mut [usize], n: usize) -> bool {
    let k = combination.len();
    for i in (0..k).rev() {
        if combination[i] < n - k + i {
            combination[i] += 1;
            for j in i + 1..k {
                combination[j] = combination[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Chosen positions first, then the complement in ascending order
fn fill_labeling(combination: &[usize], labeling: &mut [usize]) {
    let k = combination.len();
    labeling[..k].copy_from_slice(combination);
    let mut chosen = combination.iter().peekable();
    let mut next_b = k;
    for position in 0..labeling.len() {
        if chosen.peek() == Some(&&position) {
            chosen.next();
        } else {
            labeling[next_b] = position;
            next_b += 1;
        }
    }
}
