//! Orchestration of a randomization test run
//!
//! A run validates its inputs, computes the observed statistic, plans the
//! labelings for the selected method, fans the plan out to the workers and
//! assembles the merged tally into a [`RandTestResult`].

use crate::aggregator::{fan_out, partition, Tally};
use crate::config::RandTestConfig;
use crate::evaluator::{compute_statistic, Evaluator, SplitWorkspace};
use crate::generator::{systematic_count, LabelingGenerator};
use crate::result::RandTestResult;
use crate::types::{Alternative, Method};
use randtest_core::{
    clamp_workers, ArithmeticMean, CentralTendency, Error, ExecutionEngine, MctDifference,
    Result, SequentialEngine, TestStatistic,
};
use tracing::{debug, info, instrument, warn};

/// Systematic enumerations above this many labelings are logged as slow
const LARGE_ENUMERATION: u64 = 50_000_000;

/// Two-sample randomization test
///
/// Borrows the two samples and owns the statistic functions. Every builder
/// method is infallible; invalid settings are reported by [`RandTest::run`].
///
/// # Example
///
/// ```rust
/// use randtest_permutation::{Alternative, RandTest};
///
/// let result = RandTest::new(&[5.0, 6.0], &[8.0, 10.0])
///     .systematic()
///     .with_alternative(Alternative::Less)
///     .run()
///     .unwrap();
/// assert_eq!(result.num_successes(), 1);
/// assert_eq!(result.num_permutations(), 6);
/// ```
pub struct RandTest<'a, M = ArithmeticMean, S = MctDifference> {
    sample_a: &'a [f64],
    sample_b: &'a [f64],
    mct: M,
    statistic: S,
    config: RandTestConfig,
    rejected_count: Option<i64>,
}

impl<'a> RandTest<'a> {
    /// Difference of arithmetic means with the default configuration
    pub fn new(sample_a: &'a [f64], sample_b: &'a [f64]) -> Self {
        Self {
            sample_a,
            sample_b,
            mct: ArithmeticMean,
            statistic: MctDifference,
            config: RandTestConfig::default(),
            rejected_count: None,
        }
    }
}

impl<'a, M, S> RandTest<'a, M, S> {
    /// Replace the measure of central tendency
    pub fn with_mct<M2>(self, mct: M2) -> RandTest<'a, M2, S> {
        RandTest {
            sample_a: self.sample_a,
            sample_b: self.sample_b,
            mct,
            statistic: self.statistic,
            config: self.config,
            rejected_count: self.rejected_count,
        }
    }

    /// Replace the test statistic
    pub fn with_statistic<S2>(self, statistic: S2) -> RandTest<'a, M, S2> {
        RandTest {
            sample_a: self.sample_a,
            sample_b: self.sample_b,
            mct: self.mct,
            statistic,
            config: self.config,
            rejected_count: self.rejected_count,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: RandTestConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.config.method = method;
        self.rejected_count = None;
        self
    }

    /// Set the method from a permutation count
    ///
    /// `-1` selects systematic enumeration and a positive count selects a
    /// Monte Carlo test with that many permutations. Any other count makes
    /// the run fail.
    pub fn with_permutations(mut self, count: i64) -> Self {
        match Method::from_count(count) {
            Ok(method) => {
                self.config.method = method;
                self.rejected_count = None;
            }
            Err(_) => self.rejected_count = Some(count),
        }
        self
    }

    /// Enumerate every distinct labeling
    pub fn systematic(self) -> Self {
        self.with_method(Method::Systematic)
    }

    /// Sample `permutations` labelings at random
    pub fn monte_carlo(self, permutations: u64) -> Self {
        self.with_method(Method::MonteCarlo { permutations })
    }

    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.config.alternative = alternative;
        self
    }

    /// Set the number of concurrent workers
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Whether the observed labeling counts as one of the Monte Carlo
    /// permutations (on by default)
    pub fn with_observed_included(mut self, include: bool) -> Self {
        self.config.include_observed = include;
        self
    }

    pub fn config(&self) -> &RandTestConfig {
        &self.config
    }
}

impl<'a, M, S> RandTest<'a, M, S>
where
    M: CentralTendency,
    S: TestStatistic,
{
    /// Run the test
    ///
    /// Uses a dedicated thread pool when more than one worker is requested.
    /// Worker counts above the number of logical CPUs are reduced to it.
    pub fn run(&self) -> Result<RandTestResult> {
        self.validate()?;
        let workers = clamp_workers(self.config.workers);
        self.run_on_pool(workers)
    }

    /// Run the test on a caller-provided engine
    ///
    /// The configured worker count decides how the labelings are split; the
    /// engine decides how the resulting tasks are scheduled.
    pub fn run_with_engine<E: ExecutionEngine>(&self, engine: &E) -> Result<RandTestResult> {
        self.validate()?;
        self.execute(engine, self.config.workers)
    }

    #[cfg(feature = "parallel")]
    fn run_on_pool(&self, workers: usize) -> Result<RandTestResult> {
        if workers > 1 {
            let engine = randtest_core::ParallelEngine::with_num_threads(workers)?;
            self.execute(&engine, workers)
        } else {
            self.execute(&SequentialEngine, workers)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn run_on_pool(&self, workers: usize) -> Result<RandTestResult> {
        self.execute(&SequentialEngine, workers)
    }

    fn validate(&self) -> Result<()> {
        check_sample(self.sample_a, "Data of group A")?;
        check_sample(self.sample_b, "Data of group B")?;
        if let Some(count) = self.rejected_count {
            return Err(Error::invalid_permutations(count));
        }
        self.config.validate()
    }

    #[instrument(
        skip(self, engine),
        fields(
            n_a = self.sample_a.len(),
            n_b = self.sample_b.len(),
            method = %self.config.method,
            alternative = %self.config.alternative,
        )
    )]
    fn execute<E: ExecutionEngine>(&self, engine: &E, workers: usize) -> Result<RandTestResult> {
        let n_a = self.sample_a.len();
        let n_b = self.sample_b.len();
        let n = n_a + n_b;
        let alternative = self.config.alternative;
        let method = self.config.method;

        // Statistic functions may reorder their input
        let observed = compute_statistic(
            &self.statistic,
            &self.mct,
            &mut self.sample_a.to_vec(),
            &mut self.sample_b.to_vec(),
        )?;
        let mct_a = self.mct.estimate(&mut self.sample_a.to_vec())?;
        let mct_b = self.mct.estimate(&mut self.sample_b.to_vec())?;
        debug!(
            "Observed {} = {} (MCT A = {}, MCT B = {})",
            self.statistic.name(),
            observed,
            mct_a,
            mct_b
        );

        let (planned, head) = match method {
            Method::Systematic => {
                let total = systematic_count(n, n_a)?;
                if total > LARGE_ENUMERATION {
                    warn!(
                        "Systematic test enumerates {} labelings; consider a Monte Carlo test",
                        total
                    );
                }
                (total, Tally::default())
            }
            Method::MonteCarlo { permutations } if self.config.include_observed => {
                (permutations - 1, Tally::new(1, 1))
            }
            Method::MonteCarlo { permutations } => (permutations, Tally::default()),
        };

        let seed = match self.config.seed {
            _ if method.is_systematic() => 0,
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                debug!("No seed given; drew base seed {} from OS entropy", seed);
                seed
            }
        };

        let mut pooled = Vec::with_capacity(n);
        pooled.extend_from_slice(self.sample_a);
        pooled.extend_from_slice(self.sample_b);

        let evaluator = Evaluator::new(
            &pooled,
            n_a,
            &self.mct,
            &self.statistic,
            observed,
            alternative,
        );
        let ranges = partition(planned, workers);
        debug!(
            "Evaluating {} labelings with {} worker(s)",
            planned,
            ranges.len()
        );

        let tally = fan_out(engine, &ranges, |worker, range| {
            debug!("Worker {} evaluating {}..{}", worker, range.start, range.end);
            let mut generator = match method {
                Method::Systematic => LabelingGenerator::systematic(n, n_a, range)?,
                Method::MonteCarlo { .. } => LabelingGenerator::monte_carlo(n, n_a, seed, range)?,
            };
            let mut workspace = SplitWorkspace::new(n_a, n_b);
            let mut tally = Tally::default();
            while let Some(labeling) = generator.next_labeling() {
                tally.record(evaluator.is_success(labeling, &mut workspace)?);
            }
            debug!(
                "Worker {} done: {} of {} successes",
                worker, tally.successes, tally.evaluated
            );
            Ok(tally)
        })?;

        let total = head + tally;
        if total.evaluated != head.evaluated + planned {
            return Err(Error::Execution(format!(
                "Workers evaluated {} labelings, expected {}",
                total.evaluated,
                head.evaluated + planned
            )));
        }

        let result = RandTestResult::assemble(
            method,
            alternative,
            mct_a,
            mct_b,
            observed,
            total,
            self.config.seed,
        );
        info!(
            "{} test: {} of {} permutations at least as extreme, p = {}",
            method,
            result.num_successes(),
            result.num_permutations(),
            result.p_value()
        );
        Ok(result)
    }
}

fn check_sample(sample: &[f64], context: &str) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::empty_input(context));
    }
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}
