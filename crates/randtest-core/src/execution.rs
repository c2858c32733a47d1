//! Execution engines for fanning work out to workers
//!
//! An engine runs `count` independent tasks and hands back their results in
//! task order. Tasks never share mutable state; the only communication is
//! the returned value, collected once every task has finished.

#[cfg(feature = "parallel")]
use crate::Result;
use tracing::warn;

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Process tasks one after another in the calling thread
    Sequential,
    /// Process tasks concurrently on a thread pool
    Parallel,
}

/// Trait for execution engines that control how worker tasks are run
pub trait ExecutionEngine: Send + Sync {
    /// Run `f(0..count)` and collect the results in task order
    ///
    /// Blocks until every task has completed.
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send;

    /// Get the execution strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Number of tasks that may run at the same time
    fn num_threads(&self) -> usize;
}

/// Sequential execution engine
///
/// Executes all tasks in the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl SequentialEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionEngine for SequentialEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        (0..count).map(f).collect()
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Parallel execution engine using Rayon
///
/// Owns a dedicated thread pool so the worker count of a test does not
/// depend on the global pool configuration.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug)]
pub struct ParallelEngine {
    thread_pool: std::sync::Arc<rayon::ThreadPool>,
}

#[cfg(feature = "parallel")]
impl ParallelEngine {
    /// Create with a specific number of threads
    pub fn with_num_threads(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("randtest-worker-{i}"))
            .build()
            .map_err(|e| crate::Error::Execution(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            thread_pool: std::sync::Arc::new(pool),
        })
    }
}

#[cfg(feature = "parallel")]
impl ExecutionEngine for ParallelEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        self.thread_pool
            .install(|| (0..count).into_par_iter().map(f).collect())
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }
}

/// Number of logical CPUs available to this process
pub fn available_workers() -> usize {
    num_cpus::get().max(1)
}

/// Cap a requested worker count at the number of logical CPUs
///
/// Results never depend on the worker count, so clamping only affects
/// scheduling.
pub fn clamp_workers(requested: usize) -> usize {
    let max = available_workers();
    if requested > max {
        warn!(
            "Specified number of workers ({}) is larger than the number of cores ({}). \
             Setting number of workers to {}.",
            requested, max, max
        );
        max
    } else {
        requested
    }
}
