//! Job splitting and fan-in of worker tallies

use randtest_core::{Error, ExecutionEngine, Result};
use serde::Serialize;
use std::any::Any;
use std::iter::Sum;
use std::ops::{Add, Range};
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;

/// Success count of one worker (or of the whole run after merging)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Labelings at least as extreme as the observed data
    pub successes: u64,
    /// Labelings evaluated
    pub evaluated: u64,
}

impl Tally {
    pub fn new(successes: u64, evaluated: u64) -> Self {
        Self {
            successes,
            evaluated,
        }
    }

    /// Count one evaluated labeling
    pub fn record(&mut self, success: bool) {
        self.successes += u64::from(success);
        self.evaluated += 1;
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, other: Tally) -> Tally {
        Tally {
            successes: self.successes + other.successes,
            evaluated: self.evaluated + other.evaluated,
        }
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Tally>>(iter: I) -> Tally {
        iter.fold(Tally::default(), Add::add)
    }
}

/// Split `0..total` into at most `workers` contiguous, non-empty ranges
///
/// The first `total % parts` ranges are one unit longer. A zero total yields
/// a single empty range so that the fan-out still runs one worker.
pub fn partition(total: u64, workers: usize) -> Vec<Range<u64>> {
    let parts = (workers.max(1) as u64).min(total).max(1);
    let base = total / parts;
    let extra = total % parts;
    let mut start = 0;
    (0..parts)
        .map(|i| {
            let len = base + u64::from(i < extra);
            let range = start..start + len;
            start += len;
            range
        })
        .collect()
}

/// Run `worker` once per range on `engine` and merge the tallies
///
/// Any worker error fails the whole fan-out; a panic inside a worker is
/// caught and reported as [`Error::WorkerFailure`]. Results of the other
/// workers are discarded in both cases.
pub fn fan_out<E, W>(engine: &E, ranges: &[Range<u64>], worker: W) -> Result<Tally>
where
    E: ExecutionEngine,
    W: Fn(usize, Range<u64>) -> Result<Tally> + Sync + Send,
{
    debug!(
        "Fanning out {} ranges on {} thread(s)",
        ranges.len(),
        engine.num_threads()
    );

    let outcomes = engine.execute_batch(ranges.len(), |index| {
        let range = ranges[index].clone();
        panic::catch_unwind(AssertUnwindSafe(|| worker(index, range))).unwrap_or_else(|payload| {
            Err(Error::WorkerFailure {
                worker: index,
                message: panic_message(payload.as_ref()),
            })
        })
    });

    outcomes.into_iter().sum()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use randtest_core::SequentialEngine;

    fn assert_exact_cover(ranges: &[Range<u64>], total: u64) {
        let mut expected_start = 0;
        for range in ranges {
            assert_eq!(range.start, expected_start);
            expected_start = range.end;
        }
        assert_eq!(expected_start, total);
    }

    #[test]
    fn test_partition_even_and_uneven() {
        assert_eq!(partition(6, 3), vec![0..2, 2..4, 4..6]);
        assert_eq!(partition(7, 3), vec![0..3, 3..5, 5..7]);
        assert_eq!(partition(6, 1), vec![0..6]);
    }

    #[test]
    fn test_partition_more_workers_than_work() {
        let ranges = partition(2, 8);
        assert_eq!(ranges, vec![0..1, 1..2]);
        assert_eq!(partition(0, 4), vec![0..0]);
    }

    #[test]
    fn test_partition_exact_cover() {
        for total in [1, 5, 99, 1000, 10_007] {
            for workers in 1..12 {
                let ranges = partition(total, workers);
                assert!(ranges.len() <= workers);
                assert!(ranges.iter().all(|r| !r.is_empty()));
                assert_exact_cover(&ranges, total);
            }
        }
    }

    #[test]
    fn test_tally_merge_is_exact() {
        let mut a = Tally::default();
        a.record(true);
        a.record(false);
        let b = Tally::new(3, 10);
        assert_eq!(a + b, Tally::new(4, 12));
        let total: Tally = vec![a, b, Tally::new(0, 1)].into_iter().sum();
        assert_eq!(total, Tally::new(4, 13));
    }

    #[test]
    fn test_fan_out_sums_workers() {
        let ranges = partition(100, 4);
        let tally = fan_out(&SequentialEngine, &ranges, |_, range| {
            let evaluated = range.end - range.start;
            Ok(Tally::new(evaluated / 2, evaluated))
        })
        .unwrap();
        assert_eq!(tally.evaluated, 100);
        assert_eq!(tally.successes, 50);
    }

    #[test]
    fn test_fan_out_propagates_errors() {
        let ranges = partition(10, 3);
        let err = fan_out(&SequentialEngine, &ranges, |worker, _| {
            if worker == 1 {
                Err(Error::StatisticComputation("bad subset".to_string()))
            } else {
                Ok(Tally::new(1, 1))
            }
        })
        .unwrap_err();
        assert!(matches!(err, Error::StatisticComputation(_)));
    }

    #[test]
    fn test_fan_out_converts_panics() {
        let ranges = partition(10, 2);
        let err = fan_out(&SequentialEngine, &ranges, |worker, _| {
            if worker == 1 {
                panic!("statistic blew up");
            }
            Ok(Tally::new(0, 5))
        })
        .unwrap_err();
        match err {
            Error::WorkerFailure { worker, message } => {
                assert_eq!(worker, 1);
                assert_eq!(message, "statistic blew up");
            }
            other => panic!("Wrong error type: {other}"),
        }
    }
}
