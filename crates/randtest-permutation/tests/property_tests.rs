//! Property-based tests for the permutation engine
//!
//! Most samples hold small integers so that sums are exact and ties between
//! distinct partitions do not depend on summation order. Real-valued samples
//! check that a partition always evaluates the same way however it is drawn.

use proptest::prelude::*;
use randtest_core::{binomial, ArithmeticMean, MctDifference, SequentialEngine};
use randtest_permutation::aggregator::partition;
use randtest_permutation::{
    compute_statistic, Alternative, Evaluator, LabelingGenerator, RandTest, SplitWorkspace,
};

fn sample(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-50i32..50).prop_map(f64::from), 1..=max_len)
}

fn real_sample(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10.0f64..10.0, 1..=max_len)
}

fn alternative() -> impl Strategy<Value = Alternative> {
    prop_oneof![
        Just(Alternative::TwoSided),
        Just(Alternative::Greater),
        Just(Alternative::Less),
    ]
}

proptest! {
    // The observed labeling is always among the evaluated ones
    #[test]
    fn prop_systematic_p_value_is_positive(
        a in sample(5),
        b in sample(5),
        alternative in alternative(),
    ) {
        let result = RandTest::new(&a, &b)
            .systematic()
            .with_alternative(alternative)
            .run()
            .unwrap();
        let total = binomial((a.len() + b.len()) as u64, a.len() as u64).unwrap();
        prop_assert_eq!(result.num_permutations(), total);
        prop_assert!(result.num_successes() >= 1);
        prop_assert!(result.num_successes() <= total);
        prop_assert!(result.p_value() > 0.0 && result.p_value() <= 1.0);
        prop_assert_eq!(result.p_value(), result.num_successes() as f64 / total as f64);
    }

    // One-sided counts cover every labeling at least once
    #[test]
    fn prop_one_sided_counts_overlap(a in sample(4), b in sample(4)) {
        let greater = RandTest::new(&a, &b)
            .systematic()
            .with_alternative(Alternative::Greater)
            .run()
            .unwrap();
        let less = RandTest::new(&a, &b)
            .systematic()
            .with_alternative(Alternative::Less)
            .run()
            .unwrap();
        prop_assert!(
            greater.num_successes() + less.num_successes() > greater.num_permutations()
        );
    }

    #[test]
    fn prop_systematic_worker_invariance(
        a in sample(5),
        b in sample(5),
        workers in 1usize..9,
    ) {
        let reference = RandTest::new(&a, &b).systematic().run().unwrap();
        let split = RandTest::new(&a, &b)
            .systematic()
            .with_workers(workers)
            .run_with_engine(&SequentialEngine)
            .unwrap();
        prop_assert_eq!(split, reference);
    }

    #[test]
    fn prop_monte_carlo_worker_invariance(
        a in sample(8),
        b in sample(8),
        permutations in 1u64..400,
        workers in 1usize..9,
        seed in any::<u64>(),
        include_observed in any::<bool>(),
    ) {
        let reference = RandTest::new(&a, &b)
            .monte_carlo(permutations)
            .with_seed(seed)
            .with_observed_included(include_observed)
            .run_with_engine(&SequentialEngine)
            .unwrap();
        let split = RandTest::new(&a, &b)
            .monte_carlo(permutations)
            .with_seed(seed)
            .with_observed_included(include_observed)
            .with_workers(workers)
            .run_with_engine(&SequentialEngine)
            .unwrap();
        prop_assert_eq!(split.num_permutations(), permutations);
        prop_assert_eq!(&split, &reference);
        if include_observed {
            prop_assert!(split.num_successes() >= 1);
        }
    }

    // Draws of the observed partition reproduce the observed statistic exactly
    #[test]
    fn prop_monte_carlo_counts_observed_partition(
        a in real_sample(3),
        b in real_sample(3),
        alternative in alternative(),
        seed in any::<u64>(),
    ) {
        let n_a = a.len();
        let n = n_a + b.len();
        let pooled: Vec<f64> = a.iter().chain(b.iter()).copied().collect();
        let observed = compute_statistic(
            &MctDifference,
            &ArithmeticMean,
            &mut a.clone(),
            &mut b.clone(),
        )
        .unwrap();
        let evaluator = Evaluator::new(
            &pooled,
            n_a,
            &ArithmeticMean,
            &MctDifference,
            observed,
            alternative,
        );
        let mut workspace = SplitWorkspace::new(n_a, n - n_a);
        let mut generator = LabelingGenerator::monte_carlo(n, n_a, seed, 0..200).unwrap();
        while let Some(labeling) = generator.next_labeling() {
            if labeling[..n_a].iter().all(|&position| position < n_a) {
                prop_assert!(evaluator.is_success(labeling, &mut workspace).unwrap());
            }
        }
    }

    #[test]
    fn prop_partition_covers_total(total in 0u64..5_000, workers in 1usize..64) {
        let ranges = partition(total, workers);
        prop_assert!(!ranges.is_empty());
        prop_assert!(ranges.len() <= workers);
        prop_assert_eq!(ranges[0].start, 0);
        prop_assert_eq!(ranges[ranges.len() - 1].end, total);
        for pair in ranges.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
        let longest = ranges.iter().map(|r| r.end - r.start).max().unwrap_or(0);
        let shortest = ranges.iter().map(|r| r.end - r.start).min().unwrap_or(0);
        prop_assert!(longest - shortest <= 1);
    }
}
