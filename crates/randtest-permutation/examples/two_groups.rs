//! Compare two small groups with a systematic and a Monte Carlo test
//!
//! Run with `RUST_LOG=debug` to see the per-worker log lines.

use randtest_core::TrimmedMean;
use randtest_permutation::{Alternative, RandTest};

fn main() -> randtest_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let control = [12.1, 10.4, 11.8, 9.7, 13.0, 10.9, 11.2];
    let treatment = [13.5, 12.9, 14.8, 11.6, 15.2, 13.1];

    println!("--- Systematic, difference of means ---");
    let exact = RandTest::new(&control, &treatment)
        .systematic()
        .with_alternative(Alternative::Less)
        .run()?;
    println!("{exact}\n");

    println!("--- Monte Carlo, difference of 20% trimmed means ---");
    let sampled = RandTest::new(&control, &treatment)
        .with_mct(TrimmedMean::default())
        .monte_carlo(10_000)
        .with_alternative(Alternative::Less)
        .with_workers(2)
        .with_seed(0)
        .run()?;
    println!("{sampled}");

    Ok(())
}
