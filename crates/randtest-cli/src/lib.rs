//! Shared plumbing of the `randtest-mean` and `randtest-tmean` binaries

pub mod cli;
pub mod data;

pub use cli::{CommonArgs, LogLevel, MeanCli, OutputFormat, TrimmedMeanCli};
pub use data::read_data;

use anyhow::Result;
use randtest_core::CentralTendency;
use randtest_permutation::{RandTest, RandTestResult};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber on stderr
///
/// `RUST_LOG` takes precedence over the `-l` level when set.
pub fn init_tracing(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read both data files and run the test with the given MCT
pub fn run<M: CentralTendency>(args: &CommonArgs, mct: M) -> Result<RandTestResult> {
    let config = args.config()?;
    let data_a = read_data(&args.file_a)?;
    let data_b = read_data(&args.file_b)?;
    debug!(
        "Read {} values for group A and {} for group B",
        data_a.len(),
        data_b.len()
    );

    let result = RandTest::new(&data_a, &data_b)
        .with_mct(mct)
        .with_config(config)
        .run()?;
    Ok(result)
}

/// Render a result in the requested format
pub fn render(result: &RandTestResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(result.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}
