//! CLI argument parsing for the randtest binaries

use clap::{Args, Parser, ValueEnum};
use randtest_permutation::{Alternative, Method, RandTestConfig, DEFAULT_PERMUTATIONS};
use std::path::PathBuf;

/// Output format for the test result
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

/// Verbosity of the log output on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl LogLevel {
    /// `tracing` filter directive for this level
    ///
    /// `critical` has no tracing counterpart and maps to `error`.
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

/// Arguments shared by every randtest binary
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    pub version: Option<bool>,

    /// Alternative hypothesis (two_sided, greater or less)
    #[arg(short = 'a', value_name = "ALTERNATIVE", default_value = "two_sided")]
    pub alternative: Alternative,

    /// Number of permutations; -1 enumerates every labeling (systematic test)
    #[arg(
        short = 'p',
        value_name = "NUM_PERMUTATIONS",
        default_value_t = DEFAULT_PERMUTATIONS,
        allow_negative_numbers = true
    )]
    pub permutations: i64,

    /// Number of workers
    #[arg(short = 'n', value_name = "NUM_WORKERS", default_value_t = 1)]
    pub workers: usize,

    /// Seed to initialize the random number generator
    #[arg(short = 's', value_name = "SEED")]
    pub seed: Option<u64>,

    /// Log level
    #[arg(short = 'l', value_name = "LOG_LEVEL", value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// File with the data of group A, one number per line
    #[arg(value_name = "FILE_A")]
    pub file_a: PathBuf,

    /// File with the data of group B, one number per line
    #[arg(value_name = "FILE_B")]
    pub file_b: PathBuf,
}

impl CommonArgs {
    /// Run configuration described by the arguments
    pub fn config(&self) -> randtest_core::Result<RandTestConfig> {
        Ok(RandTestConfig {
            method: Method::from_count(self.permutations)?,
            alternative: self.alternative,
            workers: self.workers,
            seed: self.seed,
            ..RandTestConfig::default()
        })
    }
}

#[derive(Parser, Debug)]
#[command(name = "randtest-mean")]
#[command(version, disable_version_flag = true)]
#[command(
    about = "Randomization test for the comparison of arithmetic means computed \
             based on two independent samples gathered in a controlled experiment",
    long_about = None
)]
pub struct MeanCli {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(name = "randtest-tmean")]
#[command(version, disable_version_flag = true)]
#[command(
    about = "Randomization test for the comparison of trimmed means computed \
             based on two independent samples gathered in a controlled experiment",
    long_about = None
)]
pub struct TrimmedMeanCli {
    /// Percent of each tail cut before averaging
    #[arg(
        short = 't',
        value_name = "[0-49]",
        default_value_t = 20,
        value_parser = clap::value_parser!(u8).range(0..50)
    )]
    pub trim_percent: u8,

    #[command(flatten)]
    pub common: CommonArgs,
}
