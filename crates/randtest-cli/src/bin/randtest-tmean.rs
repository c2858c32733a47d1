use anyhow::Result;
use clap::Parser;
use randtest_cli::{init_tracing, render, run, TrimmedMeanCli};
use randtest_core::TrimmedMean;

fn main() -> Result<()> {
    let cli = TrimmedMeanCli::parse();
    init_tracing(cli.common.log_level);

    let tmean = TrimmedMean::from_percent(cli.trim_percent)?;
    let result = run(&cli.common, tmean)?;
    println!("{}", render(&result, cli.common.format)?);
    Ok(())
}
