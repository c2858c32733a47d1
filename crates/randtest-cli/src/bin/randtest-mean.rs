use anyhow::Result;
use clap::Parser;
use randtest_cli::{init_tracing, render, run, MeanCli};
use randtest_core::ArithmeticMean;

fn main() -> Result<()> {
    let cli = MeanCli::parse();
    init_tracing(cli.common.log_level);

    let result = run(&cli.common, ArithmeticMean)?;
    println!("{}", render(&result, cli.common.format)?);
    Ok(())
}
