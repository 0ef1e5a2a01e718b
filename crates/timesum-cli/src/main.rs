use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use timesum_cli::Cli;
use timesum_cli::commands::sum;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse_args();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // stdout carries only the result line
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut stdout = std::io::stdout().lock();
    sum::run(&mut stdout, &cli.tokens, cli.json).context("failed to write result")
}
