//! ## arbiter-cli
//! Command-line Monte Carlo driver for the Arbiter check-resolution engine.
//!
//! Runs one of the three simulation algorithms for a configurable number of
//! trials and prints the aggregate statistics as pretty JSON on stdout.
//! Diagnostics, including the effective seed of an entropy-seeded run, go to
//! stderr so the JSON stream stays clean for piping.

use clap::Parser;

mod commands;

use commands::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::run(cli)
}
