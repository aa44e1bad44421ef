//! `uniquify` — command-line shell over the profile store.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

mod cli;
mod commands;
mod config;
mod prompt;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;
use crate::config::StoreConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();
    set_up_logger(cli.verbose);

    match run(&cli) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            // Nothing sensible left to do if stderr is gone.
            let _ = writeln!(io::stderr(), "Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let config = StoreConfig::from_cli(cli)?;
    let mut store = config.open()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    let mut notices = io::stderr();

    commands::dispatch(
        &cli.command,
        &mut *store,
        &mut input,
        &mut output,
        &mut notices,
    )
}

/// Install the global subscriber: UTC RFC 3339 timestamps on stderr,
/// filtered by `RUST_LOG`, else by the `-v` count.
fn set_up_logger(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let subscriber = FmtSubscriber::builder()
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        let _ = writeln!(io::stderr(), "Unable to set global default subscriber");
    }
}
