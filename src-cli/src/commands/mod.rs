//! Subcommand implementations.
//!
//! Each command reads secrets from `input`, writes its result to `output`
//! and user-facing warnings to `notices`, and returns the process exit
//! status.

mod derive;
mod master;
mod settings;
mod status;

use std::io::{BufRead, Write};

use anyhow::Result;
use uniquify_profile::ExternalStore;

use crate::cli::Command;

/// Exit code for a command that completed.
pub const EXIT_OK: u8 = 0;

/// Exit code for a master secret that did not match.
pub const EXIT_REJECTED: u8 = 2;

/// Run `command` against `store`.
pub fn dispatch(
    command: &Command,
    store: &mut dyn ExternalStore,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    notices: &mut dyn Write,
) -> Result<u8> {
    match command {
        Command::Status => status::run(&*store, output),
        Command::Setup { no_remember } => master::setup(store, !no_remember, input, output),
        Command::Derive { site, no_verify } => {
            derive::run(&*store, site, *no_verify, input, output, notices)
        }
        Command::Verify => master::verify(&*store, input, output),
        Command::Forget => master::forget(store, output),
        Command::Settings(args) => settings::run(store, args, output),
        Command::Reset => master::reset(store, output),
    }
}
