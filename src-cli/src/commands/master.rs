//! Master-secret commands: setup, verify, forget, reset.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use secrecy::ExposeSecret;
use uniquify_profile::{
    clear_master_secret, reset_profile, set_master_secret, verify_master_secret, ExternalStore,
    Verification,
};

use super::{EXIT_OK, EXIT_REJECTED};
use crate::prompt::read_secret;

pub fn setup(
    store: &mut dyn ExternalStore,
    remember: bool,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<u8> {
    let secret = read_secret(input, "Master secret")?;
    let confirmation = read_secret(input, "Confirm master secret")?;
    set_master_secret(
        secret.expose_secret(),
        confirmation.expose_secret(),
        remember,
        store,
    )
    .context("setup failed")?;

    if remember {
        writeln!(output, "master secret set")?;
    } else {
        writeln!(output, "master secret set, not remembered")?;
    }
    Ok(EXIT_OK)
}

pub fn verify(
    store: &dyn ExternalStore,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<u8> {
    let secret = read_secret(input, "Master secret")?;
    let (label, code) = match verify_master_secret(secret.expose_secret(), store)? {
        Verification::Verified => ("verified", EXIT_OK),
        Verification::Rejected => ("rejected", EXIT_REJECTED),
        Verification::NotRemembered => ("not remembered", EXIT_OK),
    };
    writeln!(output, "{label}")?;
    Ok(code)
}

pub fn forget(store: &mut dyn ExternalStore, output: &mut dyn Write) -> Result<u8> {
    clear_master_secret(store)?;
    writeln!(output, "master secret forgotten")?;
    Ok(EXIT_OK)
}

pub fn reset(store: &mut dyn ExternalStore, output: &mut dyn Write) -> Result<u8> {
    reset_profile(store)?;
    writeln!(output, "profile reset")?;
    Ok(EXIT_OK)
}
