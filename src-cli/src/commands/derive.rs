use std::io::{BufRead, Write};

use anyhow::{ensure, Context, Result};
use secrecy::ExposeSecret;
use tracing::info;
use uniquify_crypto_core::derive_credential;
use uniquify_profile::{derivation_settings, generate_site_credential, ExternalStore, Verification};

use super::EXIT_OK;
use crate::prompt::read_secret;

pub fn run(
    store: &dyn ExternalStore,
    site: &str,
    no_verify: bool,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    notices: &mut dyn Write,
) -> Result<u8> {
    let secret = read_secret(input, "Master secret")?;

    let value = if no_verify {
        ensure!(
            !secret.expose_secret().is_empty(),
            "master secret must not be empty"
        );
        ensure!(!site.is_empty(), "site must not be empty");
        let settings = derivation_settings(store)?;
        derive_credential(secret.expose_secret(), site, &settings)
            .context("derivation failed")?
    } else {
        let generated = generate_site_credential(secret.expose_secret(), site, store)?;
        match generated.verification {
            Verification::Verified => {}
            Verification::Rejected => {
                info!("derived with a master secret that failed verification");
                writeln!(
                    notices,
                    "warning: master secret does not match the stored one"
                )?;
            }
            Verification::NotRemembered => {
                info!("derived without a remembered master secret");
                writeln!(
                    notices,
                    "note: master secret is not remembered, credential is unverified"
                )?;
            }
        }
        generated.value
    };

    writeln!(output, "{value}")?;
    Ok(EXIT_OK)
}
