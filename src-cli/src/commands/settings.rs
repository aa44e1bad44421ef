use std::io::Write;

use anyhow::{Context, Result};
use uniquify_crypto_core::DerivationSettings;
use uniquify_profile::{derivation_settings, update_derivation_settings, ExternalStore};

use super::EXIT_OK;
use crate::cli::SettingsArgs;

pub fn run(
    store: &mut dyn ExternalStore,
    args: &SettingsArgs,
    output: &mut dyn Write,
) -> Result<u8> {
    let current = derivation_settings(&*store)?;
    if args.is_empty() {
        print(&current, output)?;
        return Ok(EXIT_OK);
    }

    let updated = apply(current, args);
    update_derivation_settings(store, &updated).context("invalid settings")?;
    print(&updated, output)?;
    Ok(EXIT_OK)
}

fn apply(current: DerivationSettings, args: &SettingsArgs) -> DerivationSettings {
    DerivationSettings {
        credential_length: args.length.unwrap_or(current.credential_length),
        include_lowercase: args.lowercase.unwrap_or(current.include_lowercase),
        include_uppercase: args.uppercase.unwrap_or(current.include_uppercase),
        include_number: args.number.unwrap_or(current.include_number),
        include_symbol: args.symbol.unwrap_or(current.include_symbol),
    }
}

pub(super) fn print(settings: &DerivationSettings, output: &mut dyn Write) -> Result<()> {
    writeln!(output, "length: {}", settings.credential_length)?;
    writeln!(output, "lowercase: {}", settings.include_lowercase)?;
    writeln!(output, "uppercase: {}", settings.include_uppercase)?;
    writeln!(output, "number: {}", settings.include_number)?;
    writeln!(output, "symbol: {}", settings.include_symbol)?;
    if settings.is_hex_mode() {
        writeln!(output, "(no classes enabled: credentials are hex digests)")?;
    }
    Ok(())
}
