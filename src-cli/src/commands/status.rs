use std::io::Write;

use anyhow::Result;
use uniquify_profile::{derivation_settings, profile_status, ExternalStore, ProfileStatus};

use super::EXIT_OK;

pub fn run(store: &dyn ExternalStore, output: &mut dyn Write) -> Result<u8> {
    let status = profile_status(store)?;
    let settings = derivation_settings(store)?;

    let label = match status {
        ProfileStatus::Unset => "unset",
        ProfileStatus::Remembered => "remembered",
        ProfileStatus::NotRemembered => "not remembered",
    };
    writeln!(output, "profile: {label}")?;
    writeln!(output, "backend: {}", store.backend())?;
    super::settings::print(&settings, output)?;

    if status == ProfileStatus::Unset {
        writeln!(output, "run `uniquify setup` to set a master secret")?;
    }
    Ok(EXIT_OK)
}
