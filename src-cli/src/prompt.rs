//! Reading secrets from the input stream.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use secrecy::SecretString;

/// Print `label` to stderr and read one line from `input` as a secret.
///
/// The trailing line ending is stripped. End of input is an error.
pub fn read_secret(input: &mut dyn BufRead, label: &str) -> Result<SecretString> {
    let mut stderr = std::io::stderr();
    // Prompt write errors are ignored.
    let _ = write!(stderr, "{label}: ");
    let _ = stderr.flush();

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read master secret")?;
    if read == 0 {
        bail!("no master secret on input");
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(SecretString::from(line))
}
