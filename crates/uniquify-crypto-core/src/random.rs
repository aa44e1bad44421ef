//! Random and hex helpers shared by the master-secret scheme.
//!
//! All randomness comes from `OsRng`. Failures of the OS generator are
//! surfaced as [`CryptoError::Random`] rather than panicking.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::CryptoError;

/// First printable, non-space ASCII code point (`!`).
const PRINTABLE_FIRST: u8 = 33;

/// Number of printable, non-space ASCII characters (`!` through `~`).
const PRINTABLE_COUNT: u8 = 94;

/// Largest multiple of [`PRINTABLE_COUNT`] that fits in a byte. Bytes at or
/// above this are rejected so every character is equally likely.
const PRINTABLE_REJECT_FROM: u8 = 188;

/// Render `value` as lowercase hex, zero-padded to `width` digits.
///
/// When `value` needs more than `width` digits only the lowest `width`
/// digits are kept.
#[must_use]
pub fn hex_pad(value: u32, width: usize) -> String {
    let hex = format!("{value:0width$x}");
    let start = hex.len().saturating_sub(width);
    hex[start..].to_owned()
}

/// Generate `len` random printable ASCII characters (33–126).
///
/// # Errors
///
/// Returns [`CryptoError::Random`] if the OS CSPRNG fails.
pub fn random_printable(len: usize) -> Result<String, CryptoError> {
    let mut out = String::with_capacity(len);
    let mut buf = [0u8; 32];
    while out.len() < len {
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| CryptoError::Random(format!("OS CSPRNG failed: {e}")))?;
        for &byte in buf.iter().filter(|&&b| b < PRINTABLE_REJECT_FROM) {
            if out.len() == len {
                break;
            }
            // byte < 188, so the sum stays within 33..=126.
            #[allow(clippy::arithmetic_side_effects)]
            out.push(char::from(PRINTABLE_FIRST + byte % PRINTABLE_COUNT));
        }
    }
    Ok(out)
}

/// Draw one uniformly random byte.
///
/// # Errors
///
/// Returns [`CryptoError::Random`] if the OS CSPRNG fails.
pub fn random_byte() -> Result<u8, CryptoError> {
    let mut buf = [0u8; 1];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|e| CryptoError::Random(format!("OS CSPRNG failed: {e}")))?;
    Ok(buf[0])
}
