//! Salted and peppered master-secret hashing.
//!
//! Storage: `hash = SHA-512-hexdump(secret ++ salt ++ pepper)` where the salt
//! is 16 random printable characters and the pepper is one random byte
//! written as 2 lowercase hex digits. Only `{hash, salt}` is kept; the
//! pepper is dropped as soon as the hash is computed.
//!
//! Verification: every pepper from `ff` down to `00` is tried once. The
//! first matching hash wins; if none matches the secret is wrong.
//!
//! The pepper width is part of the stored format. Widening it would
//! invalidate every previously stored record.

use tracing::debug;
use zeroize::Zeroizing;

use crate::digest::{digest_to_string, HashWidth};
use crate::error::CryptoError;
use crate::random::{hex_pad, random_byte, random_printable};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Length of the stored salt in characters.
pub const SALT_LEN: usize = 16;

/// Hex digits of the unstored pepper.
pub const PEPPER_HEX_DIGITS: usize = 2;

/// Number of pepper values tried during verification.
pub const PEPPER_SPACE: usize = 256;

/// `stored_hash` of a profile that never had a master secret set.
pub const UNSET_HASH: &str = "password_not_set";

/// `stored_salt` of a profile that never had a master secret set.
pub const UNSET_SALT: &str = "salt_not_set";

/// `stored_hash` and `stored_salt` after the user chose not to be remembered.
pub const CLEARED_MARKER: &str = "do_not_remember";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Persisted verification data for the master secret.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterSecretRecord {
    /// Hex-dump hash, or one of the sentinel markers.
    pub stored_hash: String,
    /// Salt mixed into `stored_hash`, or one of the sentinel markers.
    pub stored_salt: String,
    /// Whether the master secret is remembered (and so verifiable).
    pub remember: bool,
}

impl Default for MasterSecretRecord {
    fn default() -> Self {
        Self::unset()
    }
}

impl MasterSecretRecord {
    /// Record of a fresh profile: nothing stored yet.
    #[must_use]
    pub fn unset() -> Self {
        Self {
            stored_hash: UNSET_HASH.to_owned(),
            stored_salt: UNSET_SALT.to_owned(),
            remember: true,
        }
    }

    /// Record after the stored hash was discarded.
    #[must_use]
    pub fn cleared() -> Self {
        Self {
            stored_hash: CLEARED_MARKER.to_owned(),
            stored_salt: CLEARED_MARKER.to_owned(),
            remember: false,
        }
    }

    /// `true` if this profile never had a master secret set.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.stored_hash == UNSET_HASH
    }

    /// `true` if the record holds a real hash that can be verified against.
    ///
    /// Sentinels contain `_`, which never occurs in a hex dump.
    #[must_use]
    pub fn is_stored(&self) -> bool {
        self.remember && is_hex_dump(&self.stored_hash)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Hash `secret` with `salt` and a specific `pepper` value.
#[must_use]
pub fn hash_master_secret(secret: &str, salt: &str, pepper: u8) -> String {
    let mut message = Zeroizing::new(String::new());
    message.push_str(secret);
    message.push_str(salt);
    message.push_str(&hex_pad(u32::from(pepper), PEPPER_HEX_DIGITS));
    digest_to_string(HashWidth::Sha512, message.as_bytes(), None)
}

/// Hash `secret` under a fresh salt and pepper, returning the record to
/// persist. The pepper is not part of the result.
///
/// # Errors
///
/// Returns [`CryptoError::Random`] if the OS CSPRNG fails.
pub fn seal_master_secret(secret: &str) -> Result<MasterSecretRecord, CryptoError> {
    let salt = random_printable(SALT_LEN)?;
    let pepper = Zeroizing::new(random_byte()?);
    let stored_hash = hash_master_secret(secret, &salt, *pepper);
    Ok(MasterSecretRecord {
        stored_hash,
        stored_salt: salt,
        remember: true,
    })
}

/// Check `candidate` against `record` by searching the whole pepper space.
///
/// Returns `false` only after all [`PEPPER_SPACE`] peppers were tried.
#[must_use]
pub fn verify_master_secret(candidate: &str, record: &MasterSecretRecord) -> bool {
    search_pepper(candidate, record, |_| {}).is_some()
}

/// Try peppers from `ff` down to `00`, calling `on_attempt` before each
/// hash. Returns the matching pepper, if any.
pub(crate) fn search_pepper(
    candidate: &str,
    record: &MasterSecretRecord,
    mut on_attempt: impl FnMut(u8),
) -> Option<u8> {
    for pepper in (0..=u8::MAX).rev() {
        on_attempt(pepper);
        let hash = hash_master_secret(candidate, &record.stored_salt, pepper);
        if constant_time_eq(hash.as_bytes(), record.stored_hash.as_bytes()) {
            debug!("master secret matched stored hash");
            return Some(pepper);
        }
    }
    debug!(attempts = PEPPER_SPACE, "pepper space exhausted without a match");
    None
}

/// Constant-time byte comparison.
///
/// The early return on a length mismatch only reveals the hash length, which
/// is fixed by the format.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

fn is_hex_dump(value: &str) -> bool {
    !value.is_empty()
        && value
            .split(' ')
            .all(|group| group.len() == 8 && group.bytes().all(|b| b.is_ascii_hexdigit()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
