//! Deterministic site-credential derivation.
//!
//! The credential for a site is the SHA-2 digest of `secret ++ site_id`,
//! mapped onto the alphabet selected by [`DerivationSettings`]. If the
//! mapped string lacks a character from any enabled class, the string itself
//! is hashed again and re-checked until every enabled class is present.
//!
//! Nothing is stored: the same secret, site and settings always regenerate
//! the same credential.

use tracing::debug;
use zeroize::Zeroizing;

use crate::alphabet::{Alphabet, CharClass};
use crate::digest::{digest_to_string, HashWidth};
use crate::error::CryptoError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Credential lengths with a matching SHA-2 width (one character per word).
pub const SUPPORTED_CREDENTIAL_LENGTHS: [usize; 3] = [8, 12, 16];

/// Default credential length.
pub const DEFAULT_CREDENTIAL_LENGTH: usize = 12;

/// Upper bound on rehash rounds. Any alphabet built from settings converges
/// within a few rounds; the cap only guards against a broken alphabet.
pub const MAX_REHASH_ROUNDS: usize = 10_000;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Length and character classes of a derived credential.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivationSettings {
    /// Output length: 8, 12 or 16.
    pub credential_length: usize,
    /// Require at least one lowercase letter.
    pub include_lowercase: bool,
    /// Require at least one uppercase letter.
    pub include_uppercase: bool,
    /// Require at least one digit.
    pub include_number: bool,
    /// Require at least one symbol.
    pub include_symbol: bool,
}

impl Default for DerivationSettings {
    fn default() -> Self {
        Self {
            credential_length: DEFAULT_CREDENTIAL_LENGTH,
            include_lowercase: true,
            include_uppercase: true,
            include_number: true,
            include_symbol: true,
        }
    }
}

impl DerivationSettings {
    /// Classes whose include-flag is set.
    #[must_use]
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        [
            (CharClass::Lowercase, self.include_lowercase),
            (CharClass::Uppercase, self.include_uppercase),
            (CharClass::Digit, self.include_number),
            (CharClass::Symbol, self.include_symbol),
        ]
        .into_iter()
        .filter_map(|(class, enabled)| enabled.then_some(class))
        .collect()
    }

    /// `true` when no class is enabled and output falls back to a hex dump.
    #[must_use]
    pub const fn is_hex_mode(&self) -> bool {
        !(self.include_lowercase
            || self.include_uppercase
            || self.include_number
            || self.include_symbol)
    }

    /// Check the length and return the hash width it selects.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidArgument`] unless the length is 8, 12 or 16.
    pub fn hash_width(&self) -> Result<HashWidth, CryptoError> {
        HashWidth::for_credential_length(self.credential_length)
    }
}

/// A derived credential plus the number of rehash rounds it took.
///
/// `Debug` is manually implemented to mask the credential.
#[derive(Clone, PartialEq, Eq)]
pub struct DerivedCredential {
    /// The credential. Hand to the caller for display; never persist it.
    pub value: String,
    /// Rehash rounds performed after the initial digest.
    pub rehash_rounds: usize,
}

impl std::fmt::Debug for DerivedCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedCredential")
            .field("value", &"***")
            .field("rehash_rounds", &self.rehash_rounds)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Derive the credential for `site_id` from `secret`.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidArgument`] if the credential length is not
/// 8, 12 or 16, and [`CryptoError::DerivationDiverged`] if the constraint
/// search exceeds [`MAX_REHASH_ROUNDS`].
pub fn derive_credential(
    secret: &str,
    site_id: &str,
    settings: &DerivationSettings,
) -> Result<String, CryptoError> {
    derive(secret, site_id, settings).map(|derived| derived.value)
}

/// Like [`derive_credential`], also reporting how many rehash rounds were
/// needed to satisfy the enabled classes.
///
/// Hex-dump mode (no class enabled) never rehashes.
///
/// # Errors
///
/// Same as [`derive_credential`].
pub fn derive(
    secret: &str,
    site_id: &str,
    settings: &DerivationSettings,
) -> Result<DerivedCredential, CryptoError> {
    let width = settings.hash_width()?;
    let alphabet = Alphabet::from_settings(settings);

    let mut seed = Zeroizing::new(String::new());
    seed.push_str(secret);
    seed.push_str(site_id);

    let mut candidate = Zeroizing::new(digest_to_string(
        width,
        seed.as_bytes(),
        alphabet.as_ref(),
    ));

    let Some(alphabet) = alphabet else {
        debug!(bits = width.bits(), "derived hex-dump credential");
        return Ok(DerivedCredential {
            value: std::mem::take(&mut *candidate),
            rehash_rounds: 0,
        });
    };

    let mut rounds = 0usize;
    loop {
        let missing = alphabet.missing_classes(&candidate);
        if missing.is_empty() {
            break;
        }
        if rounds >= MAX_REHASH_ROUNDS {
            return Err(CryptoError::DerivationDiverged { rounds });
        }
        debug!(
            round = rounds,
            missing = ?missing.iter().copied().map(CharClass::name).collect::<Vec<_>>(),
            "candidate lacks enabled classes, rehashing"
        );
        // Reassignment drops (and zeroizes) the previous candidate.
        candidate = Zeroizing::new(digest_to_string(
            width,
            candidate.as_bytes(),
            Some(&alphabet),
        ));
        rounds = rounds.saturating_add(1);
    }

    debug!(
        bits = width.bits(),
        rehash_rounds = rounds,
        "derived credential"
    );

    Ok(DerivedCredential {
        value: std::mem::take(&mut *candidate),
        rehash_rounds: rounds,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const fn settings(
        length: usize,
        lower: bool,
        upper: bool,
        number: bool,
        symbol: bool,
    ) -> DerivationSettings {
        DerivationSettings {
            credential_length: length,
            include_lowercase: lower,
            include_uppercase: upper,
            include_number: number,
            include_symbol: symbol,
        }
    }

    #[test]
    fn default_settings() {
        let s = DerivationSettings::default();
        assert_eq!(s.credential_length, 12);
        assert_eq!(s.enabled_classes(), CharClass::ALL.to_vec());
        assert!(!s.is_hex_mode());
    }

    #[test]
    fn unsupported_lengths_rejected() {
        for length in [0, 7, 9, 10, 20, 32] {
            let err = derive_credential("pw", "site", &settings(length, true, true, true, true))
                .unwrap_err();
            assert!(matches!(err, CryptoError::InvalidArgument(_)), "{length}: {err}");
        }
    }

    #[test]
    fn output_length_matches_setting() {
        for length in SUPPORTED_CREDENTIAL_LENGTHS {
            let s = settings(length, true, true, true, true);
            let pw = derive_credential("hunter2", "example.org", &s).unwrap();
            assert_eq!(pw.chars().count(), length);
        }
    }

    #[test]
    fn deterministic() {
        let s = DerivationSettings::default();
        let a = derive_credential("hunter2", "example.org", &s).unwrap();
        let b = derive_credential("hunter2", "example.org", &s).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn concatenation_collision_is_accepted() {
        let s = DerivationSettings::default();
        assert_eq!(
            derive_credential("ab", "c", &s).unwrap(),
            derive_credential("a", "bc", &s).unwrap()
        );
    }

    #[test]
    fn distinct_sites_give_distinct_credentials() {
        let s = DerivationSettings::default();
        let outputs: HashSet<String> = (0..100)
            .map(|i| derive_credential("hunter2", &format!("site{i}.example"), &s).unwrap())
            .collect();
        assert_eq!(outputs.len(), 100);
    }

    #[test]
    fn known_answer_with_one_rehash() {
        // The first digest `rW`z/uL^` has no digit, so one rehash is needed.
        let derived = derive("correcthorse", "example.com", &settings(8, true, true, true, true))
            .unwrap();
        assert_eq!(derived.value, "4?h=)3vT");
        assert_eq!(derived.rehash_rounds, 1);
    }

    #[test]
    fn hex_mode_returns_without_rehash() {
        let hex_mode = settings(8, false, false, false, false);
        let derived = derive("correcthorse", "example.com", &hex_mode).unwrap();
        assert_eq!(
            derived.value,
            "4fcc8ad7 3ee63a76 06bc977b d09680cf 9f0260b6 282bda0a c53f2bc5 84f91b3b"
        );
        assert_eq!(derived.rehash_rounds, 0);
    }

    #[test]
    fn single_class_outputs_stay_in_class() {
        let lowercase_only = settings(12, true, false, false, false);
        let lower = derive_credential("correcthorse", "example.com", &lowercase_only).unwrap();
        assert_eq!(lower, "adyolkgljxyw");

        let digits_only = settings(12, false, false, true, false);
        let digits = derive_credential("correcthorse", "example.com", &digits_only).unwrap();
        assert_eq!(digits, "496010011166");
    }

    #[test]
    fn debug_masks_value() {
        let derived = derive("pw", "site", &DerivationSettings::default()).unwrap();
        let debug = format!("{derived:?}");
        assert!(!debug.contains(&derived.value));
        assert!(debug.contains("***"));
    }

    #[test]
    fn settings_serde_uses_camel_case() {
        let json = serde_json::to_string(&DerivationSettings::default()).unwrap();
        assert!(json.contains("credentialLength"));
        assert!(json.contains("includeSymbol"));
        let back: DerivationSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DerivationSettings::default());
    }
}
