//! Profile lifecycle: set, remember, forget and verify the master secret,
//! and generate site credentials with the stored settings.
//!
//! Every operation takes the store explicitly; there is no process-wide
//! profile state. Secrets, salts, hashes and credentials are never logged.

use serde::{Deserialize, Serialize};
use tracing::info;
use uniquify_crypto_core::{derivation, master, DerivationSettings, MasterSecretRecord};

use crate::error::ProfileError;
use crate::settings::{derivation_items, ProfileSettings};
use crate::store::ExternalStore;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// What the profile holds, as seen on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileStatus {
    /// No master secret was ever set; first-time setup is needed.
    Unset,
    /// A master secret hash is stored and can be verified against.
    Remembered,
    /// The user chose not to have the master secret remembered.
    NotRemembered,
}

/// Outcome of checking a master secret against the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Verification {
    /// The secret matches the stored hash.
    Verified,
    /// Every pepper was tried and none matched.
    Rejected,
    /// No stored hash to check against.
    NotRemembered,
}

/// A credential generated for a site, with the verification outcome of the
/// master secret it was derived from.
///
/// `Debug` is manually implemented to mask the credential.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedCredential {
    /// The derived credential.
    pub value: String,
    /// Whether the master secret matched the stored one.
    pub verification: Verification,
}

impl std::fmt::Debug for GeneratedCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedCredential")
            .field("value", &"***")
            .field("verification", &self.verification)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Determine what the profile in `store` holds.
///
/// # Errors
///
/// Propagates store failures.
pub fn profile_status(store: &dyn ExternalStore) -> Result<ProfileStatus, ProfileError> {
    let record = ProfileSettings::load(store)?.record;
    Ok(status_of(&record))
}

fn status_of(record: &MasterSecretRecord) -> ProfileStatus {
    if record.is_unset() {
        ProfileStatus::Unset
    } else if record.remember {
        ProfileStatus::Remembered
    } else {
        ProfileStatus::NotRemembered
    }
}

// ---------------------------------------------------------------------------
// Master secret
// ---------------------------------------------------------------------------

/// Hash `secret` under a fresh salt and pepper and persist the record along
/// with the current settings.
///
/// # Errors
///
/// Returns [`ProfileError::Crypto`] if the CSPRNG fails, or a store error.
pub fn store_master_secret(
    secret: &str,
    store: &mut dyn ExternalStore,
) -> Result<(), ProfileError> {
    let mut profile = ProfileSettings::load(&*store)?;
    profile.record = master::seal_master_secret(secret)?;
    profile.save(store)?;
    info!(backend = %store.backend(), "master secret stored");
    Ok(())
}

/// Replace the stored hash and salt with the "do not remember" markers.
///
/// # Errors
///
/// Propagates store failures.
pub fn clear_master_secret(store: &mut dyn ExternalStore) -> Result<(), ProfileError> {
    let mut profile = ProfileSettings::load(&*store)?;
    profile.record = MasterSecretRecord::cleared();
    profile.save(store)?;
    info!(backend = %store.backend(), "master secret cleared");
    Ok(())
}

/// Set a new master secret from a secret and its confirmation.
///
/// When `remember` is set the secret is stored; otherwise any stored hash is
/// cleared.
///
/// # Errors
///
/// Returns [`ProfileError::EmptySecret`] if either entry is empty,
/// [`ProfileError::SecretMismatch`] if they differ, and otherwise the errors
/// of [`store_master_secret`] / [`clear_master_secret`].
pub fn set_master_secret(
    secret: &str,
    confirmation: &str,
    remember: bool,
    store: &mut dyn ExternalStore,
) -> Result<(), ProfileError> {
    if secret.is_empty() || confirmation.is_empty() {
        return Err(ProfileError::EmptySecret);
    }
    if secret != confirmation {
        return Err(ProfileError::SecretMismatch);
    }
    if remember {
        store_master_secret(secret, store)
    } else {
        clear_master_secret(store)
    }
}

/// Check `candidate` against the stored record.
///
/// # Errors
///
/// Propagates store failures. A wrong secret is [`Verification::Rejected`],
/// not an error.
pub fn verify_master_secret(
    candidate: &str,
    store: &dyn ExternalStore,
) -> Result<Verification, ProfileError> {
    let record = ProfileSettings::load(store)?.record;
    Ok(verify_against(candidate, &record))
}

fn verify_against(candidate: &str, record: &MasterSecretRecord) -> Verification {
    if !record.is_stored() {
        return Verification::NotRemembered;
    }
    if master::verify_master_secret(candidate, record) {
        Verification::Verified
    } else {
        Verification::Rejected
    }
}

// ---------------------------------------------------------------------------
// Credentials and settings
// ---------------------------------------------------------------------------

/// Derive the credential for `site` using the stored settings.
///
/// The credential is derived whatever the verification outcome; the caller
/// decides how to present a rejected secret.
///
/// # Errors
///
/// Returns [`ProfileError::EmptySecret`] / [`ProfileError::EmptySite`] on
/// empty input, [`ProfileError::Crypto`] if the stored length is invalid, or
/// a store error.
pub fn generate_site_credential(
    secret: &str,
    site: &str,
    store: &dyn ExternalStore,
) -> Result<GeneratedCredential, ProfileError> {
    if secret.is_empty() {
        return Err(ProfileError::EmptySecret);
    }
    if site.is_empty() {
        return Err(ProfileError::EmptySite);
    }

    let profile = ProfileSettings::load(store)?;
    let verification = verify_against(secret, &profile.record);
    let value = derivation::derive_credential(secret, site, &profile.derivation)?;

    Ok(GeneratedCredential {
        value,
        verification,
    })
}

/// Load the stored derivation settings.
///
/// # Errors
///
/// Propagates store failures.
pub fn derivation_settings(store: &dyn ExternalStore) -> Result<DerivationSettings, ProfileError> {
    Ok(ProfileSettings::load(store)?.derivation)
}

/// Persist new derivation settings, leaving the master-secret record alone.
///
/// # Errors
///
/// Returns [`ProfileError::Crypto`] with an invalid-argument cause if the
/// length is not 8, 12 or 16, or a store error.
pub fn update_derivation_settings(
    store: &mut dyn ExternalStore,
    settings: &DerivationSettings,
) -> Result<(), ProfileError> {
    settings.hash_width()?;
    store.set(&derivation_items(settings))?;
    info!(
        length = settings.credential_length,
        lowercase = settings.include_lowercase,
        uppercase = settings.include_uppercase,
        number = settings.include_number,
        symbol = settings.include_symbol,
        "derivation settings updated"
    );
    Ok(())
}

/// Wipe the whole profile; the next start is a first run.
///
/// # Errors
///
/// Propagates store failures.
pub fn reset_profile(store: &mut dyn ExternalStore) -> Result<(), ProfileError> {
    store.clear()?;
    info!(backend = %store.backend(), "profile reset");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{KEY_MASTER_HASH, KEY_REMEMBER};
    use crate::store::{LocalStore, StoreValue, TypedStore};
    use uniquify_crypto_core::{CryptoError, CLEARED_MARKER};

    #[test]
    fn fresh_profile_is_unset() {
        let store = TypedStore::in_memory();
        assert_eq!(profile_status(&store).unwrap(), ProfileStatus::Unset);
        assert_eq!(
            verify_master_secret("anything", &store).unwrap(),
            Verification::NotRemembered
        );
    }

    #[test]
    fn store_then_verify() {
        let mut store = TypedStore::in_memory();
        store_master_secret("hunter2", &mut store).unwrap();
        assert_eq!(profile_status(&store).unwrap(), ProfileStatus::Remembered);
        assert_eq!(
            verify_master_secret("hunter2", &store).unwrap(),
            Verification::Verified
        );
        assert_eq!(
            verify_master_secret("hunter3", &store).unwrap(),
            Verification::Rejected
        );
    }

    #[test]
    fn clear_marks_not_remembered() {
        let mut store = TypedStore::in_memory();
        store_master_secret("hunter2", &mut store).unwrap();
        clear_master_secret(&mut store).unwrap();

        let items = store.get_all().unwrap();
        assert_eq!(items[KEY_REMEMBER], StoreValue::Bool(false));
        assert_eq!(items[KEY_MASTER_HASH], StoreValue::from(CLEARED_MARKER));
        assert_eq!(profile_status(&store).unwrap(), ProfileStatus::NotRemembered);
        assert_eq!(
            verify_master_secret("hunter2", &store).unwrap(),
            Verification::NotRemembered
        );
    }

    #[test]
    fn set_master_secret_validates_entries() {
        let mut store = TypedStore::in_memory();
        assert!(matches!(
            set_master_secret("", "", true, &mut store),
            Err(ProfileError::EmptySecret)
        ));
        assert!(matches!(
            set_master_secret("a", "", true, &mut store),
            Err(ProfileError::EmptySecret)
        ));
        assert!(matches!(
            set_master_secret("a", "b", true, &mut store),
            Err(ProfileError::SecretMismatch)
        ));
        // Nothing was written.
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn set_master_secret_without_remember_clears() {
        let mut store = TypedStore::in_memory();
        set_master_secret("pw", "pw", true, &mut store).unwrap();
        assert_eq!(profile_status(&store).unwrap(), ProfileStatus::Remembered);
        set_master_secret("pw", "pw", false, &mut store).unwrap();
        assert_eq!(profile_status(&store).unwrap(), ProfileStatus::NotRemembered);
    }

    #[test]
    fn generate_derives_even_when_rejected() {
        let mut store = TypedStore::in_memory();
        store_master_secret("right", &mut store).unwrap();

        let good = generate_site_credential("right", "example.com", &store).unwrap();
        let bad = generate_site_credential("wrong", "example.com", &store).unwrap();
        assert_eq!(good.verification, Verification::Verified);
        assert_eq!(bad.verification, Verification::Rejected);
        assert_eq!(good.value.len(), 12);
        assert_eq!(bad.value.len(), 12);
        assert_ne!(good.value, bad.value);
    }

    #[test]
    fn generate_rejects_empty_input() {
        let store = TypedStore::in_memory();
        assert!(matches!(
            generate_site_credential("", "site", &store),
            Err(ProfileError::EmptySecret)
        ));
        assert!(matches!(
            generate_site_credential("pw", "", &store),
            Err(ProfileError::EmptySite)
        ));
    }

    #[test]
    fn generate_uses_stored_settings() {
        let mut store = LocalStore::in_memory();
        let settings = DerivationSettings {
            credential_length: 8,
            ..DerivationSettings::default()
        };
        update_derivation_settings(&mut store, &settings).unwrap();
        let generated = generate_site_credential("correcthorse", "example.com", &store).unwrap();
        assert_eq!(generated.value, "4?h=)3vT");
        assert_eq!(generated.verification, Verification::NotRemembered);
    }

    #[test]
    fn update_rejects_bad_length_and_keeps_record() {
        let mut store = TypedStore::in_memory();
        store_master_secret("pw", &mut store).unwrap();
        let bad = DerivationSettings {
            credential_length: 10,
            ..DerivationSettings::default()
        };
        let err = update_derivation_settings(&mut store, &bad).unwrap_err();
        assert!(matches!(err, ProfileError::Crypto(CryptoError::InvalidArgument(_))));

        let good = DerivationSettings {
            credential_length: 16,
            include_symbol: false,
            ..DerivationSettings::default()
        };
        update_derivation_settings(&mut store, &good).unwrap();
        assert_eq!(derivation_settings(&store).unwrap(), good);
        assert_eq!(
            verify_master_secret("pw", &store).unwrap(),
            Verification::Verified
        );
    }

    #[test]
    fn reset_returns_to_first_run() {
        let mut store = TypedStore::in_memory();
        store_master_secret("pw", &mut store).unwrap();
        reset_profile(&mut store).unwrap();
        assert_eq!(profile_status(&store).unwrap(), ProfileStatus::Unset);
    }

    #[test]
    fn debug_masks_credential() {
        let store = TypedStore::in_memory();
        let generated = generate_site_credential("pw", "site", &store).unwrap();
        assert!(format!("{generated:?}").contains("***"));
    }
}
