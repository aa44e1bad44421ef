//! Persisted profile layout: derivation settings plus the master-secret
//! record, flattened onto string keys.
//!
//! The key names are the storage format and must not change.

use tracing::warn;
use uniquify_crypto_core::{DerivationSettings, MasterSecretRecord};

use crate::error::ProfileError;
use crate::store::{ExternalStore, StoreItems, StoreValue};

// ── Keys ───────────────────────────────────────────────────────────

/// Credential length (8, 12 or 16).
pub const KEY_LENGTH: &str = "pwLength";
/// Include lowercase letters.
pub const KEY_LOWERCASE: &str = "lowercase";
/// Include uppercase letters.
pub const KEY_UPPERCASE: &str = "uppercase";
/// Include digits.
pub const KEY_NUMBER: &str = "number";
/// Include symbols.
pub const KEY_SYMBOL: &str = "symbol";
/// Stored master-secret hash or sentinel.
pub const KEY_MASTER_HASH: &str = "masterHash";
/// Stored master-secret salt or sentinel.
pub const KEY_MASTER_SALT: &str = "masterSalt";
/// Whether the master secret is remembered.
pub const KEY_REMEMBER: &str = "rememberPassword";

// ── Profile ────────────────────────────────────────────────────────

/// Everything the profile persists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileSettings {
    /// Settings applied to every derivation.
    pub derivation: DerivationSettings,
    /// Master-secret verification data.
    pub record: MasterSecretRecord,
}

impl ProfileSettings {
    /// Read the profile from `store`, using defaults for missing keys.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn load(store: &dyn ExternalStore) -> Result<Self, ProfileError> {
        let items = store.get(&Self::default().to_items())?;
        Ok(Self::from_items(&items))
    }

    /// Write every profile key to `store`.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn save(&self, store: &mut dyn ExternalStore) -> Result<(), ProfileError> {
        store.set(&self.to_items())
    }

    /// Flatten onto storage keys.
    #[must_use]
    pub fn to_items(&self) -> StoreItems {
        let mut items = derivation_items(&self.derivation);
        items.insert(
            KEY_MASTER_HASH.to_owned(),
            StoreValue::from(self.record.stored_hash.as_str()),
        );
        items.insert(
            KEY_MASTER_SALT.to_owned(),
            StoreValue::from(self.record.stored_salt.as_str()),
        );
        items.insert(KEY_REMEMBER.to_owned(), StoreValue::Bool(self.record.remember));
        items
    }

    /// Rebuild from storage keys. Missing or ill-typed values fall back to
    /// their defaults.
    #[must_use]
    pub fn from_items(items: &StoreItems) -> Self {
        let defaults = Self::default();
        let d = defaults.derivation;
        let r = defaults.record;

        let derivation = DerivationSettings {
            credential_length: read_length(items, d.credential_length),
            include_lowercase: read_bool(items, KEY_LOWERCASE, d.include_lowercase),
            include_uppercase: read_bool(items, KEY_UPPERCASE, d.include_uppercase),
            include_number: read_bool(items, KEY_NUMBER, d.include_number),
            include_symbol: read_bool(items, KEY_SYMBOL, d.include_symbol),
        };

        let record = MasterSecretRecord {
            stored_hash: read_text(items, KEY_MASTER_HASH, r.stored_hash),
            stored_salt: read_text(items, KEY_MASTER_SALT, r.stored_salt),
            remember: read_bool(items, KEY_REMEMBER, r.remember),
        };

        Self { derivation, record }
    }
}

/// Storage keys for the derivation settings alone.
#[must_use]
pub fn derivation_items(settings: &DerivationSettings) -> StoreItems {
    let length = i64::try_from(settings.credential_length).unwrap_or(i64::MAX);
    [
        (KEY_LENGTH, StoreValue::Int(length)),
        (KEY_LOWERCASE, StoreValue::Bool(settings.include_lowercase)),
        (KEY_UPPERCASE, StoreValue::Bool(settings.include_uppercase)),
        (KEY_NUMBER, StoreValue::Bool(settings.include_number)),
        (KEY_SYMBOL, StoreValue::Bool(settings.include_symbol)),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v))
    .collect()
}

// ── Typed reads ────────────────────────────────────────────────────

fn read_length(items: &StoreItems, default: usize) -> usize {
    match items.get(KEY_LENGTH) {
        None => default,
        Some(value) => value
            .as_int()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or_else(|| {
                warn!(key = KEY_LENGTH, %value, "ill-typed setting, using default");
                default
            }),
    }
}

fn read_bool(items: &StoreItems, key: &str, default: bool) -> bool {
    match items.get(key) {
        None => default,
        Some(value) => value.as_bool().unwrap_or_else(|| {
            warn!(key, %value, "ill-typed setting, using default");
            default
        }),
    }
}

fn read_text(items: &StoreItems, key: &str, default: String) -> String {
    match items.get(key) {
        None => default,
        Some(StoreValue::Text(s)) => s.clone(),
        // Numeric- or boolean-looking text coerced by a string backend.
        Some(other) => other.to_string(),
    }
}
