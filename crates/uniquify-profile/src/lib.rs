//! `uniquify-profile` — persisted profile and master-secret lifecycle.
//!
//! Settings and the master-secret record live in an [`store::ExternalStore`]
//! the caller opens; every lifecycle operation takes it explicitly.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod store;

pub mod settings;

pub mod lifecycle;

pub use error::ProfileError;
pub use lifecycle::{
    clear_master_secret, derivation_settings, generate_site_credential, profile_status,
    reset_profile, set_master_secret, store_master_secret, update_derivation_settings,
    verify_master_secret, GeneratedCredential, ProfileStatus, Verification,
};
pub use settings::ProfileSettings;
pub use store::{
    open_store, ExternalStore, LocalStore, StoreBackend, StoreItems, StoreValue, TypedStore,
};
