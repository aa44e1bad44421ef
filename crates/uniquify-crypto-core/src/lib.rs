//! `uniquify-crypto-core` — stateless credential derivation for uniquify.
//!
//! Zero I/O, zero async. Storage of the master-secret record is the
//! caller's concern (see `uniquify-profile`).

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod random;

pub mod alphabet;
pub mod digest;

pub mod derivation;

pub mod master;

pub use alphabet::{Alphabet, CharClass};
pub use derivation::{
    derive, derive_credential, DerivationSettings, DerivedCredential, DEFAULT_CREDENTIAL_LENGTH,
    MAX_REHASH_ROUNDS, SUPPORTED_CREDENTIAL_LENGTHS,
};
pub use digest::{digest_to_string, digest_words, HashWidth};
pub use error::CryptoError;
pub use master::{
    hash_master_secret, seal_master_secret, verify_master_secret, MasterSecretRecord,
    CLEARED_MARKER, PEPPER_HEX_DIGITS, PEPPER_SPACE, SALT_LEN, UNSET_HASH, UNSET_SALT,
};
pub use random::{hex_pad, random_byte, random_printable};
