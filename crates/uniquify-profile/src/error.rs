//! Profile error types for `uniquify-profile`.

use thiserror::Error;
use uniquify_crypto_core::CryptoError;

/// Errors produced by profile storage and lifecycle operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Derivation or hashing failed (delegated from crypto-core).
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// A master secret is required but none was entered.
    #[error("master secret must not be empty")]
    EmptySecret,

    /// A site identifier is required but none was entered.
    #[error("site must not be empty")]
    EmptySite,

    /// The master secret and its confirmation differ.
    #[error("master secret and confirmation do not match")]
    SecretMismatch,

    /// The store backend rejected an operation.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store contents could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
