//! Error types for `uniquify-crypto-core`.

use thiserror::Error;

/// Errors produced by derivation and master-secret hashing.
///
/// An exhausted pepper search is not represented here: a master secret that
/// fails to verify is a `false` result, not a failure.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Caller supplied a parameter outside the supported domain
    /// (credential length, hash width).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The constraint search hit its round cap without producing a
    /// candidate that covers every enabled character class.
    #[error("derivation did not converge after {rounds} rehash rounds")]
    DerivationDiverged {
        /// Number of rehash rounds attempted.
        rounds: usize,
    },

    /// The OS CSPRNG failed while drawing a salt or pepper.
    #[error("random generation failed: {0}")]
    Random(String),
}
