//! SHA-2 digest to character-string mapping.
//!
//! The digest is read as consecutive little-endian `u32` words. Each word
//! becomes one character of the alphabet or, in hex-dump mode, one
//! zero-padded 8-digit hex group.

use ring::digest;

use crate::alphabet::Alphabet;
use crate::error::CryptoError;
use crate::random::hex_pad;

/// Width of one hex group in hex-dump mode.
const HEX_WORD_DIGITS: usize = 8;

/// Separator between hex groups in hex-dump mode.
const HEX_WORD_SEPARATOR: &str = " ";

/// SHA-2 family member, selected by output width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashWidth {
    /// SHA-256, 8 words.
    Sha256,
    /// SHA-384, 12 words.
    Sha384,
    /// SHA-512, 16 words.
    Sha512,
}

impl HashWidth {
    /// Select the width from a bit count (256, 384 or 512).
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidArgument`] for any other bit count.
    pub fn from_bits(bits: usize) -> Result<Self, CryptoError> {
        match bits {
            256 => Ok(Self::Sha256),
            384 => Ok(Self::Sha384),
            512 => Ok(Self::Sha512),
            other => Err(CryptoError::InvalidArgument(format!(
                "hash width must be 256, 384 or 512 bits, got {other}"
            ))),
        }
    }

    /// Select the width that yields one character per word for a credential
    /// of `length` characters (`length * 32` bits).
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidArgument`] unless `length` is 8, 12 or 16.
    pub fn for_credential_length(length: usize) -> Result<Self, CryptoError> {
        match length {
            8 => Ok(Self::Sha256),
            12 => Ok(Self::Sha384),
            16 => Ok(Self::Sha512),
            other => Err(CryptoError::InvalidArgument(format!(
                "length must be 8, 12, or 16, got {other}"
            ))),
        }
    }

    /// Digest size in bits.
    #[must_use]
    pub const fn bits(self) -> usize {
        match self {
            Self::Sha256 => 256,
            Self::Sha384 => 384,
            Self::Sha512 => 512,
        }
    }

    /// Number of 32-bit words in the digest.
    #[must_use]
    pub const fn words(self) -> usize {
        match self {
            Self::Sha256 => 8,
            Self::Sha384 => 12,
            Self::Sha512 => 16,
        }
    }

    fn to_ring_algorithm(self) -> &'static digest::Algorithm {
        match self {
            Self::Sha256 => &digest::SHA256,
            Self::Sha384 => &digest::SHA384,
            Self::Sha512 => &digest::SHA512,
        }
    }
}

/// Hash `message` and split the digest into little-endian `u32` words.
#[must_use]
pub fn digest_words(width: HashWidth, message: &[u8]) -> Vec<u32> {
    let hash = digest::digest(width.to_ring_algorithm(), message);
    hash.as_ref()
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Hash `message` and render the digest as a string.
///
/// With an alphabet, each word `n` maps to `alphabet[n mod len]` and the
/// characters are concatenated, giving [`HashWidth::words`] characters.
/// Without one, each word is rendered as 8 lowercase hex digits and the
/// groups are joined by single spaces.
#[must_use]
pub fn digest_to_string(width: HashWidth, message: &[u8], alphabet: Option<&Alphabet>) -> String {
    let words = digest_words(width, message);
    match alphabet {
        Some(alphabet) => words.iter().map(|&w| alphabet.char_for_word(w)).collect(),
        None => words
            .iter()
            .map(|&w| hex_pad(w, HEX_WORD_DIGITS))
            .collect::<Vec<_>>()
            .join(HEX_WORD_SEPARATOR),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
