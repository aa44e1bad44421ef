//! Digest mapper vectors over the standard `abc` message.

use uniquify_crypto_core::{digest_to_string, digest_words, Alphabet, CharClass, HashWidth};

/// SHA-512("abc") as little-endian words, hex-dump mode.
#[test]
fn sha512_abc_hex_dump() {
    let out = digest_to_string(HashWidth::Sha512, b"abc", None);
    assert_eq!(
        out,
        "a135afdd ba7a6193 497341cc 314120ae 4efae612 a27ea989 e6ee9e0a 9ad3554b \
         2a999221 a8c14f27 233cba36 bdebfea3 23444d45 0ee83c64 4fc99a2a 9fa44ca5"
    );
}

/// SHA-256("abc") mapped onto the full 94-character alphabet.
#[test]
fn sha256_abc_full_alphabet() {
    let alphabet = Alphabet::new(&CharClass::ALL).unwrap();
    let out = digest_to_string(HashWidth::Sha256, b"abc", Some(&alphabet));
    assert_eq!(out, "'rb,)wE;");
}

/// The first SHA-256 word of "abc" is ba 78 16 bf read little-endian.
#[test]
fn sha256_abc_first_word() {
    let words = digest_words(HashWidth::Sha256, b"abc");
    assert_eq!(words[0], 0xbf16_78ba);
}
