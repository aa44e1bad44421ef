//! The pepper must be recoverable only by search, and the search must be
//! exhaustive.

use uniquify_crypto_core::{
    hash_master_secret, seal_master_secret, verify_master_secret, MasterSecretRecord,
};

/// A record sealed under every possible pepper still verifies, including the
/// last value the search reaches.
#[test]
fn every_pepper_value_is_reachable() {
    let salt = "s@lt-s@lt-s@lt-!";
    for pepper in 0..=u8::MAX {
        let record = MasterSecretRecord {
            stored_hash: hash_master_secret("secret", salt, pepper),
            stored_salt: salt.to_owned(),
            remember: true,
        };
        assert!(verify_master_secret("secret", &record), "pepper {pepper:02x}");
    }
}

/// Serializing a sealed record exposes only the hash, the salt and the flag.
#[test]
fn pepper_is_not_persisted() {
    let record = seal_master_secret("secret").unwrap();
    let value: serde_json::Value = serde_json::to_value(&record).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["remember", "storedHash", "storedSalt"]);
}

/// Verification against the same salt but a different secret is rejected
/// for every pepper the record could have been sealed with.
#[test]
fn wrong_secret_rejected_for_any_pepper() {
    let salt = "0123456789abcdef";
    for pepper in [0x00, 0x01, 0x7f, 0x80, 0xfe, 0xff] {
        let record = MasterSecretRecord {
            stored_hash: hash_master_secret("secret", salt, pepper),
            stored_salt: salt.to_owned(),
            remember: true,
        };
        assert!(!verify_master_secret("Secret", &record));
    }
}
