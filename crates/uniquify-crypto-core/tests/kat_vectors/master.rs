//! Master-secret hash vectors with fixed salt and pepper.

use uniquify_crypto_core::{hash_master_secret, verify_master_secret, MasterSecretRecord};

const SALT: &str = "0123456789abcdef";

const HUNTER2_PEPPER_00: &str = "0915383a 431c6429 aaf2d322 719e4ef0 e63ab79f c8d67792 \
     bfa30f07 f3537719 f21435ad 3891d15f 8d4f56ac 748a5c88 875b8012 23286c88 e67060a4 e46adfe5";

#[test]
fn hunter2_with_pepper_00() {
    assert_eq!(hash_master_secret("hunter2", SALT, 0x00), HUNTER2_PEPPER_00);
}

#[test]
fn stored_vector_verifies() {
    let record = MasterSecretRecord {
        stored_hash: HUNTER2_PEPPER_00.to_owned(),
        stored_salt: SALT.to_owned(),
        remember: true,
    };
    assert!(record.is_stored());
    assert!(verify_master_secret("hunter2", &record));
    assert!(!verify_master_secret("hunter3", &record));
}
