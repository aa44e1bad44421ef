#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for master-secret sealing and verification.

use proptest::prelude::*;
use uniquify_crypto_core::{seal_master_secret, verify_master_secret, SALT_LEN};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// A sealed secret always verifies.
    #[test]
    fn sealed_secret_verifies(secret in "\\PC{1,48}") {
        let record = seal_master_secret(&secret).unwrap();
        prop_assert_eq!(record.stored_salt.len(), SALT_LEN);
        prop_assert!(verify_master_secret(&secret, &record));
    }

    /// A different secret never verifies.
    #[test]
    fn other_secret_rejected(secret in "[ -~]{1,32}", suffix in "[ -~]{1,4}") {
        let record = seal_master_secret(&secret).unwrap();
        let other = format!("{secret}{suffix}");
        prop_assert!(!verify_master_secret(&other, &record));
    }
}
