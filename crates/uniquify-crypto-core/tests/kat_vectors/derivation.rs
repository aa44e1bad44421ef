//! Derived-credential vectors for `correcthorse` on `example.com`.

use uniquify_crypto_core::{derive, derive_credential, DerivationSettings};

const SECRET: &str = "correcthorse";
const SITE: &str = "example.com";

const fn all_classes(length: usize) -> DerivationSettings {
    DerivationSettings {
        credential_length: length,
        include_lowercase: true,
        include_uppercase: true,
        include_number: true,
        include_symbol: true,
    }
}

#[test]
fn length_8_all_classes() {
    let settings = all_classes(8);
    let first = derive_credential(SECRET, SITE, &settings).unwrap();
    let second = derive_credential(SECRET, SITE, &settings).unwrap();
    assert_eq!(first, "4?h=)3vT");
    assert_eq!(first, second);
    assert!(first.chars().any(|c| c.is_ascii_lowercase()));
    assert!(first.chars().any(|c| c.is_ascii_uppercase()));
    assert!(first.chars().any(|c| c.is_ascii_digit()));
    assert!(first.chars().any(|c| c.is_ascii_punctuation()));
}

#[test]
fn length_12_default_settings() {
    let derived = derive(SECRET, SITE, &DerivationSettings::default()).unwrap();
    assert_eq!(derived.rehash_rounds, 0);
    insta::assert_snapshot!(derived.value, @"7ngEbE_hdV/9");
}

#[test]
fn length_16_all_classes() {
    let value = derive_credential(SECRET, SITE, &all_classes(16)).unwrap();
    insta::assert_snapshot!(value, @r#"vFu9w+F"K6[-DKLO"#);
}

#[test]
fn length_16_letters_only() {
    let settings = DerivationSettings {
        include_number: false,
        include_symbol: false,
        ..all_classes(16)
    };
    let value = derive_credential(SECRET, SITE, &settings).unwrap();
    assert_eq!(value, "nDSegUnngdwAxiVq");
}

#[test]
fn rehash_chain_for_other_secret() {
    // `pw2example.com` first maps to `oNv)b`wG`, which has no digit.
    let derived = derive("pw2", SITE, &all_classes(8)).unwrap();
    assert_eq!(derived.value, "~;zZK@23");
    assert_eq!(derived.rehash_rounds, 1);
}
