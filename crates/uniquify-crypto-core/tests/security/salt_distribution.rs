//! Distribution checks for generated salts.
//!
//! 2000 salts of 16 characters give 32 000 draws over 94 symbols, about 340
//! per symbol. A symbol seen fewer than 200 or more than 500 times indicates
//! a biased or broken generator, not natural variance.

use uniquify_crypto_core::{random_printable, seal_master_secret, SALT_LEN};

#[test]
fn every_printable_character_appears_at_plausible_rate() {
    let mut counts = [0u32; 127];
    for _ in 0..2000 {
        for b in random_printable(SALT_LEN).unwrap().bytes() {
            counts[usize::from(b)] += 1;
        }
    }
    for (code, &count) in counts.iter().enumerate() {
        if (33..=126).contains(&code) {
            assert!(
                (200..=500).contains(&count),
                "character {code} appeared {count} times"
            );
        } else {
            assert_eq!(count, 0, "non-printable character {code} generated");
        }
    }
}

#[test]
fn salts_do_not_repeat() {
    let salts: std::collections::HashSet<String> = (0..500)
        .map(|_| seal_master_secret("same secret").unwrap().stored_salt)
        .collect();
    assert_eq!(salts.len(), 500);
}
