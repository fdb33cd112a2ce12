//! Property-based tests for the associative value function

use proptest::prelude::*;
use smcrypt_kex::sm2::associative_value;

proptest! {
    #[test]
    fn avf_keeps_low_127_bits(x in any::<[u8; 32]>()) {
        let v = associative_value(&x);
        prop_assert_eq!(&v[17..], &x[17..]);
        prop_assert_eq!(v[16] & 0x7f, x[16] & 0x7f);
    }

    #[test]
    fn avf_sets_bit_127_and_clears_everything_above(x in any::<[u8; 32]>()) {
        let v = associative_value(&x);
        prop_assert_eq!(&v[..16], &[0u8; 16][..]);
        prop_assert_eq!(v[16] & 0x80, 0x80);
    }

    #[test]
    fn avf_is_idempotent(x in any::<[u8; 32]>()) {
        let once = associative_value(&x);
        prop_assert_eq!(associative_value(&once), once);
    }

    #[test]
    fn avf_ignores_high_bits(x in any::<[u8; 32]>(), high in any::<[u8; 16]>(), top in any::<bool>()) {
        let mut y = x;
        y[..16].copy_from_slice(&high);
        y[16] = (x[16] & 0x7f) | if top { 0x80 } else { 0 };
        prop_assert_eq!(associative_value(&x), associative_value(&y));
    }
}
