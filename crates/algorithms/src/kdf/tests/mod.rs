//! Known-answer tests for the hash-counter KDF

use crate::hash::{HashFunction, Sm3};
use crate::kdf::*;
use hex;

#[test]
fn test_sm3_kdf_known_answer() {
    let expected = "fe1ea80dac6f100c33537bd24619ec7c72a1e8b1ffeaefb1eb52a37791fdaf619db16c0ac7bebb47";

    let key = Sm3Kdf::derive(b"abc", 40).unwrap();
    assert_eq!(hex::encode(key.as_slice()), expected);
}

#[test]
fn test_sm3_kdf_first_block_is_hash_with_counter_one() {
    let key = Sm3Kdf::derive(b"abc", 32).unwrap();

    let mut input = b"abc".to_vec();
    input.extend_from_slice(&1u32.to_be_bytes());
    let block = Sm3::digest(&input).unwrap();
    assert_eq!(key.as_slice(), block.as_ref());
}

#[test]
fn test_sm3_kdf_prefix_property() {
    let z = b"shared point coordinates and identities";
    let long = Sm3Kdf::derive(z, 100).unwrap();
    for klen in [1usize, 16, 31, 32, 33, 64, 99] {
        let short = Sm3Kdf::derive(z, klen).unwrap();
        assert_eq!(short.as_slice(), &long.as_slice()[..klen]);
    }
}

#[test]
fn test_sm3_kdf_zero_length() {
    let key = Sm3Kdf::derive(b"abc", 0).unwrap();
    assert!(key.is_empty());

    let mut out = [0u8; 0];
    assert!(Sm3Kdf::derive_into(b"abc", &mut out).is_ok());
}

#[test]
fn test_sm3_kdf_derive_into_matches_derive() {
    let mut out = [0u8; 48];
    Sm3Kdf::derive_into(b"abc", &mut out).unwrap();
    assert_eq!(&out[..40], Sm3Kdf::derive(b"abc", 40).unwrap().as_slice());
}

#[test]
fn test_sm3_kdf_max_output_size() {
    assert_eq!(Sm3Kdf::max_output_size(), (u32::MAX as u64) * 32);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_sm3_kdf_rejects_oversized_request() {
    let too_long = (u32::MAX as usize) * 32 + 1;
    match Sm3Kdf::derive(b"abc", too_long) {
        Err(crate::error::Error::Processing { operation, .. }) => assert_eq!(operation, "SM3-KDF"),
        other => panic!("expected processing error, got {:?}", other.map(|k| k.len())),
    }
}
