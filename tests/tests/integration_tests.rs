// Cross-crate checks of the shared building blocks

use smcrypt_algorithms::hash::{HashFunction, Sm3};
use smcrypt_algorithms::kdf::Sm3Kdf;
use smcrypt_api::{Key, SecretBytes, Serialize};
use smcrypt_common::security::{SecretVec, ZeroizeGuard};
use smcrypt_internal::constant_time::{ct_eq, ct_lt_be};
use smcrypt_kex::sm2::{Sm2PrivateKey, Sm2PublicKey};
use smcrypt_tests::hex32;

#[test]
fn test_constant_time_compare() {
    let a = [1u8, 2, 3, 4];
    let b = [1u8, 2, 3, 4];
    let c = [1u8, 2, 3, 5];

    assert!(ct_eq(a, b));
    assert!(!ct_eq(a, c));
    assert!(!ct_eq(&a[..], &a[..3]));
}

#[test]
fn test_private_key_range_matches_ct_compare() {
    let n = hex32("fffffffeffffffffffffffffffffffff7203df6b21c6052b53bbf40939d54123");
    let mut below = n;
    below[31] -= 1;
    assert!(bool::from(ct_lt_be(&below, &n)));
    assert!(Sm2PrivateKey::from_bytes(&below).is_ok());
    assert!(Sm2PrivateKey::from_bytes(&n).is_err());
}

#[test]
fn test_sm3_standard_vector() {
    let digest = Sm3::digest(b"abc").unwrap();
    assert_eq!(
        hex::encode(digest.as_ref()),
        "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"
    );
}

#[test]
fn test_kdf_output_is_secret_vec() {
    let out: SecretVec = Sm3Kdf::derive(b"shared secret input", 40).unwrap();
    assert_eq!(out.len(), 40);
    let shown = format!("{:?}", out);
    assert!(shown.contains("REDACTED"));
}

#[test]
fn test_public_key_through_serialize_trait() {
    let d = hex32("3945208f7b2144b13f36e38ac6d39f95889393692860b51a42fb81ef4df7c5b8");
    let key = Sm2PrivateKey::from_bytes(&d).unwrap();
    let bytes = Serialize::to_bytes(key.public_key());
    assert_eq!(bytes.len(), 65);
    assert_eq!(bytes[0], 0x04);
    assert_eq!(
        hex::encode(&bytes[1..33]),
        "09f9df311e5421a150dd7d161e4bc5c672179fad1833fc076bb08ff356f35020"
    );

    let parsed = <Sm2PublicKey as Serialize>::from_bytes(&bytes).unwrap();
    assert_eq!(&parsed, key.public_key());
    assert!(<Sm2PublicKey as Serialize>::from_bytes(&bytes[..33]).is_err());
}

#[test]
fn test_secret_containers() {
    let a = SecretBytes::<4>::new([1, 2, 3, 4]);
    assert_eq!(a, SecretBytes::<4>::from_slice(&[1, 2, 3, 4]).unwrap());
    assert_eq!(format!("{:?}", Key::new(&[7u8; 16])), "Key(len=16, [REDACTED])");

    let mut scratch = [0xAAu8; 8];
    {
        let guard = ZeroizeGuard::new(&mut scratch);
        assert_eq!(guard[0], 0xAA);
    }
    assert_eq!(scratch, [0u8; 8]);
}
