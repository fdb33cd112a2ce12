use super::*;
use hex;

#[test]
fn test_sm3_abc() {
    // GB/T 32905 example 1
    let expected = "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0";

    let hash = Sm3::digest(b"abc").unwrap();
    assert_eq!(hex::encode(hash.as_ref()), expected);
}

#[test]
fn test_sm3_two_blocks() {
    // GB/T 32905 example 2: "abcd" repeated 16 times
    let expected = "debe9ff92275b8a138604889c18e5a4d6fdb70e5387e5765293dcba39c0c5732";

    let input = b"abcd".repeat(16);
    let hash = Sm3::digest(&input).unwrap();
    assert_eq!(hex::encode(hash.as_ref()), expected);
}

#[test]
fn test_sm3_empty() {
    let expected = "1ab21d8355cfa17f8e61194831e81a8f22bec8c728fefb747ed035eb5082aa2b";

    let hash = Sm3::digest(&[]).unwrap();
    assert_eq!(hex::encode(hash.as_ref()), expected);
}

#[test]
fn test_sm3_incremental_matches_one_shot() {
    let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let expected = Sm3::digest(&data).unwrap();

    // Split points straddling the 56-byte padding boundary and block edges
    for split in [0usize, 1, 55, 56, 63, 64, 65, 127, 999] {
        let mut hasher = Sm3::new();
        hasher.update(&data[..split]).unwrap();
        hasher.update(&data[split..]).unwrap();
        assert_eq!(hasher.finalize().unwrap(), expected, "split at {}", split);
    }
}

#[test]
fn test_sm3_reset() {
    let mut hasher = Sm3::new();
    hasher.update(b"garbage").unwrap();
    hasher.reset();
    hasher.update(b"abc").unwrap();
    assert_eq!(hasher.finalize().unwrap(), Sm3::digest(b"abc").unwrap());
}

#[test]
fn test_sm3_metadata() {
    assert_eq!(Sm3::output_size(), 32);
    assert_eq!(Sm3::block_size(), 64);
    assert_eq!(Sm3::name(), "SM3");
}
