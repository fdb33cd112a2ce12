//! SM2 key exchange driven through the public API with recorded vectors

use smcrypt_algorithms::ec::sm2::Point;
use smcrypt_api::{AuthenticatedKeyExchange, Error as ApiError, Result as ApiResult};
use smcrypt_kex::sm2::{identity_digest, ExchangeConfig, KeyExchange, Sm2PrivateKey, State};
use smcrypt_kex::{Error, EphemeralPublicKey};
use smcrypt_tests::vectors::{load_sm2_kex, ExchangeVector};
use smcrypt_tests::{hex32, ReplayRng};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn configs(v: &ExchangeVector) -> (ExchangeConfig, ExchangeConfig) {
    let a = ExchangeConfig::default()
        .with_key_len(v.key_len)
        .with_uid(v.initiator.uid.as_bytes())
        .with_peer_uid(v.responder.uid.as_bytes());
    let b = ExchangeConfig::default()
        .with_key_len(v.key_len)
        .with_uid(v.responder.uid.as_bytes())
        .with_peer_uid(v.initiator.uid.as_bytes());
    (a, b)
}

#[test]
fn test_exchange_vectors() {
    let vectors = load_sm2_kex().unwrap();
    assert!(!vectors.exchanges.is_empty());

    for v in &vectors.exchanges {
        let alice = Sm2PrivateKey::from_bytes(&hex32(&v.initiator.private_key)).unwrap();
        let bob = Sm2PrivateKey::from_bytes(&hex32(&v.responder.private_key)).unwrap();
        let (config_a, config_b) = configs(v);

        let za = identity_digest(alice.public_key().as_point(), v.initiator.uid.as_bytes()).unwrap();
        let zb = identity_digest(bob.public_key().as_point(), v.responder.uid.as_bytes()).unwrap();
        assert_eq!(hex::encode(za.as_ref()), v.initiator.z, "{}: Z_A", v.name);
        assert_eq!(hex::encode(zb.as_ref()), v.responder.z, "{}: Z_B", v.name);

        let mut rng_a = ReplayRng::new([hex32(&v.initiator.ephemeral_scalar)]);
        let mut rng_b = ReplayRng::new([hex32(&v.responder.ephemeral_scalar)]);

        let mut a = KeyExchange::new(&alice, Some(bob.public_key()), &config_a).unwrap();
        let mut b = KeyExchange::new(&bob, Some(alice.public_key()), &config_b).unwrap();

        let ra = a.initiate(&mut rng_a).unwrap();
        assert_eq!(hex::encode(ra.as_bytes()), v.initiator.ephemeral_point, "{}: R_A", v.name);

        let (rb, sb) = b.respond(&mut rng_b, &ra).unwrap();
        assert_eq!(hex::encode(rb.as_bytes()), v.responder.ephemeral_point, "{}: R_B", v.name);
        let sb = sb.unwrap();
        assert_eq!(sb.to_hex(), v.responder_tag, "{}: S_B", v.name);

        let (key_a, sa) = a.confirm_responder(&rb, Some(sb.as_ref())).unwrap();
        let sa = sa.unwrap();
        assert_eq!(sa.to_hex(), v.initiator_tag, "{}: S_A", v.name);
        assert_eq!(hex::encode(key_a.as_ref()), v.shared_key, "{}: K", v.name);

        let key_b = b.confirm_initiator(Some(sa.as_ref())).unwrap();
        assert_eq!(key_a, key_b, "{}", v.name);

        assert_eq!(rng_a.remaining(), 0);
        assert_eq!(rng_b.remaining(), 0);
    }
}

#[test]
fn test_identity_vectors() {
    let vectors = load_sm2_kex().unwrap();
    for v in &vectors.identities {
        let encoded = hex::decode(&v.public_key).unwrap();
        let point = Point::deserialize_uncompressed(&encoded).unwrap();
        let z = identity_digest(&point, v.uid.as_bytes()).unwrap();
        assert_eq!(hex::encode(z.as_ref()), v.z, "uid {:?}", v.uid);
    }
}

#[test]
fn test_longer_keys_extend_shorter_ones() {
    let vectors = load_sm2_kex().unwrap();
    let short = vectors
        .exchanges
        .iter()
        .find(|v| v.name == "default identifiers")
        .unwrap();
    let long = vectors.exchanges.iter().find(|v| v.name == "long key").unwrap();
    assert!(long.shared_key.starts_with(&short.shared_key));
    assert_eq!(short.responder_tag, long.responder_tag);
}

/// Run one exchange through the trait only
fn run_generic<K: AuthenticatedKeyExchange>(
    rng: &mut ChaCha20Rng,
    initiator: &mut K,
    responder: &mut K,
) -> ApiResult<(K::SharedSecret, K::SharedSecret)> {
    let ra = initiator.initiate(rng)?;
    let (rb, sb) = responder.respond(rng, &ra)?;
    let (key_a, sa) = initiator.confirm_responder(&rb, sb.as_ref().map(|t| t.as_ref()))?;
    let key_b = responder.confirm_initiator(sa.as_ref().map(|t| t.as_ref()))?;
    Ok((key_a, key_b))
}

#[test]
fn test_trait_driven_exchange() -> ApiResult<()> {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let alice = Sm2PrivateKey::generate(&mut rng).unwrap();
    let bob = Sm2PrivateKey::generate(&mut rng).unwrap();
    let config = ExchangeConfig::default().with_key_len(64);

    let mut a = KeyExchange::new(&alice, Some(bob.public_key()), &config).unwrap();
    let mut b = KeyExchange::new(&bob, Some(alice.public_key()), &config).unwrap();
    let (key_a, key_b) = run_generic(&mut rng, &mut a, &mut b)?;

    assert_eq!(<KeyExchange<'_> as AuthenticatedKeyExchange>::name(), "SM2-KEX");
    assert_eq!(key_a.as_ref(), key_b.as_ref());
    assert_eq!(key_a.len(), 64);
    Ok(())
}

#[test]
fn test_trait_errors_map_to_api_errors() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let alice = Sm2PrivateKey::generate(&mut rng).unwrap();
    let bob = Sm2PrivateKey::generate(&mut rng).unwrap();
    let config = ExchangeConfig::default();

    let mut a = KeyExchange::new(&alice, Some(bob.public_key()), &config).unwrap();
    let mut b = KeyExchange::new(&bob, Some(alice.public_key()), &config).unwrap();

    let ra = AuthenticatedKeyExchange::initiate(&mut a, &mut rng).unwrap();
    let (rb, _) = AuthenticatedKeyExchange::respond(&mut b, &mut rng, &ra).unwrap();

    let err = AuthenticatedKeyExchange::confirm_responder(&mut a, &rb, Some(&[0u8; 32])).unwrap_err();
    assert!(matches!(err, ApiError::AuthenticationFailed { .. }));
    assert_eq!(err.context(), "SM2 key confirmation");
    assert_eq!(a.state(), State::Failed);

    let mut off_curve = [0u8; 65];
    off_curve[0] = 0x04;
    off_curve[1] = 0x01;
    let mut c = KeyExchange::new(&bob, Some(alice.public_key()), &config).unwrap();
    let bad = EphemeralPublicKey::from_bytes(&off_curve).unwrap();
    let err = AuthenticatedKeyExchange::respond(&mut c, &mut rng, &bad).unwrap_err();
    assert!(matches!(err, ApiError::InvalidKey { .. }));

    AuthenticatedKeyExchange::destroy(&mut b);
    assert_eq!(b.state(), State::Failed);
    assert!(matches!(
        b.confirm_initiator(None),
        Err(Error::InvalidState { .. })
    ));
}

#[test]
fn test_many_sessions_derive_distinct_keys() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let alice = Sm2PrivateKey::generate(&mut rng).unwrap();
    let bob = Sm2PrivateKey::generate(&mut rng).unwrap();
    let config = ExchangeConfig::default();

    let mut keys = Vec::new();
    for _ in 0..8 {
        let mut a = KeyExchange::new(&alice, Some(bob.public_key()), &config).unwrap();
        let mut b = KeyExchange::new(&bob, Some(alice.public_key()), &config).unwrap();
        let (key_a, key_b) = run_generic(&mut rng, &mut a, &mut b).unwrap();
        assert_eq!(key_a, key_b);
        keys.push(key_a);
    }
    for i in 0..keys.len() {
        for j in i + 1..keys.len() {
            assert_ne!(keys[i], keys[j], "sessions {} and {} agreed on the same key", i, j);
        }
    }
}

#[test]
fn test_config_serde() {
    let config = ExchangeConfig::default()
        .with_key_len(48)
        .with_uid(b"ALICE123@YAHOO.COM");
    let json = serde_json::to_string(&config).unwrap();
    let parsed: ExchangeConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);

    let partial: ExchangeConfig = serde_json::from_str(r#"{"key_len": 32}"#).unwrap();
    assert_eq!(partial.key_len, 32);
    assert!(partial.confirmation);
    assert_eq!(partial.uid, b"1234567812345678");
}
