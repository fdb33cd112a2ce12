//! Property-based tests for the SM2 key exchange

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use smcrypt_kex::sm2::{ExchangeConfig, KeyExchange, Sm2PrivateKey, State};
use smcrypt_kex::{Error, Role};
use smcrypt_tests::ReplayRng;

fn keys(seed: u64) -> (Sm2PrivateKey, Sm2PrivateKey, ChaCha20Rng) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let a = Sm2PrivateKey::generate(&mut rng).unwrap();
    let b = Sm2PrivateKey::generate(&mut rng).unwrap();
    (a, b, rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn both_sides_agree(
        seed in any::<u64>(),
        key_len in 1usize..=96,
        uid_a in prop::collection::vec(any::<u8>(), 0..64),
        uid_b in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let (alice, bob, mut rng) = keys(seed);
        let config_a = ExchangeConfig::default().with_key_len(key_len).with_uid(&uid_a).with_peer_uid(&uid_b);
        let config_b = ExchangeConfig::default().with_key_len(key_len).with_uid(&uid_b).with_peer_uid(&uid_a);

        let mut a = KeyExchange::new(&alice, Some(bob.public_key()), &config_a).unwrap();
        let mut b = KeyExchange::new(&bob, Some(alice.public_key()), &config_b).unwrap();

        let ra = a.initiate(&mut rng).unwrap();
        let (rb, sb) = b.respond(&mut rng, &ra).unwrap();
        let (key_a, sa) = a.confirm_responder(&rb, sb.as_ref().map(|t| t.as_ref())).unwrap();
        let key_b = b.confirm_initiator(sa.as_ref().map(|t| t.as_ref())).unwrap();

        prop_assert_eq!(key_a.len(), key_len);
        prop_assert_eq!(key_a, key_b);
        prop_assert_eq!(a.state(), State::Confirmed);
        prop_assert_eq!(b.state(), State::Confirmed);
    }

    #[test]
    fn key_length_only_truncates(seed in any::<u64>(), short in 1usize..=40, extra in 1usize..=40) {
        let (alice, bob, mut rng) = keys(seed);
        let mut scalars = [[0u8; 32]; 2];
        for s in scalars.iter_mut() {
            let k = Sm2PrivateKey::generate(&mut rng).unwrap();
            s.copy_from_slice(&smcrypt_api::SerializeSecret::to_bytes_zeroizing(&k));
        }

        let derive = |key_len: usize| {
            let config = ExchangeConfig::default().with_key_len(key_len).with_confirmation(false);
            let mut rng_a = ReplayRng::new([scalars[0]]);
            let mut rng_b = ReplayRng::new([scalars[1]]);
            let mut a = KeyExchange::new(&alice, Some(bob.public_key()), &config).unwrap();
            let mut b = KeyExchange::new(&bob, Some(alice.public_key()), &config).unwrap();
            let ra = a.initiate(&mut rng_a).unwrap();
            let (rb, _) = b.respond(&mut rng_b, &ra).unwrap();
            let (key, _) = a.confirm_responder(&rb, None).unwrap();
            key
        };

        let k_short = derive(short);
        let k_long = derive(short + extra);
        prop_assert_eq!(k_short.as_ref(), &k_long.as_ref()[..short]);
    }

    #[test]
    fn any_flipped_tag_bit_is_rejected(seed in any::<u64>(), bit in 0usize..256) {
        let (alice, bob, mut rng) = keys(seed);
        let config = ExchangeConfig::default();
        let mut a = KeyExchange::new(&alice, Some(bob.public_key()), &config).unwrap();
        let mut b = KeyExchange::new(&bob, Some(alice.public_key()), &config).unwrap();

        let ra = a.initiate(&mut rng).unwrap();
        let (rb, sb) = b.respond(&mut rng, &ra).unwrap();
        let mut tag = *sb.unwrap().as_bytes();
        tag[bit / 8] ^= 1 << (bit % 8);

        prop_assert_eq!(
            a.confirm_responder(&rb, Some(&tag)).unwrap_err(),
            Error::InvalidConfirmationTag { role: Role::Responder }
        );
        prop_assert_eq!(a.state(), State::Failed);
    }
}
