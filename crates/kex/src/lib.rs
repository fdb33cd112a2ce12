//! Authenticated key exchange
//!
//! This crate implements the SM2 key exchange protocol (GB/T 32918.3): two
//! parties holding long-term sm2p256v1 key pairs agree on a symmetric key
//! of caller-chosen length through one exchange of ephemeral points, with
//! optional mutual key confirmation.
//!
//! ```
//! use rand::rngs::OsRng;
//! use smcrypt_kex::sm2::{ExchangeConfig, KeyExchange, Sm2PrivateKey};
//!
//! let alice = Sm2PrivateKey::generate(&mut OsRng)?;
//! let bob = Sm2PrivateKey::generate(&mut OsRng)?;
//! let config = ExchangeConfig::default();
//!
//! let mut initiator = KeyExchange::new(&alice, Some(bob.public_key()), &config)?;
//! let mut responder = KeyExchange::new(&bob, Some(alice.public_key()), &config)?;
//!
//! let ra = initiator.initiate(&mut OsRng)?;
//! let (rb, sb) = responder.respond(&mut OsRng, &ra)?;
//! let (key_a, sa) = initiator.confirm_responder(&rb, sb.as_ref().map(|t| t.as_ref()))?;
//! let key_b = responder.confirm_initiator(sa.as_ref().map(|t| t.as_ref()))?;
//!
//! assert_eq!(key_a, key_b);
//! # Ok::<(), smcrypt_kex::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod sm2;

pub use error::{Error, Result};
pub use sm2::{
    ConfirmationTag, EphemeralPublicKey, ExchangeConfig, KeyExchange, Role, SharedKey,
    Sm2PrivateKey, Sm2PublicKey, State,
};
