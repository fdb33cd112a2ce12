//! # smcrypt
//!
//! SM2 authenticated key exchange (GB/T 32918.3) and the SM3 hash, SM3 KDF
//! and sm2p256v1 curve arithmetic it is built on.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! smcrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `kex` (default): SM2 key exchange sessions
//! - `algorithms`: SM3, the SM3 KDF and curve arithmetic on their own
//! - `serde`: serialize [`kex::ExchangeConfig`]
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`smcrypt-algorithms`]: SM3, SM3 KDF, sm2p256v1 field, scalar and point arithmetic
//! - [`smcrypt-kex`]: SM2 key exchange

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use smcrypt_api as api;
pub use smcrypt_common as common;
pub use smcrypt_internal as internal;
pub use smcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use smcrypt_algorithms as algorithms;

#[cfg(feature = "kex")]
pub use smcrypt_kex as kex;

/// Common imports for smcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{AuthenticatedKeyExchange, Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::api::{Key, SecretBytes};
    pub use crate::common::security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{HashFunction, Sm3, Sm3Kdf};

    #[cfg(feature = "kex")]
    pub use crate::kex::sm2::{
        ConfirmationTag, EphemeralPublicKey, ExchangeConfig, KeyExchange, Role, Sm2PrivateKey,
        Sm2PublicKey, State,
    };
}
