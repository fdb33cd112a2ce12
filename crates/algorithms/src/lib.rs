//! Cryptographic primitives for the SM2 key exchange
//!
//! This crate provides the SM3 hash function, the SM3-based key derivation
//! function and arithmetic on the sm2p256v1 curve. The implementations
//! favour constant-time code paths and zeroize intermediate secrets.
//! The library is usable in both `std` and `no_std` environments.
//!
//! # Security Features
//!
//! - Secure memory handling with automatic zeroization
//! - Constant-time comparison operations
//! - Memory barriers around secret-dependent compression state

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Hash function implementations
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "hash")]
pub use hash::{HashFunction, Sm3};

// KDF implementations
#[cfg(feature = "kdf")]
pub mod kdf;
#[cfg(feature = "kdf")]
pub use kdf::{CounterKdf, Sm3Kdf};

// Elliptic curve primitives
#[cfg(feature = "ec")]
pub mod ec;
#[cfg(feature = "ec")]
pub use ec::{sm2, Sm2Point, Sm2Scalar};

// Type system
pub mod types;
pub use types::{ConstantTimeEq, Digest};

// Re-export security types from smcrypt-common
pub use smcrypt_common::security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};
