//! Shared security types for the smcrypt library
//!
//! Zeroizing containers used by the primitive and protocol crates.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

pub use security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

#[cfg(feature = "alloc")]
pub use security::SecretVec;
