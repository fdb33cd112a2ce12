//! Type-safe wrappers for cryptographic types

pub mod digest;

pub use digest::Digest;

// Import and re-export security types from smcrypt-common
pub use smcrypt_common::security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}
