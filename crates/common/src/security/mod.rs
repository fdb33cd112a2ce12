//! Security primitives for handling sensitive cryptographic material

pub mod secret;

pub use secret::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

#[cfg(feature = "alloc")]
pub use secret::SecretVec;
