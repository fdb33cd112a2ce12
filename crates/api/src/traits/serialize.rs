//! Traits for byte serialization of cryptographic types.

use crate::Result;
use zeroize::Zeroizing;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Public values (public keys, ephemeral points) that can be moved to and
/// from their wire encoding.
pub trait Serialize: Sized {
    /// Parse an object from its encoding.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Produce the encoding.
    fn to_bytes(&self) -> Vec<u8>;
}

/// Secret values whose encoding must itself be wiped after use.
pub trait SerializeSecret: Sized {
    /// Parse an object from its encoding. The caller should wipe `bytes`.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Produce an encoding that is zeroized on drop.
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}
