//! Fixed-size digest type
//!
//! Provides the `Digest` type, representing the output of a
//! cryptographic hash function with a compile-time size.

use core::fmt;
use core::ops::Deref;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::{ConstantTimeEq, SecureZeroingType};

#[cfg(feature = "alloc")]
use crate::error::Error;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

/// A cryptographic digest with a fixed size
#[derive(Clone, Zeroize)]
pub struct Digest<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Digest<N> {
    /// Create a new digest from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice of exactly `N` bytes
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Digest::from_slice", slice.len(), N)?;
        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Get the length of the digest
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the digest is empty
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrow the digest as a fixed-size array
    pub fn as_array(&self) -> &[u8; N] {
        &self.data
    }

    /// Consume the digest and return the raw array
    pub fn into_array(self) -> [u8; N] {
        self.data
    }

    /// Convert to a hexadecimal string
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }

    /// Create from a hexadecimal string
    #[cfg(feature = "alloc")]
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)
            .map_err(|_| Error::param("hex_str", "Invalid hexadecimal string"))?;

        Self::from_slice(&bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>(", N)?;
        for b in self.data.iter() {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.data.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl<const N: usize> ConstantTimeEq for Digest<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        smcrypt_internal::constant_time::ct_eq(self.data, other.data)
    }
}

impl<const N: usize> SecureZeroingType for Digest<N> {
    fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_from_slice_requires_exact_length() {
        assert!(Digest::<32>::from_slice(&[0u8; 31]).is_err());
        assert!(Digest::<32>::from_slice(&[0u8; 33]).is_err());
        let d = Digest::<32>::from_slice(&[7u8; 32]).unwrap();
        assert_eq!(d.len(), 32);
        assert_eq!(d.as_array(), &[7u8; 32]);
    }

    #[test]
    fn test_digest_hex_and_display() {
        let d = Digest::<4>::new([0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(d.to_hex(), "deadbeef");
        assert_eq!(format!("{}", d), "deadbeef");
        assert_eq!(format!("{:?}", d), "Digest<4>(deadbeef)");
        assert_eq!(Digest::<4>::from_hex("deadbeef").unwrap(), d);
        assert!(Digest::<4>::from_hex("zz").is_err());
    }

    #[test]
    fn test_digest_constant_time_eq() {
        let a = Digest::<4>::new([1, 2, 3, 4]);
        let b = Digest::<4>::new([1, 2, 3, 5]);
        assert!(a.ct_eq(&a.clone()));
        assert!(!a.ct_eq(&b));
        assert!(Digest::<4>::zeroed().ct_eq(&Digest::new([0; 4])));
    }
}
