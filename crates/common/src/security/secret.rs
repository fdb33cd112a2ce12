//! Secret data types with guaranteed zeroization
//!
//! Wrappers for scalars, digests and derived keys that must not outlive the
//! operation that produced them.

use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Types that can be reset to an all-zero (or initial) value and cloned
/// without losing their zeroization guarantees
pub trait SecureZeroingType: Zeroize + Clone {
    /// Create a zeroed instance
    fn zeroed() -> Self;

    /// Clone that keeps the zeroization behaviour of `self`
    fn secure_clone(&self) -> Self {
        self.clone()
    }
}

/// Fixed-size secret buffer, zeroized on drop
///
/// Used for big-endian scalar encodings and identity digests.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Wrap an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// All-zero buffer
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Buffer length (always `N`)
    pub fn len(&self) -> usize {
        N
    }

    /// True only for `N == 0`
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrow the contents
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Borrow the contents mutably
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Borrow the contents as a fixed-size array
    pub fn as_array(&self) -> &[u8; N] {
        &self.data
    }
}

impl<const N: usize> SecureZeroingType for SecretBuffer<N> {
    fn zeroed() -> Self {
        Self::zeroed()
    }

    fn secure_clone(&self) -> Self {
        Self::new(self.data)
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

/// Variable-size secret vector, zeroized on drop
///
/// Holds KDF input material and derived keys whose length is chosen at
/// runtime.
#[cfg(feature = "alloc")]
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

#[cfg(feature = "alloc")]
impl SecretVec {
    /// Take ownership of `data`
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Copy a slice into a new secret vector
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Empty vector with room for `capacity` bytes
    ///
    /// Reserving up front keeps `extend_from_slice` from reallocating and
    /// leaving unzeroized copies behind.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when no bytes are held
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the contents
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Borrow the contents mutably
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Append bytes
    pub fn extend_from_slice(&mut self, slice: &[u8]) {
        self.data.extend_from_slice(slice);
    }

    /// Shorten to `len` bytes, zeroizing the removed tail first
    pub fn truncate(&mut self, len: usize) {
        if len < self.data.len() {
            self.data[len..].zeroize();
            self.data.truncate(len);
        }
    }
}

#[cfg(feature = "alloc")]
impl SecureZeroingType for SecretVec {
    fn zeroed() -> Self {
        Self::new(Vec::new())
    }

    fn secure_clone(&self) -> Self {
        Self::from_slice(&self.data)
    }
}

#[cfg(feature = "alloc")]
impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(feature = "alloc")]
impl From<Vec<u8>> for SecretVec {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

#[cfg(feature = "alloc")]
impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec(len={}, [REDACTED])", self.data.len())
    }
}

/// Temporary secret that is zeroized when it goes out of scope
///
/// Used for hash message schedules and intermediate field values.
pub struct EphemeralSecret<T: Zeroize> {
    inner: T,
}

impl<T: Zeroize> EphemeralSecret<T> {
    /// Wrap `value`
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }
}

impl<T: Zeroize> Deref for EphemeralSecret<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: Zeroize> DerefMut for EphemeralSecret<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T: Zeroize> Drop for EphemeralSecret<T> {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl<T: Zeroize> fmt::Debug for EphemeralSecret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EphemeralSecret([REDACTED])")
    }
}

/// Guard that zeroizes a borrowed value when dropped
///
/// Cleanup runs on every exit path, including early `?` returns.
pub struct ZeroizeGuard<'a, T: Zeroize> {
    value: &'a mut T,
}

impl<'a, T: Zeroize> ZeroizeGuard<'a, T> {
    /// Guard `value` until the end of the enclosing scope
    pub fn new(value: &'a mut T) -> Self {
        Self { value }
    }
}

impl<T: Zeroize> Drop for ZeroizeGuard<'_, T> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl<T: Zeroize> Deref for ZeroizeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value
    }
}

impl<T: Zeroize> DerefMut for ZeroizeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_buffer_basic() {
        let mut buffer = SecretBuffer::<32>::new([42u8; 32]);
        assert_eq!(buffer.len(), 32);
        assert_eq!(buffer.as_slice()[0], 42);

        buffer.as_mut_slice()[0] = 1;
        assert_eq!(buffer.as_array()[0], 1);

        buffer.zeroize();
        assert_eq!(buffer.as_slice(), &[0u8; 32]);
    }

    #[test]
    fn test_secret_buffer_debug_is_redacted() {
        let buffer = SecretBuffer::<4>::new([0xde, 0xad, 0xbe, 0xef]);
        let shown = format!("{:?}", buffer);
        assert!(shown.contains("REDACTED"));
        assert!(!shown.contains("222"));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_secret_vec_truncate() {
        let mut vec = SecretVec::with_capacity(8);
        vec.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        vec.truncate(3);
        assert_eq!(vec.as_slice(), &[1, 2, 3]);
        assert_eq!(vec.secure_clone().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_zeroize_guard() {
        let mut value = [7u32; 8];
        {
            let mut guard = ZeroizeGuard::new(&mut value);
            guard[0] = 9;
            assert_eq!(guard[0], 9);
        }
        assert_eq!(value, [0u32; 8]);
    }

    #[test]
    fn test_ephemeral_secret_deref() {
        let mut secret = EphemeralSecret::new([1u32; 4]);
        secret[2] = 5;
        assert_eq!(secret[2], 5);
    }
}
