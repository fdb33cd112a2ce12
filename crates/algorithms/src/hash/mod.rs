//! Cryptographic hash functions
//!
//! Hash functions are exposed through the [`HashFunction`] trait, with a
//! marker type implementing [`HashAlgorithm`] carrying the compile-time
//! parameters of each algorithm.

use crate::error::Result;

pub mod sm3;

pub use sm3::{Sm3, Sm3Algorithm};

/// Compile-time parameters of a hash algorithm
pub trait HashAlgorithm {
    /// Output size in bytes
    const OUTPUT_SIZE: usize;

    /// Internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable algorithm identifier
    const ALGORITHM_ID: &'static str;
}

/// Incremental hash function interface
pub trait HashFunction: Sized {
    /// Marker type describing the algorithm
    type Algorithm: HashAlgorithm;

    /// Digest type produced by `finalize`
    type Output: AsRef<[u8]> + Clone;

    /// Create a fresh hashing context
    fn new() -> Self;

    /// Absorb more input
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Produce the digest
    ///
    /// The context must be [`reset`](Self::reset) or recreated before it is
    /// used again.
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Return the context to its initial state
    fn reset(&mut self) {
        *self = Self::new();
    }

    /// Output size in bytes
    fn output_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::OUTPUT_SIZE
    }

    /// Block size in bytes
    fn block_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> &'static str {
        <Self::Algorithm as HashAlgorithm>::ALGORITHM_ID
    }

    /// One-shot hash of `data`
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }
}
