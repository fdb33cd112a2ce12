//! Hash-counter key derivation

use core::marker::PhantomData;

use crate::error::{Error, Result};
use crate::hash::HashFunction;
use crate::kdf::KdfAlgorithm;
use smcrypt_common::security::SecretVec;

#[cfg(not(feature = "std"))]
use alloc::vec;

/// KDF(Z, klen) built from a hash function `H` and a 32-bit big-endian counter
/// starting at 1
pub struct CounterKdf<H: HashFunction> {
    _hash: PhantomData<H>,
}

impl<H: HashFunction> KdfAlgorithm for CounterKdf<H> {
    const ALGORITHM_ID: &'static str = "GB/T 32918 KDF";

    fn max_output_size() -> u64 {
        u32::MAX as u64 * H::output_size() as u64
    }
}

impl<H: HashFunction> CounterKdf<H> {
    /// Fill `out` with key material derived from `z`
    ///
    /// An empty `out` is valid and leaves nothing to do. Requests longer than
    /// `(2^32 - 1)` hash outputs are rejected before any hashing.
    pub fn derive_into(z: &[u8], out: &mut [u8]) -> Result<()> {
        if out.len() as u64 > Self::max_output_size() {
            return Err(Error::Processing {
                operation: "SM3-KDF",
                details: "requested key length exceeds (2^32 - 1) hash blocks",
            });
        }
        let mut ct: u32 = 1;
        for chunk in out.chunks_mut(H::output_size()) {
            let mut hasher = H::new();
            hasher.update(z)?;
            hasher.update(&ct.to_be_bytes())?;
            let block = hasher.finalize()?;
            chunk.copy_from_slice(&block.as_ref()[..chunk.len()]);
            ct = ct.wrapping_add(1);
        }
        Ok(())
    }

    /// Derive `klen` bytes from `z` into a zeroizing buffer
    pub fn derive(z: &[u8], klen: usize) -> Result<SecretVec> {
        if klen as u64 > Self::max_output_size() {
            return Err(Error::Processing {
                operation: "SM3-KDF",
                details: "requested key length exceeds (2^32 - 1) hash blocks",
            });
        }
        let mut out = SecretVec::new(vec![0u8; klen]);
        Self::derive_into(z, out.as_mut_slice())?;
        Ok(out)
    }
}
