//! Key derivation functions
//!
//! Only the hash-counter construction of GB/T 32918 is provided: the output
//! is `H(Z || 1) || H(Z || 2) || ...` truncated to the requested length.

pub mod counter;

pub use counter::CounterKdf;

/// Marker trait for KDF algorithms
pub trait KdfAlgorithm {
    /// Static algorithm identifier
    const ALGORITHM_ID: &'static str;

    /// Largest output this KDF can produce, in bytes
    fn max_output_size() -> u64;
}

/// The SM3-based KDF used by SM2 key exchange, encryption and signatures
pub type Sm3Kdf = CounterKdf<crate::hash::Sm3>;

#[cfg(test)]
mod tests;
