//! sm2p256v1 scalar arithmetic (integers mod n)

use crate::ec::sm2::constants::{
    adc8, bytes_to_limbs_le, limbs_to_bytes_be, sbb8, NLIMBS, SM2_SCALAR_SIZE,
};
use crate::error::{validate, Error, Result};
use smcrypt_common::security::{EphemeralSecret, SecretBuffer};
use rand::{CryptoRng, RngCore};
use smcrypt_internal::constant_time::{ct_is_zero, ct_lt_be};
use smcrypt_params::traditional::sm2::SM2P256V1;
use subtle::{Choice, ConditionallySelectable};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Upper bound on rejection-sampling rounds in [`Scalar::random`]
///
/// A 32-byte draw lands outside [1, n) with probability below 2⁻³², so
/// exhausting this bound means the source is broken.
pub const SCALAR_SAMPLING_ATTEMPTS: usize = 64;

/// Scalar modulo the group order
/// n = FFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF 7203DF6B 21C6052B 53BBF409 39D54123.
///
/// Stored big-endian in a zeroizing buffer.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<SM2_SCALAR_SIZE>);

impl Scalar {
    /// Order n in little-endian limbs
    const N_LIMBS: [u32; NLIMBS] = [
        0x39D54123, 0x53BBF409, 0x21C6052B, 0x7203DF6B, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
        0xFFFFFFFE,
    ];

    /// Create a scalar from big-endian bytes, reducing mod n
    ///
    /// Errors if the reduced value is zero.
    pub fn new(data: [u8; SM2_SCALAR_SIZE]) -> Result<Self> {
        let mut limbs = EphemeralSecret::new(bytes_to_limbs_le(&data));
        // 2n > 2²⁵⁶, so a single conditional subtraction reduces any input
        let (reduced, borrow) = sbb8(&limbs, &Self::N_LIMBS);
        let reduced = EphemeralSecret::new(reduced);
        *limbs = Self::select(&limbs, &reduced, Choice::from((borrow ^ 1) as u8));

        let scalar = Self::from_limbs(&limbs);
        if scalar.is_zero() {
            return Err(Error::param("SM2 Scalar", "Scalar cannot be zero"));
        }
        Ok(scalar)
    }

    /// Create a scalar from big-endian bytes that must already lie in [1, n)
    pub fn from_canonical_bytes(data: [u8; SM2_SCALAR_SIZE]) -> Result<Self> {
        let in_range = ct_lt_be(&data, &SM2P256V1.n) & !ct_is_zero(&data);
        if !bool::from(in_range) {
            return Err(Error::param("SM2 Scalar", "Scalar outside [1, n)"));
        }
        Ok(Scalar(SecretBuffer::new(data)))
    }

    /// Draw a uniform scalar in [1, n) by rejection sampling
    ///
    /// Uses `try_fill_bytes` so a failing source surfaces as
    /// [`Error::RandomSource`] instead of a panic.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut bytes = EphemeralSecret::new([0u8; SM2_SCALAR_SIZE]);
        for _ in 0..SCALAR_SAMPLING_ATTEMPTS {
            rng.try_fill_bytes(&mut bytes[..]).map_err(|_| Error::RandomSource {
                operation: "SM2 scalar sampling",
            })?;
            if let Ok(scalar) = Self::from_canonical_bytes(*bytes) {
                return Ok(scalar);
            }
        }
        Err(Error::RandomSource {
            operation: "SM2 scalar sampling",
        })
    }

    /// Deserialize from a 32-byte big-endian slice
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("SM2 Scalar", bytes.len(), SM2_SCALAR_SIZE)?;
        let mut tmp = EphemeralSecret::new([0u8; SM2_SCALAR_SIZE]);
        tmp.copy_from_slice(bytes);
        Self::new(*tmp)
    }

    /// Serialize to big-endian bytes
    pub fn serialize(&self) -> [u8; SM2_SCALAR_SIZE] {
        *self.0.as_array()
    }

    /// Access the underlying buffer
    pub fn as_secret_buffer(&self) -> &SecretBuffer<SM2_SCALAR_SIZE> {
        &self.0
    }

    /// Is this scalar zero?
    pub fn is_zero(&self) -> bool {
        ct_is_zero(self.0.as_slice()).into()
    }

    /// (self + other) mod n
    pub fn add_mod_n(&self, other: &Self) -> Self {
        let a = EphemeralSecret::new(self.to_limbs());
        let b = EphemeralSecret::new(other.to_limbs());
        let (sum, carry) = adc8(&a, &b);
        let sum = EphemeralSecret::new(sum);
        // n > 2²⁵⁵: the carry out of the top limb must be folded in as well
        let (reduced, borrow) = sbb8(&sum, &Self::N_LIMBS);
        let reduced = EphemeralSecret::new(reduced);
        let need_reduce = (carry | (borrow ^ 1)) & 1;
        let r = EphemeralSecret::new(Self::select(&sum, &reduced, Choice::from(need_reduce as u8)));
        Self::from_limbs(&r)
    }

    /// (self · other) mod n, by double-and-add over the bits of `other`
    pub fn mul_mod_n(&self, other: &Self) -> Self {
        let mut acc = Self::from_limbs(&[0u32; NLIMBS]);
        for &byte in other.0.as_slice().iter() {
            for i in (0..8).rev() {
                acc = acc.add_mod_n(&acc);
                let with_self = acc.add_mod_n(self);
                acc = Self::conditional_select(&acc, &with_self, Choice::from((byte >> i) & 1));
            }
        }
        acc
    }

    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u8; SM2_SCALAR_SIZE];
        for ((o, x), y) in out
            .iter_mut()
            .zip(a.0.as_slice().iter())
            .zip(b.0.as_slice().iter())
        {
            *o = u8::conditional_select(x, y, choice);
        }
        Scalar(SecretBuffer::new(out))
    }

    fn to_limbs(&self) -> [u32; NLIMBS] {
        bytes_to_limbs_le(self.0.as_array())
    }

    fn from_limbs(limbs: &[u32; NLIMBS]) -> Self {
        Scalar(SecretBuffer::new(limbs_to_bytes_be(limbs)))
    }

    fn select(a: &[u32; NLIMBS], b: &[u32; NLIMBS], flag: Choice) -> [u32; NLIMBS] {
        let mut out = [0u32; NLIMBS];
        for ((a_limb, b_limb), out_limb) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
            *out_limb = u32::conditional_select(a_limb, b_limb, flag);
        }
        out
    }
}
