//! sm2p256v1 base field arithmetic
//!
//! p = 2²⁵⁶ − 2²²⁴ − 2⁹⁶ + 2⁶⁴ − 1. Elements are kept fully reduced in eight
//! little-endian 32-bit limbs. Multiplication goes through one Montgomery
//! product and a second one against R² mod p, so callers never see the
//! Montgomery domain.

use crate::ec::sm2::constants::{adc8, bytes_to_limbs_le, limbs_to_bytes_be, sbb8, NLIMBS};
use crate::ec::sm2::constants::SM2_FIELD_ELEMENT_SIZE;
use crate::error::{Error, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Element of 𝔽ₚ for the SM2 prime
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct FieldElement(pub(crate) [u32; NLIMBS]);

impl FieldElement {
    /// p in little-endian limbs
    pub(crate) const MOD_LIMBS: [u32; NLIMBS] = [
        0xFFFFFFFF, 0xFFFFFFFF, 0x00000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
        0xFFFFFFFE,
    ];

    /// a = p − 3
    pub(crate) const A_M3: [u32; NLIMBS] = [
        0xFFFFFFFC, 0xFFFFFFFF, 0x00000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
        0xFFFFFFFE,
    ];

    /// Curve coefficient b
    pub(crate) const B: [u32; NLIMBS] = [
        0x4D940E93, 0xDDBCBD41, 0x15AB8F92, 0xF39789F5, 0xCF6509A7, 0x4D5A9E4B, 0x9D9F5E34,
        0x28E9FA9E,
    ];

    /// R² mod p with R = 2²⁵⁶
    const R2: [u32; NLIMBS] = [
        0x00000003, 0x00000002, 0xFFFFFFFF, 0x00000002, 0x00000001, 0x00000001, 0x00000002,
        0x00000004,
    ];

    /// p − 2, big-endian, for Fermat inversion
    const P_MINUS_2: [u8; 32] = [
        0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFD,
    ];

    /// Build a field element from a small literal
    #[inline]
    pub fn from_u32(n: u32) -> Self {
        let mut limbs = [0u32; NLIMBS];
        limbs[0] = n;
        FieldElement(limbs)
    }

    /// The additive identity
    #[inline]
    pub fn zero() -> Self {
        FieldElement([0u32; NLIMBS])
    }

    /// The multiplicative identity
    #[inline]
    pub fn one() -> Self {
        Self::from_u32(1)
    }

    /// The curve coefficient a = −3
    #[inline]
    pub fn a() -> Self {
        FieldElement(Self::A_M3)
    }

    /// The curve coefficient b
    #[inline]
    pub fn b() -> Self {
        FieldElement(Self::B)
    }

    /// Parse big-endian bytes, rejecting any value ≥ p
    pub fn from_bytes(bytes: &[u8; SM2_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let limbs = bytes_to_limbs_le(bytes);
        let (_, borrow) = sbb8(&limbs, &Self::MOD_LIMBS);
        if borrow == 0 {
            return Err(Error::param("SM2 FieldElement", "Value ≥ modulus"));
        }
        Ok(FieldElement(limbs))
    }

    /// Big-endian encoding
    pub fn to_bytes(&self) -> [u8; SM2_FIELD_ELEMENT_SIZE] {
        limbs_to_bytes_be(&self.0)
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> bool {
        self.ct_eq(&Self::zero()).into()
    }

    /// Least-significant bit
    pub fn is_odd(&self) -> bool {
        (self.0[0] & 1) == 1
    }

    /// (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        let (sum, carry) = adc8(&self.0, &other.0);
        let (reduced, borrow) = sbb8(&sum, &Self::MOD_LIMBS);
        // Subtract p on overflow or when sum ≥ p
        let need_reduce = (carry | (borrow ^ 1)) & 1;
        Self::select(&sum, &reduced, Choice::from(need_reduce as u8))
    }

    /// (self − other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = sbb8(&self.0, &other.0);
        let (diff_plus_p, _) = adc8(&diff, &Self::MOD_LIMBS);
        Self::select(&diff, &diff_plus_p, Choice::from(borrow as u8))
    }

    /// (self · other) mod p
    pub fn mul(&self, other: &Self) -> Self {
        let t = Self::mont_mul(&self.0, &other.0);
        FieldElement(Self::mont_mul(&t, &Self::R2))
    }

    /// self² mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// −self mod p
    pub fn negate(&self) -> Self {
        Self::zero().sub(self)
    }

    /// Multiplicative inverse via Fermat: a^(p−2)
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::param("SM2 FieldElement", "Inverse of zero"));
        }

        let mut result = FieldElement::one();
        for &byte in Self::P_MINUS_2.iter() {
            for bit in (0..8).rev() {
                result = result.square();
                if (byte >> bit) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        Ok(result)
    }

    /// Montgomery product a·b·R⁻¹ mod p (CIOS, 32-bit words)
    ///
    /// −p⁻¹ mod 2³² is 1 for this prime, so the per-round reduction factor is
    /// just the low accumulator limb.
    fn mont_mul(a: &[u32; NLIMBS], b: &[u32; NLIMBS]) -> [u32; NLIMBS] {
        let p = &Self::MOD_LIMBS;
        let mut t = [0u32; NLIMBS + 2];

        for &bi in b.iter() {
            // t += a · b[i]
            let mut carry = 0u64;
            for j in 0..NLIMBS {
                let tmp = t[j] as u64 + (a[j] as u64) * (bi as u64) + carry;
                t[j] = tmp as u32;
                carry = tmp >> 32;
            }
            let tmp = t[NLIMBS] as u64 + carry;
            t[NLIMBS] = tmp as u32;
            t[NLIMBS + 1] = (tmp >> 32) as u32;

            // t = (t + m · p) / 2³²
            let m = t[0] as u64;
            let mut carry = (t[0] as u64 + m * (p[0] as u64)) >> 32;
            for j in 1..NLIMBS {
                let tmp = t[j] as u64 + m * (p[j] as u64) + carry;
                t[j - 1] = tmp as u32;
                carry = tmp >> 32;
            }
            let tmp = t[NLIMBS] as u64 + carry;
            t[NLIMBS - 1] = tmp as u32;
            t[NLIMBS] = t[NLIMBS + 1] + (tmp >> 32) as u32;
        }

        // Result < 2p: one conditional subtraction
        let mut r = [0u32; NLIMBS];
        r.copy_from_slice(&t[..NLIMBS]);
        let (reduced, borrow) = sbb8(&r, p);
        let need_reduce = (t[NLIMBS] | (borrow ^ 1)) & 1;
        Self::select(&r, &reduced, Choice::from(need_reduce as u8)).0
    }

    /// Constant-time select: `a` when flag is 0, `b` when flag is 1
    fn select(a: &[u32; NLIMBS], b: &[u32; NLIMBS], flag: Choice) -> Self {
        let mut out = [0u32; NLIMBS];
        for ((a_limb, b_limb), out_limb) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
            *out_limb = u32::conditional_select(a_limb, b_limb, flag);
        }
        FieldElement(out)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}
