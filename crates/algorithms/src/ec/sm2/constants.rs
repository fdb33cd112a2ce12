//! Sizes and limb helpers for sm2p256v1

pub use smcrypt_params::traditional::sm2::{
    SM2_FIELD_ELEMENT_SIZE, SM2_POINT_UNCOMPRESSED_SIZE, SM2_SCALAR_SIZE,
};

/// Number of 32-bit limbs in a field element or scalar
pub(crate) const NLIMBS: usize = 8;

/// Big-endian bytes to little-endian 32-bit limbs
#[inline]
pub(crate) fn bytes_to_limbs_le(be_bytes: &[u8; 32]) -> [u32; NLIMBS] {
    let mut limbs = [0u32; NLIMBS];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let offset = (NLIMBS - 1 - i) * 4;
        *limb = u32::from_be_bytes([
            be_bytes[offset],
            be_bytes[offset + 1],
            be_bytes[offset + 2],
            be_bytes[offset + 3],
        ]);
    }
    limbs
}

/// Little-endian 32-bit limbs to big-endian bytes
#[inline]
pub(crate) fn limbs_to_bytes_be(limbs: &[u32; NLIMBS]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        let offset = (NLIMBS - 1 - i) * 4;
        out[offset..offset + 4].copy_from_slice(&limb.to_be_bytes());
    }
    out
}

/// 8-limb addition, returning the carry out
#[inline(always)]
pub(crate) fn adc8(a: &[u32; NLIMBS], b: &[u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
    let mut r = [0u32; NLIMBS];
    let mut carry = 0u64;
    for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
        let tmp = (a_limb as u64) + (b_limb as u64) + carry;
        *r_limb = tmp as u32;
        carry = tmp >> 32;
    }
    (r, carry as u32)
}

/// 8-limb subtraction, returning the borrow out
#[inline(always)]
pub(crate) fn sbb8(a: &[u32; NLIMBS], b: &[u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
    let mut r = [0u32; NLIMBS];
    let mut borrow = 0u32;
    for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
        let ai = a_limb as u64;
        let bi = b_limb as u64 + borrow as u64;
        *r_limb = ai.wrapping_sub(bi) as u32;
        borrow = (ai < bi) as u32;
    }
    (r, borrow)
}
