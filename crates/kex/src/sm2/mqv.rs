//! MQV combination step shared by both roles
//!
//! Each party truncates an ephemeral x-coordinate with the associative
//! value function x̄ = 2^w + (x & (2^w − 1)), forms t = (d + x̄·r) mod n and
//! multiplies the peer's combined point P + x̄'·R by t.

use super::Role;
use crate::error::{Error, Result};
use smcrypt_algorithms::ec::sm2::{Point, Scalar, SM2_SCALAR_SIZE};
use smcrypt_internal::constant_time::{ct_and, ct_or};
use smcrypt_params::traditional::sm2::SM2P256V1;

/// Masks for the truncation window w = ⌈⌈log₂ n⌉ / 2⌉ − 1
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MqvParams {
    /// 2^w, big-endian
    pub(crate) w2: [u8; SM2_SCALAR_SIZE],
    /// 2^w − 1, big-endian
    pub(crate) w2_minus1: [u8; SM2_SCALAR_SIZE],
}

const fn bit_length(n: &[u8; SM2_SCALAR_SIZE]) -> usize {
    let mut i = 0;
    while i < SM2_SCALAR_SIZE {
        if n[i] != 0 {
            return (SM2_SCALAR_SIZE - i) * 8 - n[i].leading_zeros() as usize;
        }
        i += 1;
    }
    0
}

impl MqvParams {
    const fn from_order(n: &[u8; SM2_SCALAR_SIZE]) -> Self {
        let w = (bit_length(n) + 1) / 2 - 1;
        let top = SM2_SCALAR_SIZE - 1 - w / 8;
        let bit = (w % 8) as u32;

        let mut w2 = [0u8; SM2_SCALAR_SIZE];
        let mut w2_minus1 = [0u8; SM2_SCALAR_SIZE];
        w2[top] = 1 << bit;
        let mut i = top;
        while i < SM2_SCALAR_SIZE {
            w2_minus1[i] = if i == top { (1u8 << bit) - 1 } else { 0xff };
            i += 1;
        }
        Self { w2, w2_minus1 }
    }
}

/// Window parameters for sm2p256v1 (w = 127)
pub(crate) static SM2_MQV: MqvParams = MqvParams::from_order(&SM2P256V1.n);

/// Associative value function x̄ = 2^w + (x & (2^w − 1)) on a big-endian
/// x-coordinate
pub fn associative_value(x: &[u8; SM2_SCALAR_SIZE]) -> [u8; SM2_SCALAR_SIZE] {
    avf(&SM2_MQV, x)
}

pub(crate) fn avf(params: &MqvParams, x: &[u8; SM2_SCALAR_SIZE]) -> [u8; SM2_SCALAR_SIZE] {
    ct_or(&ct_and(x, &params.w2_minus1), &params.w2)
}

/// Compute t·(P_peer + x̄_peer·R_peer) with t = (d + x̄_own·r) mod n
///
/// `role` is the caller's role and only selects the name reported when the
/// result is the identity.
pub(crate) fn combine(
    params: &MqvParams,
    role: Role,
    d: &Scalar,
    r: &Scalar,
    own_ephemeral: &Point,
    peer_public: &Point,
    peer_ephemeral: &Point,
) -> Result<Point> {
    // x̄ has bit w set and nothing above it, so it is nonzero and below n
    let x_own = Scalar::new(avf(params, &own_ephemeral.x_coordinate_bytes()))?;
    let x_peer = Scalar::new(avf(params, &peer_ephemeral.x_coordinate_bytes()))?;

    let t = x_own.mul_mod_n(r).add_mod_n(d);
    let base = peer_public.add(&peer_ephemeral.mul(&x_peer));
    let combined = base.mul(&t);

    if combined.is_identity() {
        return Err(Error::InfiniteCombination {
            point: role.combined_point_name(),
        });
    }
    Ok(combined)
}
