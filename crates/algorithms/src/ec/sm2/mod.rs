//! sm2p256v1 elliptic curve primitives
//!
//! Curve equation y² = x³ − 3x + b over 𝔽ₚ with
//! - p = FFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF 00000000 FFFFFFFF FFFFFFFF,
//! - n = FFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF 7203DF6B 21C6052B 53BBF409 39D54123,
//! - cofactor 1.
//!
//! Implements Montgomery multiplication for 𝔽ₚ, Jacobian coordinates for
//! point arithmetic and double-and-add scalar multiplication with
//! constant-time selection.

mod constants;
mod field;
mod point;
mod scalar;

pub use constants::{SM2_FIELD_ELEMENT_SIZE, SM2_POINT_UNCOMPRESSED_SIZE, SM2_SCALAR_SIZE};
pub use field::FieldElement;
pub use point::Point;
pub use scalar::{Scalar, SCALAR_SAMPLING_ATTEMPTS};

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use subtle::Choice;

const G_X: [u32; 8] = [
    0x334C74C7, 0x715A4589, 0xF2660BE1, 0x8FE30BBF, 0x6A39C994, 0x5F990446, 0x1F198119, 0x32C4AE2C,
];

const G_Y: [u32; 8] = [
    0x2139F0A0, 0x02DF32E5, 0xC62A4740, 0xD0A9877C, 0x6B692153, 0x59BDCEE3, 0xF4F6779C, 0xBC3736A2,
];

/// The standard base point G
pub fn base_point_g() -> Point {
    Point {
        is_identity: Choice::from(0),
        x: FieldElement(G_X),
        y: FieldElement(G_Y),
    }
}

/// Scalar multiplication with the base point: scalar · G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    base_point_g().mul(scalar)
}

/// General scalar multiplication: scalar · point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    if point.is_identity() {
        Point::identity()
    } else {
        point.mul(scalar)
    }
}

/// Generate a key pair (d, d·G) with d uniform in [1, n)
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let d = Scalar::random(rng)?;
    let public = scalar_mult_base_g(&d);
    Ok((d, public))
}
