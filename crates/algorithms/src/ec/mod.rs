//! Elliptic curve primitives
//!
//! Constant-time arithmetic on the sm2p256v1 curve of GB/T 32918.

pub mod sm2;

pub use sm2::{Point as Sm2Point, Scalar as Sm2Scalar};
