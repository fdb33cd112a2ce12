//! Constant values for smcrypt cryptographic operations
//!
//! Curve domain parameters, hash sizes and protocol constants. The crate
//! has no dependencies and is always `no_std`.

#![no_std]

pub mod traditional;
pub mod utils;
