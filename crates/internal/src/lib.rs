//! Internal utilities shared by the smcrypt crates
//!
//! Not part of the public API surface; the helpers here are re-exported by
//! higher-level crates where they are needed.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice};
