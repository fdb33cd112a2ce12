//! Public API traits and types for the smcrypt library
//!
//! This crate provides the public API surface shared by the smcrypt crates:
//! the common error type, validation helpers, serialization traits, the
//! authenticated key exchange trait and zeroizing byte containers.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use types::{Key, SecretBytes};

pub use traits::{AuthenticatedKeyExchange, Serialize, SerializeSecret};
