//! Trait definitions for the smcrypt public API

pub mod key_exchange;
pub mod serialize;

pub use key_exchange::AuthenticatedKeyExchange;
pub use serialize::{Serialize, SerializeSecret};
