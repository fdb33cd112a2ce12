//! Per-session configuration

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{validate, Result};
use smcrypt_algorithms::kdf::{KdfAlgorithm, Sm3Kdf};
use smcrypt_params::traditional::sm2::{SM2_DEFAULT_UID, SM2_KEX_DEFAULT_KEY_SIZE, SM2_MAX_UID_LEN};

/// Options fixed when a [`KeyExchange`](super::KeyExchange) is constructed
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExchangeConfig {
    /// Length in bytes of the derived shared key
    pub key_len: usize,
    /// Whether this side produces a confirmation tag for the peer
    pub confirmation: bool,
    /// Local distinguishing identifier
    pub uid: Vec<u8>,
    /// Peer distinguishing identifier, used when a peer key is bound at
    /// construction
    pub peer_uid: Vec<u8>,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            key_len: SM2_KEX_DEFAULT_KEY_SIZE,
            confirmation: true,
            uid: SM2_DEFAULT_UID.to_vec(),
            peer_uid: SM2_DEFAULT_UID.to_vec(),
        }
    }
}

impl ExchangeConfig {
    /// Set the derived key length
    pub fn with_key_len(mut self, key_len: usize) -> Self {
        self.key_len = key_len;
        self
    }

    /// Enable or disable sending a confirmation tag
    pub fn with_confirmation(mut self, confirmation: bool) -> Self {
        self.confirmation = confirmation;
        self
    }

    /// Set the local identifier
    pub fn with_uid(mut self, uid: &[u8]) -> Self {
        self.uid = uid.to_vec();
        self
    }

    /// Set the peer identifier
    pub fn with_peer_uid(mut self, peer_uid: &[u8]) -> Self {
        self.peer_uid = peer_uid.to_vec();
        self
    }

    /// Check every field against the protocol limits
    pub fn validate(&self) -> Result<()> {
        validate::config(self.key_len > 0, "key_len", "must be at least one byte")?;
        validate::config(
            self.key_len as u64 <= Sm3Kdf::max_output_size(),
            "key_len",
            "exceeds the SM3 KDF output range",
        )?;
        validate::config(
            self.uid.len() <= SM2_MAX_UID_LEN,
            "uid",
            "longer than 8191 bytes",
        )?;
        validate::config(
            self.peer_uid.len() <= SM2_MAX_UID_LEN,
            "peer_uid",
            "longer than 8191 bytes",
        )?;
        Ok(())
    }
}
