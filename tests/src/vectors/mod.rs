//! Known-answer vectors stored as JSON next to this module

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One party's inputs to an exchange
#[derive(Debug, Clone, Deserialize)]
pub struct PartyVector {
    /// Distinguishing identifier (ASCII)
    pub uid: String,
    /// Long-term private key, hex
    pub private_key: String,
    /// Ephemeral scalar, hex
    pub ephemeral_scalar: String,
    /// Expected uncompressed ephemeral point, hex
    pub ephemeral_point: String,
    /// Expected identity digest, hex
    pub z: String,
}

/// A complete two-party exchange with expected outputs
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeVector {
    /// Short label for failure messages
    pub name: String,
    /// Derived key length in bytes
    pub key_len: usize,
    /// Initiator's inputs
    pub initiator: PartyVector,
    /// Responder's inputs
    pub responder: PartyVector,
    /// Expected shared key, hex
    pub shared_key: String,
    /// Expected responder tag S_B, hex
    pub responder_tag: String,
    /// Expected initiator tag S_A, hex
    pub initiator_tag: String,
}

/// Identity digest vector
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityVector {
    /// Identifier (ASCII)
    pub uid: String,
    /// Uncompressed public key, hex
    pub public_key: String,
    /// Expected digest, hex
    pub z: String,
}

/// Top-level layout of `sm2_kex.json`
#[derive(Debug, Clone, Deserialize)]
pub struct Sm2KexVectors {
    /// Full exchanges
    pub exchanges: Vec<ExchangeVector>,
    /// Stand-alone identity digests
    pub identities: Vec<IdentityVector>,
}

fn vector_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
}

/// Load the SM2 key exchange vectors
pub fn load_sm2_kex() -> Result<Sm2KexVectors, String> {
    let path = vector_dir().join("sm2_kex.json");
    let json = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&json).map_err(|e| format!("Failed to parse JSON: {}", e))
}
