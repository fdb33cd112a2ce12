//! Test utilities and known-answer vectors for the smcrypt library

pub mod vectors;

use rand::{CryptoRng, RngCore};
use std::collections::VecDeque;

/// RNG that hands out pre-recorded 32-byte blocks, one per request
///
/// Lets known-answer tests drive the public API with fixed ephemeral
/// scalars. Panics when it runs dry.
pub struct ReplayRng {
    blocks: VecDeque<[u8; 32]>,
}

impl ReplayRng {
    /// Queue `blocks` in order
    pub fn new<I: IntoIterator<Item = [u8; 32]>>(blocks: I) -> Self {
        Self {
            blocks: blocks.into_iter().collect(),
        }
    }

    /// Blocks not yet consumed
    pub fn remaining(&self) -> usize {
        self.blocks.len()
    }
}

impl RngCore for ReplayRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let block = self
            .blocks
            .pop_front()
            .expect("ReplayRng ran out of recorded blocks");
        let n = dest.len().min(block.len());
        dest[..n].copy_from_slice(&block[..n]);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ReplayRng {}

/// Decode a 64-digit hex string into 32 bytes
pub fn hex32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    hex::decode_to_slice(s, &mut out).expect("invalid 32-byte hex string");
    out
}
