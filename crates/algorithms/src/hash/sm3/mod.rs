//! SM3 hash function (GB/T 32905-2016)
//!
//! Merkle-Damgård construction over 512-bit blocks with a 256-bit state and
//! SHA-256 style length padding. Message schedule and working variables are
//! wiped after every compression.

use crate::error::{validate, Result};
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;
use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use smcrypt_common::security::{EphemeralSecret, SecureZeroingType, ZeroizeGuard};
#[cfg(not(feature = "std"))]
use portable_atomic::{compiler_fence, Ordering};
#[cfg(feature = "std")]
use std::sync::atomic::{compiler_fence, Ordering};

use smcrypt_params::utils::hash::{SM3_BLOCK_SIZE, SM3_OUTPUT_SIZE, SM3_STATE_WORDS};

const IV: [u32; SM3_STATE_WORDS] = [
    0x7380166f, 0x4914b2b9, 0x172442d7, 0xda8a0600, 0xa96f30bc, 0x163138aa, 0xe38dee4d, 0xb0fb0e4e,
];

// Round constants for j < 16 and j >= 16
const T_LOW: u32 = 0x79cc4519;
const T_HIGH: u32 = 0x7a879d8a;

/// Marker type for the SM3 algorithm
pub enum Sm3Algorithm {}

impl HashAlgorithm for Sm3Algorithm {
    const OUTPUT_SIZE: usize = SM3_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SM3_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SM3";
}

/// SM3 hash function state
#[derive(Clone, Zeroize)]
pub struct Sm3 {
    state: [u32; SM3_STATE_WORDS],
    buffer: [u8; SM3_BLOCK_SIZE],
    buffer_idx: usize,
    total_bytes: u64,
}

impl Drop for Sm3 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[inline(always)]
fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

#[inline(always)]
fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

impl Sm3 {
    fn init() -> Self {
        Sm3 {
            state: IV,
            buffer: [0u8; SM3_BLOCK_SIZE],
            buffer_idx: 0,
            total_bytes: 0,
        }
    }

    fn compress(state: &mut [u32; SM3_STATE_WORDS], block: &[u8; SM3_BLOCK_SIZE]) -> Result<()> {
        // W[0..68] followed by W'[0..64] in a single wiped schedule
        let mut w = EphemeralSecret::new([0u32; 68]);
        let mut w1 = EphemeralSecret::new([0u32; 64]);

        compiler_fence(Ordering::SeqCst);

        for i in 0..16 {
            let start = i * 4;
            validate::max_length("SM3 block read", start + 4, SM3_BLOCK_SIZE)?;
            w[i] = BigEndian::read_u32(&block[start..]);
        }
        for j in 16..68 {
            w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
                ^ w[j - 13].rotate_left(7)
                ^ w[j - 6];
        }
        for j in 0..64 {
            w1[j] = w[j] ^ w[j + 4];
        }

        let mut working_vars = *state;
        let mut guard = ZeroizeGuard::new(&mut working_vars);

        let mut a = guard[0];
        let mut b = guard[1];
        let mut c = guard[2];
        let mut d = guard[3];
        let mut e = guard[4];
        let mut f = guard[5];
        let mut g = guard[6];
        let mut h = guard[7];

        for j in 0..64 {
            let t = if j < 16 { T_LOW } else { T_HIGH };
            let a12 = a.rotate_left(12);
            let ss1 = a12
                .wrapping_add(e)
                .wrapping_add(t.rotate_left(j as u32))
                .rotate_left(7);
            let ss2 = ss1 ^ a12;
            let (ff, gg) = if j < 16 {
                (a ^ b ^ c, e ^ f ^ g)
            } else {
                ((a & b) | (a & c) | (b & c), (e & f) | (!e & g))
            };
            let tt1 = ff.wrapping_add(d).wrapping_add(ss2).wrapping_add(w1[j]);
            let tt2 = gg.wrapping_add(h).wrapping_add(ss1).wrapping_add(w[j]);
            d = c;
            c = b.rotate_left(9);
            b = a;
            a = tt1;
            h = g;
            g = f.rotate_left(19);
            f = e;
            e = p0(tt2);
        }

        guard[0] = a;
        guard[1] = b;
        guard[2] = c;
        guard[3] = d;
        guard[4] = e;
        guard[5] = f;
        guard[6] = g;
        guard[7] = h;

        for (s, v) in state.iter_mut().zip(guard.iter()) {
            *s ^= *v;
        }

        compiler_fence(Ordering::SeqCst);
        Ok(())
    }

    fn update_internal(&mut self, mut input: &[u8]) -> Result<()> {
        while !input.is_empty() {
            let fill = core::cmp::min(input.len(), SM3_BLOCK_SIZE - self.buffer_idx);
            self.buffer[self.buffer_idx..self.buffer_idx + fill].copy_from_slice(&input[..fill]);
            self.buffer_idx += fill;
            input = &input[fill..];
            if self.buffer_idx == SM3_BLOCK_SIZE {
                let mut block = EphemeralSecret::new([0u8; SM3_BLOCK_SIZE]);
                block.copy_from_slice(&self.buffer);
                Self::compress(&mut self.state, &block)?;
                self.total_bytes = self.total_bytes.wrapping_add(SM3_BLOCK_SIZE as u64);
                self.buffer_idx = 0;
            }
        }
        Ok(())
    }

    fn finalize_internal(&mut self) -> Result<[u8; SM3_OUTPUT_SIZE]> {
        self.total_bytes = self.total_bytes.wrapping_add(self.buffer_idx as u64);
        let bit_len = self.total_bytes.wrapping_mul(8);

        let mut block = EphemeralSecret::new([0u8; SM3_BLOCK_SIZE]);

        self.buffer[self.buffer_idx] = 0x80;
        if self.buffer_idx >= SM3_BLOCK_SIZE - 8 {
            for b in &mut self.buffer[self.buffer_idx + 1..] {
                *b = 0;
            }
            block.copy_from_slice(&self.buffer);
            Self::compress(&mut self.state, &block)?;
            self.buffer = [0u8; SM3_BLOCK_SIZE];
        } else {
            for b in &mut self.buffer[self.buffer_idx + 1..SM3_BLOCK_SIZE - 8] {
                *b = 0;
            }
        }

        BigEndian::write_u64(&mut self.buffer[SM3_BLOCK_SIZE - 8..], bit_len);
        block.copy_from_slice(&self.buffer);
        Self::compress(&mut self.state, &block)?;

        let mut out = [0u8; SM3_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.state, &mut out);

        self.buffer.zeroize();
        self.buffer_idx = 0;
        Ok(out)
    }
}

impl SecureZeroingType for Sm3 {
    fn zeroed() -> Self {
        Self::init()
    }
}

impl HashFunction for Sm3 {
    type Algorithm = Sm3Algorithm;
    type Output = Digest<SM3_OUTPUT_SIZE>;

    fn new() -> Self {
        Sm3::init()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.update_internal(data)?;
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let hash = self.finalize_internal()?;
        Ok(Digest::new(hash))
    }
}

#[cfg(test)]
mod tests;
