// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! SHA-256 compression engine (FIPS 180-4).
//!
//! One-shot only: the whole message is supplied in a single call. The
//! running state lives on the caller's stack for the duration of the call,
//! so concurrent calls on different threads share nothing but the constant
//! tables below.
//!
//! # Preconditions
//!
//! The message length in bits must fit in 64 bits (`len * 8 <= u64::MAX`).
//! Longer inputs are a caller contract violation; the length field wraps
//! and the digest is meaningless.

use crate::digest::Digest;

/// SHA-256 block size in bytes
pub const BLOCK_SIZE: usize = 64;
/// SHA-256 digest size in bytes
pub const DIGEST_SIZE: usize = 32;

/// Offset of the 64-bit big-endian length field inside the final block.
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// SHA-256 initial hash values (first 32 bits of the fractional parts of
/// the square roots of the first 8 primes)
pub(crate) const IV: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
    0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// SHA-256 round constants (first 32 bits of the fractional parts of
/// the cube roots of the first 64 primes)
const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5,
    0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3,
    0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc,
    0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7,
    0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
    0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3,
    0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5,
    0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208,
    0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

#[inline]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Fold one 64-byte chunk into the running hash state.
pub(crate) fn compress(state: &mut [u32; 8], chunk: &[u8; BLOCK_SIZE]) {
    let mut w = [0u32; 64];
    for (word, bytes) in w.iter_mut().zip(chunk.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for i in 16..64 {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..64 {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[i])
            .wrapping_add(w[i]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, value) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(value);
    }
}

/// Compute the SHA-256 digest of `message`.
///
/// ```
/// let digest = isf_sha256::compute(b"abc");
/// assert_eq!(
///     digest.to_hex(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn compute(message: &[u8]) -> Digest {
    let mut out = [0u8; DIGEST_SIZE];
    compute_into(message, &mut out);
    Digest::from(out)
}

/// Compute the SHA-256 digest of `message` into caller-provided storage.
pub fn compute_into(message: &[u8], out: &mut [u8; DIGEST_SIZE]) {
    let mut state = IV;
    let bit_len = (message.len() as u64).wrapping_mul(8);

    let mut chunks = message.chunks_exact(BLOCK_SIZE);
    for chunk in &mut chunks {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        compress(&mut state, &block);
    }

    // Padding: 0x80, zeros, then the bit length in the last 8 bytes.
    let tail = chunks.remainder();
    let mut block = [0u8; BLOCK_SIZE];
    block[..tail.len()].copy_from_slice(tail);
    block[tail.len()] = 0x80;

    if tail.len() >= LENGTH_OFFSET {
        // No room for the length field: flush and start an all-zero block.
        compress(&mut state, &block);
        block = [0u8; BLOCK_SIZE];
    }

    block[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
    compress(&mut state, &block);

    for (bytes, word) in out.chunks_exact_mut(4).zip(state) {
        bytes.copy_from_slice(&word.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            compute(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_abc() {
        assert_eq!(
            compute(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_compute_into_matches_compute() {
        let msg = b"The quick brown fox jumps over the lazy dog";
        let mut out = [0xffu8; DIGEST_SIZE];
        compute_into(msg, &mut out);
        assert_eq!(
            hex(&out),
            "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
        );
        assert_eq!(&out, compute(msg).as_bytes());
    }

    #[test]
    fn test_compress_single_padded_block() {
        // "abc" padded by hand must match the one-shot path.
        let mut block = [0u8; BLOCK_SIZE];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[63] = 24;

        let mut state = IV;
        compress(&mut state, &block);

        let mut out = [0u8; DIGEST_SIZE];
        for (bytes, word) in out.chunks_exact_mut(4).zip(state) {
            bytes.copy_from_slice(&word.to_be_bytes());
        }
        assert_eq!(&out, compute(b"abc").as_bytes());
    }

    #[test]
    fn test_padding_threshold() {
        // 55 bytes fit 0x80 + length in one block; 56 spills into a second.
        let fits = [b'a'; 55];
        let spills = [b'a'; 56];
        assert_eq!(
            compute(&fits).to_hex(),
            "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318"
        );
        assert_eq!(
            compute(&spills).to_hex(),
            "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a"
        );
    }

    #[test]
    fn test_sigma_functions() {
        assert_eq!(small_sigma0(1), 0x02004000);
        assert_eq!(small_sigma1(1), 0x0000a000);
        assert_eq!(ch(0xffff_ffff, 0x1234_5678, 0), 0x1234_5678);
        assert_eq!(ch(0, 0x1234_5678, 0x9abc_def0), 0x9abc_def0);
        assert_eq!(maj(0xf0f0_f0f0, 0xff00_ff00, 0x0000_0000), 0xf000_f000);
    }
}
