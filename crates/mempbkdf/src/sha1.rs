// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 implementation per RFC 3174

use memwipe::{fast_zeroize_slice, zeroize_primitive};

use crate::digest::BlockDigest;

const BLOCK_LEN: usize = 64;
const HASH_LEN: usize = 20;

/// Round constants K per RFC 3174 Section 5, one per 20-round stage
const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

/// Initial hash values H(0) per RFC 3174 Section 6.1
const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// SHA-1 logical functions f_t per RFC 3174 Section 5
#[inline(always)]
const fn f(t: usize, b: u32, c: u32, d: u32) -> u32 {
    match t / 20 {
        0 => (b & c) | (!b & d),
        1 => b ^ c ^ d,
        2 => (b & c) | (b & d) | (c & d),
        _ => b ^ c ^ d,
    }
}

/// SHA-1 streaming state.
///
/// Reference digest provider: 20-byte output, 64-byte block. Retained for
/// interoperability with PBKDF2-HMAC-SHA1 consumers; prefer [`Sha256`]
/// where the other side of the derivation allows it.
///
/// [`Sha256`]: crate::Sha256
pub struct Sha1 {
    h: [u32; 5],
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    total_len: u64,
}

impl Sha1 {
    /// Compress one 64-byte block
    fn compress_block(&mut self, block: &[u8; BLOCK_LEN]) {
        let mut w = [0u32; 80];

        // Prepare message schedule per RFC 3174 Section 6.1 (b)-(c)
        for t in 0..16 {
            w[t] = u32::from_be_bytes(block[t * 4..(t + 1) * 4].try_into().unwrap());
        }
        for t in 16..80 {
            w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
        }

        // Initialize working variables
        let mut a = self.h[0];
        let mut b = self.h[1];
        let mut c = self.h[2];
        let mut d = self.h[3];
        let mut e = self.h[4];

        // 80 rounds
        for t in 0..80 {
            let temp = a
                .rotate_left(5)
                .wrapping_add(f(t, b, c, d))
                .wrapping_add(e)
                .wrapping_add(K[t / 20])
                .wrapping_add(w[t]);

            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        // Update hash values
        self.h[0] = self.h[0].wrapping_add(a);
        self.h[1] = self.h[1].wrapping_add(b);
        self.h[2] = self.h[2].wrapping_add(c);
        self.h[3] = self.h[3].wrapping_add(d);
        self.h[4] = self.h[4].wrapping_add(e);

        // Message schedule holds key-derived data when hashing secrets
        fast_zeroize_slice(&mut w);
    }

    /// Zeroize internal state
    fn zeroize(&mut self) {
        fast_zeroize_slice(&mut self.h);
        fast_zeroize_slice(&mut self.buffer);
        zeroize_primitive(&mut self.buffer_len);
        zeroize_primitive(&mut self.total_len);
    }
}

impl BlockDigest for Sha1 {
    const HASH_LEN: usize = HASH_LEN;
    const BLOCK_LEN: usize = BLOCK_LEN;

    fn new() -> Self {
        Self {
            h: H0,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    fn update(&mut self, data: &[u8]) {
        let mut offset = 0;
        self.total_len += data.len() as u64;

        // Fill buffer if partially filled
        if self.buffer_len > 0 {
            let space = BLOCK_LEN - self.buffer_len;
            let copy_len = core::cmp::min(space, data.len());

            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;

            offset = copy_len;

            if self.buffer_len == BLOCK_LEN {
                self.compress_block(&self.buffer.clone());
                self.buffer_len = 0;
            }
        }

        // Process full blocks
        while offset + BLOCK_LEN <= data.len() {
            let block: [u8; BLOCK_LEN] = data[offset..offset + BLOCK_LEN].try_into().unwrap();
            self.compress_block(&block);

            offset += BLOCK_LEN;
        }

        // Buffer remaining
        if offset < data.len() {
            let remaining = data.len() - offset;

            self.buffer[..remaining].copy_from_slice(&data[offset..]);
            self.buffer_len = remaining;
        }
    }

    fn finalize_into(mut self, out: &mut [u8]) {
        assert_eq!(out.len(), HASH_LEN);

        // Padding: append 1 bit, then zeros, then 64-bit length
        let bit_len = self.total_len * 8;

        // Append 0x80
        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // If not enough space for length (8 bytes), pad and compress
        if self.buffer_len > BLOCK_LEN - 8 {
            for i in self.buffer_len..BLOCK_LEN {
                self.buffer[i] = 0;
            }

            self.compress_block(&self.buffer.clone());
            self.buffer_len = 0;
        }

        // Pad with zeros up to length field
        for i in self.buffer_len..BLOCK_LEN - 8 {
            self.buffer[i] = 0;
        }

        // Append 64-bit length in big-endian
        self.buffer[BLOCK_LEN - 8..BLOCK_LEN].copy_from_slice(&bit_len.to_be_bytes());

        self.compress_block(&self.buffer.clone());

        // Output hash
        for (i, &word) in self.h.iter().enumerate() {
            out[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
        }

        self.zeroize();
    }
}
