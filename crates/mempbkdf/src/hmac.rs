// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC engine per RFC 2104, generic over the digest provider

use core::marker::PhantomData;

use memwipe::fast_zeroize_slice;

use crate::digest::{BlockDigest, MAX_BLOCK_LEN, MAX_HASH_LEN};

/// Keyed HMAC state.
///
/// The key pads are computed once and reused across messages, so a PBKDF2
/// derivation pays the key-processing cost once rather than per round.
/// Pads contain padded secret key material and are zeroized on drop; the
/// inner-hash buffer is zeroized after every message.
pub(crate) struct Hmac<D: BlockDigest> {
    /// K ⊕ ipad (0x36 repeated), valid in [..D::BLOCK_LEN]
    k_ipad: [u8; MAX_BLOCK_LEN],
    /// K ⊕ opad (0x5c repeated), valid in [..D::BLOCK_LEN]
    k_opad: [u8; MAX_BLOCK_LEN],
    /// Inner hash result, valid in [..D::HASH_LEN]
    inner_hash: [u8; MAX_HASH_LEN],

    _digest: PhantomData<D>,
}

impl<D: BlockDigest> Hmac<D> {
    /// Create a keyed HMAC state per RFC 2104.
    ///
    /// A key longer than the digest block length is replaced by its
    /// digest before padding.
    pub fn new(key: &[u8]) -> Self {
        debug_assert!(D::HASH_LEN <= MAX_HASH_LEN);
        debug_assert!(D::BLOCK_LEN <= MAX_BLOCK_LEN);

        let mut k_ipad = [0u8; MAX_BLOCK_LEN];
        let mut k_opad = [0u8; MAX_BLOCK_LEN];
        let mut key_block = [0u8; MAX_BLOCK_LEN];

        // Determine effective key, hashing oversized keys into key_block
        let key_len = if key.len() > D::BLOCK_LEN {
            let mut digest = D::new();
            digest.update(key);
            digest.finalize_into(&mut key_block[..D::HASH_LEN]);
            D::HASH_LEN
        } else {
            key_block[..key.len()].copy_from_slice(key);
            key.len()
        };

        // Initialize pads
        k_ipad[..D::BLOCK_LEN].fill(0x36);
        k_opad[..D::BLOCK_LEN].fill(0x5c);
        for i in 0..key_len {
            k_ipad[i] ^= key_block[i];
            k_opad[i] ^= key_block[i];
        }

        fast_zeroize_slice(&mut key_block);

        Self {
            k_ipad,
            k_opad,
            inner_hash: [0u8; MAX_HASH_LEN],
            _digest: PhantomData,
        }
    }

    /// HMAC over the concatenation of `parts`, written to `out[..HASH_LEN]`.
    ///
    /// Streaming the message parts lets the PBKDF2 driver feed
    /// `salt || BE32(counter)` without building a concatenated buffer
    /// that would itself need erasure.
    pub fn mac_parts(&mut self, parts: &[&[u8]], out: &mut [u8]) {
        // Inner hash: digest(k_ipad || parts...)
        let mut inner = D::new();
        inner.update(&self.k_ipad[..D::BLOCK_LEN]);
        for part in parts {
            inner.update(part);
        }
        inner.finalize_into(&mut self.inner_hash[..D::HASH_LEN]);

        // Outer hash: digest(k_opad || inner_hash) -> out
        let mut outer = D::new();
        outer.update(&self.k_opad[..D::BLOCK_LEN]);
        outer.update(&self.inner_hash[..D::HASH_LEN]);
        outer.finalize_into(out);

        fast_zeroize_slice(&mut self.inner_hash);
    }

    /// HMAC over a single message, written to `out[..HASH_LEN]`.
    pub fn mac(&mut self, message: &[u8], out: &mut [u8]) {
        self.mac_parts(&[message], out);
    }

    /// Zeroize key pads and intermediates.
    fn zeroize(&mut self) {
        fast_zeroize_slice(&mut self.k_ipad);
        fast_zeroize_slice(&mut self.k_opad);
        fast_zeroize_slice(&mut self.inner_hash);
    }
}

impl<D: BlockDigest> Drop for Hmac<D> {
    fn drop(&mut self) {
        self.zeroize();
    }
}
