// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Digest provider contract for the HMAC engine and PBKDF2 driver.

/// Largest digest output length any provider may declare.
///
/// The HMAC engine keeps its intermediate buffers as fixed stack arrays
/// sized by this bound, so no provider state touches the heap.
pub(crate) const MAX_HASH_LEN: usize = 64;

/// Largest digest block length any provider may declare.
pub(crate) const MAX_BLOCK_LEN: usize = 128;

/// Streaming block digest: fixed output length, fixed internal block
/// length, deterministic.
///
/// The HMAC engine and PBKDF2 driver are written against this trait only;
/// substituting a stronger digest never touches the derivation logic.
///
/// # Contract
///
/// - `HASH_LEN <= 64` and `BLOCK_LEN <= 128`, the bounds the engine's
///   fixed buffers are sized for.
/// - `finalize_into` writes exactly `HASH_LEN` bytes and zeroizes the
///   provider's internal state (hash words, block buffer, length
///   counters) before returning.
/// - Identical update sequences always produce identical output.
pub trait BlockDigest {
    /// Digest output length in bytes.
    const HASH_LEN: usize;

    /// Internal block length in bytes.
    const BLOCK_LEN: usize;

    /// Create a fresh digest state.
    fn new() -> Self;

    /// Absorb message bytes.
    fn update(&mut self, data: &[u8]);

    /// Finalize into `out[..HASH_LEN]`, consuming and zeroizing the state.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != HASH_LEN`.
    fn finalize_into(self, out: &mut [u8]);
}
