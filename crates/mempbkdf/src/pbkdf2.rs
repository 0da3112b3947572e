// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2 driver per RFC 8018 Section 5.2

use alloc::vec::Vec;

use memwipe::fast_zeroize_slice;

use crate::digest::{BlockDigest, MAX_HASH_LEN};
use crate::error::Pbkdf2Error;
use crate::hmac::Hmac;

/// Validate derivation parameters before any cryptographic work.
///
/// Rejection must happen up front: no partial allocation, no partial
/// secret exposure, and never a silently "corrected" security parameter.
fn validate<D: BlockDigest>(
    salt: &[u8],
    rounds: u32,
    out_len: usize,
) -> Result<(), Pbkdf2Error> {
    if rounds < 1 {
        return Err(Pbkdf2Error::InvalidIterationCount);
    }

    if out_len == 0 {
        return Err(Pbkdf2Error::InvalidOutputLength);
    }

    // Block counter is a 4-byte big-endian integer starting at 1, so at
    // most 2^32 - 1 digest blocks of output exist (RFC 8018 Section 5.2)
    if out_len.div_ceil(D::HASH_LEN) > u32::MAX as usize {
        return Err(Pbkdf2Error::InvalidOutputLength);
    }

    if salt.is_empty() || salt.len() > usize::MAX - 4 {
        return Err(Pbkdf2Error::InvalidSalt);
    }

    Ok(())
}

/// PBKDF2: derive `out.len()` bytes of key material into a caller buffer.
///
/// Per RFC 8018 Section 5.2, parameterized over the HMAC digest. Output
/// block `T(count)` is the XOR fold of the serial chain
/// `U_1 = HMAC(password, salt || BE32(count))`,
/// `U_i = HMAC(password, U_{i-1})` over `rounds` evaluations; the chain
/// is what makes the work factor non-shortcuttable.
///
/// On validation failure no byte of `out` is written. All intermediate
/// secret buffers are zeroized before return.
///
/// # Arguments
/// * `password` - Secret passphrase (never mutated, never logged)
/// * `salt` - Public per-derivation salt, non-empty
/// * `rounds` - Iteration count, at least 1; tunable work factor
/// * `out` - Output buffer, non-empty; filled completely on `Ok`
///
/// # Errors
/// [`Pbkdf2Error::InvalidIterationCount`], [`Pbkdf2Error::InvalidOutputLength`]
/// or [`Pbkdf2Error::InvalidSalt`] when the corresponding parameter is
/// out of range.
pub fn derive_key_into<D: BlockDigest>(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    out: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    validate::<D>(salt, rounds, out.len())?;

    // Key pads are computed once and zeroized when prf drops
    let mut prf = Hmac::<D>::new(password);

    let mut u_prev = [0u8; MAX_HASH_LEN];
    let mut u_next = [0u8; MAX_HASH_LEN];
    let mut t = [0u8; MAX_HASH_LEN];

    let mut count: u32 = 1;
    let mut offset = 0;

    while offset < out.len() {
        // U_1 = HMAC(password, salt || BE32(count))
        prf.mac_parts(&[salt, &count.to_be_bytes()], &mut u_prev[..D::HASH_LEN]);
        t[..D::HASH_LEN].copy_from_slice(&u_prev[..D::HASH_LEN]);

        // U_i = HMAC(password, U_{i-1}); T ^= U_i
        for _ in 1..rounds {
            prf.mac(&u_prev[..D::HASH_LEN], &mut u_next[..D::HASH_LEN]);
            u_prev[..D::HASH_LEN].copy_from_slice(&u_next[..D::HASH_LEN]);

            for j in 0..D::HASH_LEN {
                t[j] ^= u_prev[j];
            }
        }

        // Append min(remaining, HASH_LEN) bytes of T
        let take = core::cmp::min(D::HASH_LEN, out.len() - offset);
        out[offset..offset + take].copy_from_slice(&t[..take]);
        offset += take;

        count = count.wrapping_add(1);

        // U and T are partial key material; erase before the next block
        fast_zeroize_slice(&mut u_prev);
        fast_zeroize_slice(&mut u_next);
        fast_zeroize_slice(&mut t);
    }

    Ok(())
}

/// PBKDF2: derive `out_len` bytes of key material into an owned buffer.
///
/// Owned-output convenience over [`derive_key_into`]. The buffer is
/// obtained with a fallible reservation so allocation failure is
/// reported as [`Pbkdf2Error::AllocationFailure`] instead of aborting,
/// and no partially-valid key is ever returned.
///
/// # Errors
/// The validation errors of [`derive_key_into`], plus
/// [`Pbkdf2Error::AllocationFailure`] when storage cannot be obtained.
pub fn derive_key<D: BlockDigest>(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    out_len: usize,
) -> Result<Vec<u8>, Pbkdf2Error> {
    // Parameters first, so an invalid request never allocates
    validate::<D>(salt, rounds, out_len)?;

    let mut out = Vec::new();
    out.try_reserve_exact(out_len)
        .map_err(|_| Pbkdf2Error::AllocationFailure)?;
    out.resize(out_len, 0);

    derive_key_into::<D>(password, salt, rounds, &mut out)?;

    Ok(out)
}
