// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Optimizer-resistant zeroization primitives and verification probes.
//!
//! Key material that has been consumed must not survive in memory, and the
//! erasing store must not be removable by the optimizer as dead code. The
//! functions here pair `write_bytes` (memset) with a volatile read, or use
//! volatile writes directly, so the compiler cannot prove the overwrite
//! unobservable.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;

#[cfg(test)]
mod tests;

/// Zeroizes a slice of any element type.
///
/// Uses `write_bytes` (memset) followed by a volatile read so the store
/// cannot be elided. Valid only for element types where all-zeros is a
/// valid bit pattern; callers in this workspace use it on integers and
/// byte buffers.
///
/// # Example
///
/// ```
/// use memwipe::fast_zeroize_slice;
///
/// let mut key = [0xA5u8; 20];
/// fast_zeroize_slice(&mut key);
/// assert!(key.iter().all(|&b| b == 0));
/// ```
#[inline(always)]
pub fn fast_zeroize_slice<T>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }

    let byte_len = core::mem::size_of_val(slice);
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr() as *mut u8, 0, byte_len);
        // Volatile read prevents the optimizer from removing the write_bytes
        core::ptr::read_volatile(slice.as_ptr() as *const u8);
    }
    core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
}

/// Zeroizes a `Vec`'s entire allocation, spare capacity included.
///
/// `truncate()` and `clear()` leave old bytes between `len` and `capacity`;
/// this erases the full region from index 0 to `capacity`.
///
/// # Example
///
/// ```
/// use memwipe::{fast_zeroize_vec, is_vec_fully_zeroized};
///
/// let mut buf = vec![0xFFu8; 64];
/// buf.truncate(8);
/// fast_zeroize_vec(&mut buf);
/// assert!(is_vec_fully_zeroized(&buf));
/// ```
#[inline(always)]
pub fn fast_zeroize_vec<T>(vec: &mut Vec<T>) {
    if vec.capacity() == 0 {
        return;
    }

    let byte_len = vec.capacity() * core::mem::size_of::<T>();
    unsafe {
        core::ptr::write_bytes(vec.as_mut_ptr() as *mut u8, 0, byte_len);
        // Volatile read prevents the optimizer from removing the write_bytes
        core::ptr::read_volatile(vec.as_ptr() as *const u8);
    }
    core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
}

/// Zeroizes a single primitive value with a volatile write.
///
/// Sound for all primitive types where all-zeros is a valid
/// representation: integers, bool, floats, char.
///
/// # Example
///
/// ```
/// use memwipe::zeroize_primitive;
///
/// let mut counter = 4096u32;
/// zeroize_primitive(&mut counter);
/// assert_eq!(counter, 0);
/// ```
#[inline(always)]
pub fn zeroize_primitive<T>(val: &mut T) {
    unsafe {
        core::ptr::write_volatile(val, core::mem::zeroed());
    }
    core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
}

/// Returns `true` if every byte of the slice is zero.
///
/// # Example
///
/// ```
/// use memwipe::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 16]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Returns `true` if a `Vec<u8>`'s whole allocation is zero, spare
/// capacity included.
///
/// Reads the region between `len` and `capacity` as raw bytes; `Vec`
/// guarantees the allocation is valid for `capacity` bytes and the region
/// is only read, never written.
#[inline(never)]
pub fn is_vec_fully_zeroized(vec: &Vec<u8>) -> bool {
    let cap = vec.capacity();
    let base = vec.as_ptr();

    for i in 0..cap {
        unsafe {
            if *base.add(i) != 0 {
                return false;
            }
        }
    }

    true
}

/// Parses a hexadecimal string into bytes.
///
/// Used by test-vector tables. The string must have even length and
/// contain only hex digits.
///
/// # Panics
///
/// Panics on odd length or non-hex characters.
///
/// # Example
///
/// ```
/// use memwipe::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("0c60c80f"), vec![0x0c, 0x60, 0xc8, 0x0f]);
/// ```
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}
