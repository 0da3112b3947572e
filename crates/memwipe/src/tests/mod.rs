// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{
    fast_zeroize_slice, fast_zeroize_vec, hex_to_bytes, is_slice_zeroized, is_vec_fully_zeroized,
    zeroize_primitive,
};

#[test]
fn test_fast_zeroize_slice_bytes() {
    let mut buf = [0xFFu8; 64];
    fast_zeroize_slice(&mut buf);
    assert!(is_slice_zeroized(&buf));
}

#[test]
fn test_fast_zeroize_slice_words() {
    let mut words = [0xDEADBEEFu32; 16];
    fast_zeroize_slice(&mut words);
    assert!(words.iter().all(|&w| w == 0));
}

#[test]
fn test_fast_zeroize_slice_empty() {
    let mut buf: [u8; 0] = [];
    fast_zeroize_slice(&mut buf);
    assert!(is_slice_zeroized(&buf));
}

#[test]
fn test_fast_zeroize_vec_covers_spare_capacity() {
    let mut vec = vec![0xABu8; 100];
    vec.truncate(10);

    // Spare capacity [10..100] still holds the old pattern
    assert!(!is_vec_fully_zeroized(&vec));

    fast_zeroize_vec(&mut vec);
    assert!(is_vec_fully_zeroized(&vec));
}

#[test]
fn test_fast_zeroize_vec_unallocated() {
    let mut vec: Vec<u8> = Vec::new();
    fast_zeroize_vec(&mut vec);
    assert!(is_vec_fully_zeroized(&vec));
}

#[test]
fn test_zeroize_primitive() {
    let mut count = 4096u32;
    zeroize_primitive(&mut count);
    assert_eq!(count, 0);

    let mut len = usize::MAX;
    zeroize_primitive(&mut len);
    assert_eq!(len, 0);
}

#[test]
fn test_is_slice_zeroized_detects_stragglers() {
    let mut buf = [0u8; 32];
    assert!(is_slice_zeroized(&buf));

    buf[31] = 1;
    assert!(!is_slice_zeroized(&buf));
}

#[test]
fn test_hex_to_bytes() {
    assert_eq!(hex_to_bytes(""), Vec::<u8>::new());
    assert_eq!(hex_to_bytes("00ff7f"), vec![0x00, 0xFF, 0x7F]);
    assert_eq!(
        hex_to_bytes("0c60c80f961f0e71f3a9b524af6012062fe037a6"),
        vec![
            0x0c, 0x60, 0xc8, 0x0f, 0x96, 0x1f, 0x0e, 0x71, 0xf3, 0xa9, 0xb5, 0x24, 0xaf, 0x60,
            0x12, 0x06, 0x2f, 0xe0, 0x37, 0xa6
        ]
    );
}
