// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for the HMAC engine

use memwipe::hex_to_bytes;

use crate::hmac::Hmac;
use crate::sha1::Sha1;
use crate::sha256::Sha256;

fn hmac_sha1(key: &[u8], message: &[u8]) -> [u8; 20] {
    let mut mac = Hmac::<Sha1>::new(key);
    let mut out = [0u8; 20];
    mac.mac(message, &mut out);
    out
}

/// Test vector from RFC 2202 Section 3, case 1
#[test]
fn test_hmac_sha1_basic() {
    assert_eq!(
        hmac_sha1(&[0x0b; 20], b"Hi There").to_vec(),
        hex_to_bytes("b617318655057264e28bc0b6fb378c8ef146be00")
    );
}

/// Test vector from RFC 2202 Section 3, case 2 (key shorter than digest)
#[test]
fn test_hmac_sha1_short_key() {
    assert_eq!(
        hmac_sha1(b"Jefe", b"what do ya want for nothing?").to_vec(),
        hex_to_bytes("effcdf6ae5eb2fa2d27416d5f184df9c259a7c79")
    );
}

/// Test vector from RFC 2202 Section 3, case 3
#[test]
fn test_hmac_sha1_binary_data() {
    assert_eq!(
        hmac_sha1(&[0xaa; 20], &[0xdd; 50]).to_vec(),
        hex_to_bytes("125d7342b9ac11cd91a39af48aa17b4f63f175d3")
    );
}

/// Test vector from RFC 2202 Section 3, case 4 (25-byte key)
#[test]
fn test_hmac_sha1_key_between_digest_and_block() {
    let key: Vec<u8> = (1..=25).collect();
    assert_eq!(
        hmac_sha1(&key, &[0xcd; 50]).to_vec(),
        hex_to_bytes("4c9007f4026250c6bc8414f9bf50c86c2d7235da")
    );
}

/// Test vector from RFC 2202 Section 3, case 5
#[test]
fn test_hmac_sha1_truncation_vector() {
    assert_eq!(
        hmac_sha1(&[0x0c; 20], b"Test With Truncation").to_vec(),
        hex_to_bytes("4c1a03424b55e07fe7f27be1d58bb9324a9a5a04")
    );
}

/// 80-byte key exceeds the 64-byte block, exercising the hashed-key branch
#[test]
fn test_hmac_sha1_key_longer_than_block() {
    assert_eq!(
        hmac_sha1(
            &[0xaa; 80],
            b"Test Using Larger Than Block-Size Key - Hash is One Block Long"
        )
        .to_vec(),
        hex_to_bytes("2fb774700193f3f0c66fe90d015e9770becf4b60")
    );
}

/// Test vector from RFC 2202 Section 3, case 7 (long key and long data)
#[test]
fn test_hmac_sha1_long_key_long_data() {
    assert_eq!(
        hmac_sha1(
            &[0xaa; 80],
            b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data"
        )
        .to_vec(),
        hex_to_bytes("e8e99d0f45237d786d6bbaa7965c7808bbff1a91")
    );
}

/// Test vector from RFC 4231 Section 4.2 (HMAC-SHA256)
#[test]
fn test_hmac_sha256_basic() {
    let mut mac = Hmac::<Sha256>::new(&[0x0b; 20]);
    let mut out = [0u8; 32];
    mac.mac(b"Hi There", &mut out);

    assert_eq!(
        out.to_vec(),
        hex_to_bytes("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7")
    );
}

/// Test vector from RFC 4231 Section 4.3 (HMAC-SHA256, short key)
#[test]
fn test_hmac_sha256_short_key() {
    let mut mac = Hmac::<Sha256>::new(b"Jefe");
    let mut out = [0u8; 32];
    mac.mac(b"what do ya want for nothing?", &mut out);

    assert_eq!(
        out.to_vec(),
        hex_to_bytes("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
    );
}

/// Streaming parts must be equivalent to the concatenated message
#[test]
fn test_hmac_parts_match_concatenation() {
    let mut mac = Hmac::<Sha1>::new(b"key material");

    let mut split = [0u8; 20];
    mac.mac_parts(&[b"salt bytes", &7u32.to_be_bytes()], &mut split);

    let mut joined = Vec::new();
    joined.extend_from_slice(b"salt bytes");
    joined.extend_from_slice(&7u32.to_be_bytes());

    let mut whole = [0u8; 20];
    mac.mac(&joined, &mut whole);

    assert_eq!(split, whole);
}

/// A keyed state must produce identical output across repeated messages
#[test]
fn test_hmac_keyed_state_is_reusable() {
    let mut mac = Hmac::<Sha1>::new(b"reused key");

    let mut first = [0u8; 20];
    let mut second = [0u8; 20];
    mac.mac(b"message", &mut first);
    mac.mac(b"message", &mut second);

    assert_eq!(first, second);
    assert_eq!(first, hmac_sha1(b"reused key", b"message"));
}
