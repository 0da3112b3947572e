// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2-HMAC implementation with secure memory handling
//!
//! Implementation per RFC 8018 (PBKDF2), RFC 2104 (HMAC), RFC 3174
//! (SHA-1) and RFC 6234 (SHA-256). All intermediate values are zeroized.
//!
//! The driver is generic over a digest provider, so the historical
//! SHA-1 instantiation and stronger digests share one PBKDF2 core:
//!
//! ```rust
//! use mempbkdf::{Sha1, derive_key_into};
//!
//! let mut key = [0u8; 20];
//! derive_key_into::<Sha1>(b"password", b"salt", 4096, &mut key).unwrap();
//! ```
//!
//! References:
//! - RFC 8018: PKCS #5 Password-Based Cryptography Specification v2.1
//!   <https://datatracker.ietf.org/doc/html/rfc8018>
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 3174: US Secure Hash Algorithm 1 (SHA1)
//!   <https://datatracker.ietf.org/doc/html/rfc3174>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod digest;
mod error;
mod hmac;
mod pbkdf2;
mod sha1;
mod sha256;

pub use digest::BlockDigest;
pub use error::Pbkdf2Error;
pub use pbkdf2::{derive_key, derive_key_into};
pub use sha1::Sha1;
pub use sha256::Sha256;
