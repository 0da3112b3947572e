// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// PBKDF2 derivation error.
///
/// All parameter validation happens before any cryptographic work; an
/// invalid security parameter is rejected, never silently corrected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pbkdf2Error {
    /// Iteration count is below 1.
    #[error("iteration count must be at least 1")]
    InvalidIterationCount,

    /// Requested output is empty or exceeds 2^32 - 1 digest blocks.
    #[error("requested output length is zero or exceeds 2^32 - 1 digest blocks")]
    InvalidOutputLength,

    /// Salt is empty, or too long for the 4-byte block counter suffix.
    #[error("salt is empty or too long to append the 4-byte block counter")]
    InvalidSalt,

    /// Storage for the derived key could not be obtained.
    #[error("derived key buffer allocation failed")]
    AllocationFailure,
}
