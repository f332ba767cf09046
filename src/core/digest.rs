// MD5 Chess - Free and Open Source Software Statement
//
// This project, md5chess, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/digest.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the digest function used by the door password search,
// located in the core subdirectory of the md5chess source tree. It turns an
// input string into a lowercase hex MD5 digest and checks the zero prefix.
//
// Tree Location:
// - src/core/digest.rs (MD5 digest helpers)
// - Depends on: md-5, hex

use md5::{Digest, Md5};

/// Prefix a digest must start with to count as a match
pub const ZERO_PREFIX: &str = "00000";

/// Length of a hex-encoded 128-bit digest
pub const DIGEST_HEX_LEN: usize = 32;

/// Compute the MD5 digest of `input` as 32 lowercase hex characters
pub fn md5_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// Check whether a hex digest starts with the five-zero prefix
pub fn has_zero_prefix(digest_hex: &str) -> bool {
    digest_hex.starts_with(ZERO_PREFIX)
}

// Changelog:
// - v1.0.0: Initial implementation.
//   - Purpose: Provides md5_hex and the "00000" prefix test for the search loop.
//   - Note: Digesting never fails, so neither function returns a Result.
