// MD5 Chess - Free and Open Source Software Statement
//
// This project, md5chess, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the core functionality of md5chess,
// located in the core subdirectory. It declares submodules and re-exports
// key types for use throughout the project.

pub mod digest;
pub mod types;

// Re-export the most commonly used items
pub use digest::{has_zero_prefix, md5_hex, DIGEST_HEX_LEN, ZERO_PREFIX};
pub use types::{Args, ConfigError, HashMatch, Part, MAX_PASSWORD_LENGTH};
