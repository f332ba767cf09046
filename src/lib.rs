// MD5 Chess - Free and Open Source Software Statement
//
// This project, md5chess, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file serves as the main library entry point for md5chess, located at
// the root of the source tree. It exports all public modules and types that
// the binary and the integration tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, solver, utils

pub mod core;
pub mod solver;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::core::{md5_hex, Args, Part};
pub use crate::solver::{find_password_1, find_password_2, next_hash, solve};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Changelog:
// - v1.1.0: Added solve() and Part re-exports for the binary.
// - v1.0.0: Initial library layout.
//   - Purpose: Establishes the library root, organizing the project into core,
//     solver, and utils modules.
