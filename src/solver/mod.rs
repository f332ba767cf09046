// MD5 Chess - Free and Open Source Software Statement
//
// This project, md5chess, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/solver/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the password solver of md5chess,
// located in the solver subdirectory. It declares submodules and re-exports
// key types for use throughout the project.
//
// Tree Location:
// - src/solver/mod.rs (solver module entry point)
// - Submodules: search, password, stats

pub mod password;
pub mod search;
pub mod stats;

// Re-export key types for convenience
pub use password::{
    find_password, find_password_1, find_password_2, password_buffer, solve, Assembled, Solution,
    PLACEHOLDER,
};
pub use search::{next_hash, next_hash_until, HashSearch};
pub use stats::SearchStats;
