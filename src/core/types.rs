// MD5 Chess - Free and Open Source Software Statement
//
// This project, md5chess, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.2.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines core data structures for md5chess, located in the core
// subdirectory. It includes the command-line arguments, the qualifying hash
// match produced by the search, and the password assembly variants.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, thiserror

use clap::Parser;
use std::fmt;
use thiserror::Error;

/// Longest password both assemblers can complete.
///
/// The positional variant reads a single decimal digit as the target
/// position, so only positions 0-9 can ever be filled.
pub const MAX_PASSWORD_LENGTH: usize = 10;

/// Password assembly variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// First remainder character appended left to right
    FirstByte,
    /// Second remainder character placed at the position named by the first
    Positional,
}

impl Part {
    /// Both variants, in output order
    pub const ALL: [Part; 2] = [Part::FirstByte, Part::Positional];

    /// Puzzle part number used in output and log lines
    pub fn number(self) -> u8 {
        match self {
            Part::FirstByte => 1,
            Part::Positional => 2,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Part {}", self.number())
    }
}

/// A qualifying digest found by the prefix search.
///
/// Matches from the search always carry 27 remainder characters; the
/// character accessors return `None` for shorter, hand-built ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashMatch {
    /// Hex digest with the "00000" prefix stripped (27 characters)
    pub remainder: String,
    /// Index whose digest matched
    pub index: u64,
}

impl HashMatch {
    /// Index to resume the search from
    ///
    /// Wraps to 0 after `u64::MAX`.
    pub fn next_index(&self) -> u64 {
        self.index.wrapping_add(1)
    }

    /// First remainder character (the "sixth" digest character)
    pub fn first_char(&self) -> Option<char> {
        self.remainder.chars().next()
    }

    /// Second remainder character (the "seventh" digest character)
    pub fn second_char(&self) -> Option<char> {
        self.remainder.chars().nth(1)
    }
}

/// Errors raised while validating command-line arguments
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("password length {0} is too long (maximum {max})", max = MAX_PASSWORD_LENGTH)]
    LengthTooLong(usize),
}

/// Command-line arguments for md5chess
#[derive(Parser, Debug)]
#[command(
    name = "md5chess",
    version,
    about = "Find a door password by hunting for 00000-prefixed MD5 digests",
    long_about = "md5chess computes MD5(door id + index) for index = 0, 1, 2, ... and\n\
                  collects every digest starting with \"00000\".\n\n\
                  Part 1: the sixth digest character of each match, in order.\n\
                  Part 2: the seventh character, placed at the position given by the sixth.\n\n\
                  Examples:\n\
                    md5chess --door abc\n\
                    md5chess --door ugkcyxxp --len 8 --debug"
)]
pub struct Args {
    /// Door id used as the hash seed
    #[arg(long, default_value = "abc", value_name = "ID", help = "Door id")]
    pub door: String,

    /// Number of password characters to find
    #[arg(long = "len", default_value = "8", value_name = "N", help = "Password length")]
    pub length: usize,

    /// Emit progress, timers and search statistics to stderr
    #[arg(long, default_value = "false", help = "Verbose output (progress, etc...)")]
    pub debug: bool,
}

impl Args {
    /// Validate arguments before any search starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length > MAX_PASSWORD_LENGTH {
            return Err(ConfigError::LengthTooLong(self.length));
        }
        Ok(())
    }
}


// Changelog:
// - v1.2.0: HashMatch accessors return Option; next_index wraps at u64::MAX.
// - v1.1.0: Added Part::ALL and ConfigError.
//   - Replaced string errors from validate() with a thiserror enum.
// - v1.0.0: Initial data structures.
//   - Purpose: Args (door, len, debug), HashMatch and Part.
