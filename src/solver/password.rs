// MD5 Chess - Free and Open Source Software Statement
//
// This project, md5chess, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/solver/password.rs
// Version: 1.2.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file assembles door passwords from the stream of qualifying digests,
// located in the solver subdirectory. Part 1 appends characters left to
// right; part 2 places them at the position named by each digest.
//
// Tree Location:
// - src/solver/password.rs (password assemblers)
// - Depends on: solver::search, solver::stats

use crate::core::{HashMatch, Part};
use crate::solver::search::HashSearch;
use crate::solver::stats::SearchStats;
use tracing::debug;

/// Marker for a password position that has not been filled yet
pub const PLACEHOLDER: char = '_';

/// A finished password together with the statistics of the search behind it
#[derive(Debug, Clone)]
pub struct Solution {
    pub part: Part,
    pub password: String,
    pub stats: SearchStats,
}

/// Create a password buffer of `length` placeholders
pub fn password_buffer(length: usize) -> Vec<char> {
    vec![PLACEHOLDER; length]
}

/// Password built by one of the assemblers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    pub password: String,
    /// Characters written into the buffer
    pub placed: u64,
}

/// Find a password of a given length for a given door.
///
/// For each match, the first remainder character becomes the next password
/// character.
pub fn find_password_1(door: &str, length: usize) -> String {
    find_password(door, length, Part::FirstByte)
}

/// Find a password of a given length for a given door.
///
/// For each match, the second remainder character is placed at the position
/// given by the first, as long as that is a decimal digit below `length` and
/// the position is still empty.
///
/// Only positions 0-9 can ever be filled, so a `length` above 10 never
/// returns.
pub fn find_password_2(door: &str, length: usize) -> String {
    find_password(door, length, Part::Positional)
}

/// Find a password with the assembler selected by `part`
pub fn find_password(door: &str, length: usize, part: Part) -> String {
    solve(door, length, part).password
}

/// Run one assembler from index 0 and keep the search statistics
pub fn solve(door: &str, length: usize, part: Part) -> Solution {
    let mut search = HashSearch::new(door, 0);
    let assembled = match part {
        Part::FirstByte => assemble_first_byte(&mut search, length),
        Part::Positional => assemble_positional(&mut search, length),
    };
    let mut stats = search.stats().clone();
    stats.chars_placed = assembled.placed;
    Solution {
        part,
        password: assembled.password,
        stats,
    }
}

/// Build a part 1 password from any stream of matches.
///
/// Matches with an empty remainder are skipped.
pub fn assemble_first_byte<I>(matches: &mut I, length: usize) -> Assembled
where
    I: Iterator<Item = HashMatch>,
{
    let mut password = password_buffer(length);
    let mut placed = 0;

    while placed < length {
        let Some(hit) = matches.next() else {
            break;
        };
        let Some(ch) = hit.first_char() else {
            continue;
        };
        password[placed] = ch;
        placed += 1;
        debug!("pt1 partial: {}", render(&password));
    }
    Assembled {
        password: render(&password),
        placed: placed as u64,
    }
}

/// Build a part 2 password from any stream of matches.
///
/// Matches with fewer than two remainder characters are skipped.
pub fn assemble_positional<I>(matches: &mut I, length: usize) -> Assembled
where
    I: Iterator<Item = HashMatch>,
{
    let mut password = password_buffer(length);
    let mut found = 0;

    while found < length {
        let Some(hit) = matches.next() else {
            break;
        };
        let (Some(first), Some(second)) = (hit.first_char(), hit.second_char()) else {
            continue;
        };
        let Some(pos) = target_position(first, length) else {
            // not a number or out of range
            continue;
        };
        if password[pos] == PLACEHOLDER {
            password[pos] = second;
            found += 1;
            debug!("pt2 partial: {}", render(&password));
        }
    }
    Assembled {
        password: render(&password),
        placed: found as u64,
    }
}

/// Parse a single decimal digit as a password position below `length`.
///
/// Hex letters 'a'-'f' are not positions.
pub fn target_position(ch: char, length: usize) -> Option<usize> {
    ch.to_digit(10)
        .map(|digit| digit as usize)
        .filter(|&pos| pos < length)
}

fn render(password: &[char]) -> String {
    password.iter().collect()
}

// Changelog:
// - v1.2.0: Assemblers return Assembled with the placed count.
//   - Added find_password(part) dispatch; short remainders are skipped.
// - v1.1.0: Assemblers take any match iterator.
//   - Added solve() returning the password with its SearchStats.
//   - A finite iterator ends assembly early, leaving placeholders in place.
// - v1.0.0: Initial implementation.
//   - Purpose: find_password_1 and find_password_2.
