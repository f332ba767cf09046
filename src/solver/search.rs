// MD5 Chess - Free and Open Source Software Statement
//
// This project, md5chess, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/solver/search.rs
// Version: 1.2.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains the prefix search hot loop for md5chess, located in the
// solver subdirectory. It walks indices upward from a starting point, hashing
// door id + index until a digest begins with "00000".
//
// Tree Location:
// - src/solver/search.rs (prefix search)
// - Depends on: core::digest, solver::stats

use crate::core::{has_zero_prefix, md5_hex, HashMatch, ZERO_PREFIX};
use crate::solver::stats::SearchStats;
use std::fmt::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::trace;

/// Get the next "00000"-prefixed hash, starting at `start_index`.
///
/// Returns the un-prefixed hex digest and the next unprocessed index (where
/// the following call should resume).
///
/// There is no upper bound on the number of indices tried. Matches occur
/// about once every 16^5 indices, but the loop never gives up on its own;
/// use [`next_hash_until`] when the caller needs a way out.
pub fn next_hash(door: &str, start_index: u64) -> (String, u64) {
    let mut search = HashSearch::new(door, start_index);
    let hit = search.find_next();
    (hit.remainder, search.next_index())
}

/// Same as [`next_hash`], but gives up with `None` once `stop` is set.
///
/// The flag is checked between trials, so the search stops after at most one
/// more digest.
pub fn next_hash_until(door: &str, start_index: u64, stop: &AtomicBool) -> Option<(String, u64)> {
    let mut search = HashSearch::new(door, start_index);
    let hit = search.find_next_until(stop)?;
    Some((hit.remainder, search.next_index()))
}

/// Resumable sequential search over the qualifying digests of one door.
///
/// Every index is tried exactly once, in increasing order. As an
/// [`Iterator`] it never returns `None`.
#[derive(Debug)]
pub struct HashSearch<'a> {
    door: &'a str,
    index: u64,
    input: String,
    stats: SearchStats,
}

impl<'a> HashSearch<'a> {
    pub fn new(door: &'a str, start_index: u64) -> Self {
        Self {
            door,
            index: start_index,
            input: String::with_capacity(door.len() + 20),
            stats: SearchStats::new(),
        }
    }

    /// Next index that has not been tried yet.
    ///
    /// The counter wraps to 0 after `u64::MAX`.
    pub fn next_index(&self) -> u64 {
        self.index
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Scan forward until the next qualifying digest. May run forever.
    pub fn find_next(&mut self) -> HashMatch {
        loop {
            if let Some(hit) = self.try_index() {
                return hit;
            }
        }
    }

    /// Scan forward until the next qualifying digest or until `stop` is set.
    pub fn find_next_until(&mut self, stop: &AtomicBool) -> Option<HashMatch> {
        loop {
            if stop.load(Ordering::Relaxed) {
                return None;
            }
            if let Some(hit) = self.try_index() {
                return Some(hit);
            }
        }
    }

    /// Hash the current index and advance past it
    fn try_index(&mut self) -> Option<HashMatch> {
        let index = self.index;
        self.input.clear();
        self.input.push_str(self.door);
        write!(self.input, "{}", index).expect("writing to a String cannot fail");

        let hash = md5_hex(&self.input);
        self.index = self.index.wrapping_add(1);
        self.stats.hashes_computed += 1;

        if !has_zero_prefix(&hash) {
            return None;
        }

        self.stats.record_match();
        trace!("match at index {}: {}", index, hash);
        Some(HashMatch {
            remainder: hash[ZERO_PREFIX.len()..].to_string(),
            index,
        })
    }
}

impl Iterator for HashSearch<'_> {
    type Item = HashMatch;

    fn next(&mut self) -> Option<HashMatch> {
        Some(self.find_next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_flag_set_before_start() {
        let stop = AtomicBool::new(true);
        let mut search = HashSearch::new("abc", 0);
        assert_eq!(search.find_next_until(&stop), None);
        assert_eq!(search.next_index(), 0, "No index should be consumed");
        assert_eq!(search.stats().hashes_computed, 0);
    }

    #[test]
    fn test_try_index_advances_once() {
        let mut search = HashSearch::new("abc", 41);
        assert!(search.try_index().is_none());
        assert_eq!(search.next_index(), 42);
        assert_eq!(search.stats().hashes_computed, 1);
        assert_eq!(search.stats().matches_found, 0);
    }

    #[test]
    fn test_try_index_wraps_at_max() {
        let mut search = HashSearch::new("abc", u64::MAX);
        let _ = search.try_index();
        assert_eq!(search.next_index(), 0);
        assert_eq!(search.stats().hashes_computed, 1);
    }

    #[test]
    fn test_try_index_at_known_match() {
        let mut search = HashSearch::new("abc", 3231929);
        let hit = search.try_index().expect("abc3231929 should match");
        assert_eq!(hit.index, 3231929);
        assert!(hit.remainder.starts_with("15"));
        assert_eq!(search.stats().matches_found, 1);
    }
}

// Changelog:
// - v1.2.0: Index counter wraps instead of overflowing at u64::MAX.
// - v1.1.0: Added cancellable search.
//   - Added find_next_until and next_hash_until, checking a stop flag between trials.
//   - Reuses one input buffer for every candidate string.
// - v1.0.0: Initial implementation.
//   - Purpose: next_hash and the HashSearch iterator.
