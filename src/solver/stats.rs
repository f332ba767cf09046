// MD5 Chess - Free and Open Source Software Statement
//
// This project, md5chess, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/solver/stats.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements statistics tracking for a single prefix search,
// located in the solver subdirectory. It counts digests computed and matches
// found, characters placed, and derives the hashrate from the elapsed time.
//
// Tree Location:
// - src/solver/stats.rs (search statistics)
// - Depends on: std

use crate::utils::format::FormatUtils;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SearchStats {
    pub hashes_computed: u64,
    pub matches_found: u64,
    /// Password characters written from those matches
    pub chars_placed: u64,
    start_time: Instant,
}

impl SearchStats {
    /// Create a new SearchStats instance, starting the clock now
    pub fn new() -> Self {
        Self {
            hashes_computed: 0,
            matches_found: 0,
            chars_placed: 0,
            start_time: Instant::now(),
        }
    }

    /// Record a digest that matched the zero prefix
    pub fn record_match(&mut self) {
        self.matches_found += 1;
    }

    /// Matches that did not place a character
    pub fn discarded(&self) -> u64 {
        self.matches_found.saturating_sub(self.chars_placed)
    }

    /// Time since the search started
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Average hashes per second since the search started
    pub fn hashrate(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.hashes_computed as f64 / elapsed
        } else {
            0.0
        }
    }

    /// One-line summary for log output
    pub fn summary(&self) -> String {
        format!(
            "{} hashes, {} matches ({} placed, {} discarded) in {} ({})",
            self.hashes_computed,
            self.matches_found,
            self.chars_placed,
            self.discarded(),
            FormatUtils::format_elapsed(self.elapsed()),
            FormatUtils::format_hashrate(self.hashrate()),
        )
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new()
    }
}
