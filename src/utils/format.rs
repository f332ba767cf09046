// MD5 Chess - Free and Open Source Software Statement
//
// This project, md5chess, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.2.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides utility functions for formatting search statistics in
// md5chess, located in the utils subdirectory. It formats hashrate, elapsed
// time for consistent log output.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

use std::time::Duration;

/// Utility functions for formatting search statistics
pub struct FormatUtils;

impl FormatUtils {
    /// Format hashrate in appropriate units (H/s, KH/s, MH/s, GH/s)
    pub fn format_hashrate(hashrate: f64) -> String {
        const UNITS: [(f64, &str); 3] = [(1e9, "GH/s"), (1e6, "MH/s"), (1e3, "KH/s")];

        match UNITS.iter().find(|(scale, _)| hashrate >= *scale) {
            Some((scale, unit)) => format!("{:.2} {}", hashrate / scale, unit),
            None => format!("{:.2} H/s", hashrate),
        }
    }

    /// Format a timer reading (milliseconds, seconds, minutes, hours)
    pub fn format_elapsed(duration: Duration) -> String {
        let secs = duration.as_secs();
        if secs == 0 {
            format!("{}ms", duration.as_millis())
        } else if secs < 60 {
            format!("{:.2}s", duration.as_secs_f64())
        } else if secs < 3600 {
            format!("{}m{:02}s", secs / 60, secs % 60)
        } else {
            format!("{}h{:02}m", secs / 3600, (secs % 3600) / 60)
        }
    }
}

// Changelog:
// - v1.2.0: Table-driven hashrate units; dropped format_number.
// - v1.1.0: Replaced format_duration with format_elapsed.
//   - Timers are printed as elapsed time rather than "ago".
// - v1.0.0: Initial formatting helpers.
//   - Purpose: Consistent, human-readable output for hashrate and counts.
