//! Time window granularities and window key computation.

use chrono::{DateTime, Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};

/// Granularity of the rate limiting window.
///
/// A window is identified by a calendar field of the wall clock (for example
/// the second-of-minute for [`TimeUnit::Second`]), not by elapsed time since
/// some origin. Two calls observed while that field holds the same value
/// belong to the same window. This means windows roll over exactly at clock
/// boundaries, but it is not a sliding window: two calls a few milliseconds
/// apart that straddle a boundary land in different windows, and
/// [`TimeUnit::Day`] buckets wrap with the day-of-month at month end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Per-nanosecond rate limiting
    Nanosecond,
    /// Per-microsecond rate limiting
    Microsecond,
    /// Per-millisecond rate limiting
    Millisecond,
    /// Per-second rate limiting
    Second,
    /// Per-minute rate limiting
    Minute,
    /// Per-hour rate limiting
    Hour,
    /// Per-day rate limiting
    Day,
}

impl TimeUnit {
    /// Compute the window key for a point in time.
    ///
    /// The key is the calendar field of `now` that corresponds to this
    /// granularity: nano-of-second, micro-of-second, milli-of-second,
    /// second-of-minute, minute-of-hour, hour-of-day or day-of-month.
    pub fn window_key(&self, now: DateTime<Local>) -> u32 {
        match self {
            TimeUnit::Nanosecond => now.nanosecond(),
            TimeUnit::Microsecond => now.nanosecond() / 1_000,
            TimeUnit::Millisecond => now.nanosecond() / 1_000_000,
            TimeUnit::Second => now.second(),
            TimeUnit::Minute => now.minute(),
            TimeUnit::Hour => now.hour(),
            TimeUnit::Day => now.day(),
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TimeUnit::Nanosecond => "nanosecond",
            TimeUnit::Microsecond => "microsecond",
            TimeUnit::Millisecond => "millisecond",
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
        };
        write!(f, "{}", name)
    }
}
