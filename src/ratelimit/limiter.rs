//! Core window rate limiter implementation.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Local};
use parking_lot::Mutex;
use tracing::{debug, trace};

use super::window::TimeUnit;
use crate::error::{Error, Result};

/// A rate limiter that admits at most `limit` requests per calendar-aligned
/// time window.
///
/// The limiter is shared by all callers of a client: the in-window counter is
/// incremented with a lock-free atomic, and only the window-reset transition
/// takes a mutex. The reset is detected lazily, on the first `permit` call
/// whose window key differs from the stored one.
///
/// This struct is thread-safe and can be shared across multiple tasks.
pub struct WindowRateLimiter {
    /// Window granularity
    unit: TimeUnit,
    /// Maximum requests admitted per window
    limit: u32,
    /// Requests counted in the current window
    count: AtomicU32,
    /// Key of the window the count belongs to
    current_window: AtomicU32,
    /// Guards the reset transition; never held on the admit fast path
    reset_lock: Mutex<()>,
}

impl WindowRateLimiter {
    /// Create a new rate limiter admitting `limit` requests per `unit` window.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero.
    pub fn new(unit: TimeUnit, limit: u32) -> Self {
        assert!(limit > 0, "request limit must be greater than zero");
        Self {
            unit,
            limit,
            count: AtomicU32::new(0),
            current_window: AtomicU32::new(unit.window_key(Local::now())),
            reset_lock: Mutex::new(()),
        }
    }

    /// Request admission for one unit of work.
    ///
    /// Returns `Ok(())` if the call is within the limit for the current
    /// window, or [`Error::RateLimitExceeded`] otherwise. Every call,
    /// admitted or not, counts against the window: the quota tracks
    /// attempts, not successes.
    pub fn permit(&self) -> Result<()> {
        self.permit_at(Local::now())
    }

    fn permit_at(&self, now: DateTime<Local>) -> Result<()> {
        let key = self.unit.window_key(now);

        // Double-checked reset: cheap read outside the lock, re-check inside
        // before mutating, so concurrent callers reset the window once.
        if self.current_window.load(Ordering::Acquire) != key {
            let _guard = self.reset_lock.lock();
            if self.current_window.load(Ordering::Acquire) != key {
                debug!(window = key, unit = %self.unit, "Window rolled over, resetting count");
                self.count.store(0, Ordering::Release);
                self.current_window.store(key, Ordering::Release);
            }
        }

        let admitted = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        trace!(
            window = key,
            count = admitted,
            limit = self.limit,
            "Checking rate limit"
        );

        if admitted > self.limit {
            debug!(window = key, limit = self.limit, "Rate limit exceeded");
            return Err(Error::RateLimitExceeded {
                limit: self.limit,
                unit: self.unit,
            });
        }
        Ok(())
    }

    /// Get the configured per-window limit.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Get the window granularity.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Get the number of requests counted in the current window.
    pub fn current_count(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }
}
