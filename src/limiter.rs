//! Sliding-window admission control.

use crate::config::RateLimitConfig;
use crate::error::ConfigError;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Admission gate enforcing at most `max_calls` admissions in any trailing
/// window of `time_period`.
///
/// Concurrent tasks share one limiter (usually behind an `Arc`) and call
/// [`acquire`](Self::acquire) before each unit of rate-limited work.
/// Admission decisions are serialized behind an internal lock; a caller
/// that would exceed the quota is suspended until the oldest admission ages
/// out of the window, with the lock released for the duration of the wait.
///
/// Admission order across suspended callers is not strictly FIFO (the
/// waiter that re-takes the lock first wins), but no caller starves while
/// time advances: every waiter's deadline shrinks as the oldest entry ages.
pub struct RateLimiter {
    max_calls: usize,
    time_period: Duration,
    call_log: Mutex<VecDeque<Instant>>,
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("max_calls", &self.max_calls)
            .field("time_period", &self.time_period)
            .finish_non_exhaustive()
    }
}

impl RateLimiter {
    /// Create a limiter admitting `max_calls` per `time_period`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `max_calls` or `time_period` is zero.
    pub fn new(max_calls: usize, time_period: Duration) -> Result<Self, ConfigError> {
        Self::from_config(RateLimitConfig::new(max_calls, time_period))
    }

    /// Create a limiter from a [`RateLimitConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the config fails validation.
    pub fn from_config(config: RateLimitConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            max_calls: config.max_calls,
            time_period: config.time_period,
            call_log: Mutex::new(VecDeque::new()),
        })
    }

    /// Admission quota per window.
    pub fn max_calls(&self) -> usize {
        self.max_calls
    }

    /// Window length.
    pub fn time_period(&self) -> Duration {
        self.time_period
    }

    /// Wait until the caller may proceed.
    ///
    /// On return, exactly one admission timestamp has been recorded for
    /// this caller. A suspended caller is released as soon as the oldest
    /// admission leaves the window, not on a polling cadence.
    ///
    /// Dropping the future while it is suspended records nothing: a
    /// cancelled caller consumes no slot and holds no lock.
    pub async fn acquire(&self) {
        loop {
            let mut calls = self.call_log.lock().await;
            let now = Instant::now();
            self.prune(&mut calls, now);

            if calls.len() < self.max_calls {
                calls.push_back(now);
                return;
            }

            // Window full: sleep until the oldest admission expires, then
            // re-run the whole check. Another waiter may have taken the
            // freed slot in the meantime, so admission is never assumed
            // after the sleep. A full log is never empty (max_calls >= 1),
            // and a surviving front entry is strictly younger than the
            // window, so `wait` is always positive.
            let wait = match calls.front() {
                Some(&oldest) => (oldest + self.time_period).saturating_duration_since(now),
                None => Duration::ZERO,
            };
            drop(calls);

            debug!(wait_ms = wait.as_millis(), "Rate limit reached, waiting for a slot");
            sleep(wait).await;
        }
    }

    /// Attempt to proceed without waiting.
    ///
    /// Records an admission and returns `true` when the window has a free
    /// slot, returns `false` otherwise.
    pub async fn try_acquire(&self) -> bool {
        let mut calls = self.call_log.lock().await;
        let now = Instant::now();
        self.prune(&mut calls, now);

        if calls.len() < self.max_calls {
            calls.push_back(now);
            true
        } else {
            false
        }
    }

    /// Number of admissions currently inside the sliding window.
    pub async fn window_usage(&self) -> usize {
        let mut calls = self.call_log.lock().await;
        self.prune(&mut calls, Instant::now());
        calls.len()
    }

    /// Drop entries that have aged out of the window. An entry exactly
    /// `time_period` old is expired.
    fn prune(&self, calls: &mut VecDeque<Instant>, now: Instant) {
        while let Some(&oldest) = calls.front() {
            if now.duration_since(oldest) >= self.time_period {
                calls.pop_front();
            } else {
                break;
            }
        }
    }
}
