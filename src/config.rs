//! Limiter configuration.

use crate::error::ConfigError;
use std::time::Duration;

/// Configuration for a [`RateLimiter`](crate::RateLimiter).
///
/// Both parameters are fixed once a limiter is built from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum admissions per sliding window.
    pub max_calls: usize,
    /// Length of the sliding window.
    pub time_period: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_calls: 1,
            time_period: Duration::from_secs(1),
        }
    }
}

impl RateLimitConfig {
    /// Create a config admitting `max_calls` per `time_period`.
    pub fn new(max_calls: usize, time_period: Duration) -> Self {
        Self {
            max_calls,
            time_period,
        }
    }

    /// Set the admission quota.
    pub fn max_calls(mut self, n: usize) -> Self {
        self.max_calls = n;
        self
    }

    /// Set the window length.
    pub fn time_period(mut self, period: Duration) -> Self {
        self.time_period = period;
        self
    }

    /// Quota of `n` admissions per second.
    pub fn per_second(n: usize) -> Self {
        Self::new(n, Duration::from_secs(1))
    }

    /// Quota of `n` admissions per minute.
    pub fn per_minute(n: usize) -> Self {
        Self::new(n, Duration::from_secs(60))
    }

    /// Check the parameters without building a limiter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMaxCalls`] or
    /// [`ConfigError::ZeroTimePeriod`] when the corresponding parameter is
    /// zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_calls == 0 {
            return Err(ConfigError::ZeroMaxCalls);
        }
        if self.time_period.is_zero() {
            return Err(ConfigError::ZeroTimePeriod);
        }
        Ok(())
    }
}
