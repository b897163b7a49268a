//! Limiter error types.

use thiserror::Error;

/// Errors raised when a limiter is constructed from invalid parameters.
///
/// Construction is all-or-nothing: a rejected configuration never produces
/// a partially-usable limiter.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The admission quota was zero.
    #[error("max_calls must be greater than zero")]
    ZeroMaxCalls,

    /// The window length was zero.
    #[error("time_period must be a positive duration")]
    ZeroTimePeriod,
}
