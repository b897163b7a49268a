//! # rate-gate
//!
//! Sliding-window admission control for async tasks.
//!
//! A [`RateLimiter`] records the timestamp of every admission and gates
//! concurrent callers so that no more than `max_calls` admissions happen in
//! any trailing window of `time_period`. A caller over the quota is
//! suspended until the oldest admission ages out of the window.
//!
//! ## Core Concepts
//!
//! - **[`RateLimiter`]**: the admission gate; call
//!   [`acquire`](RateLimiter::acquire) before each unit of rate-limited work
//! - **[`RateLimitConfig`]**: quota and window length, with validation
//! - **[`ConfigError`]**: rejection of zero quotas and zero windows
//!
//! ## Example
//!
//! ```ignore
//! use rate_gate::RateLimiter;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! // 5 admissions per 2 seconds, shared by 20 tasks.
//! let limiter = Arc::new(RateLimiter::new(5, Duration::from_secs(2))?);
//!
//! for id in 0..20 {
//!     let limiter = limiter.clone();
//!     tokio::spawn(async move {
//!         limiter.acquire().await;
//!         perform_task(id).await;
//!     });
//! }
//! ```
//!
//! The limiter is a single-process, in-memory gate: instances are fully
//! independent, nothing is persisted, and there is no cross-process
//! coordination. Timekeeping uses the monotonic clock, so wall-clock
//! adjustments never produce incorrect waits.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod limiter;

// Re-exports
pub use config::RateLimitConfig;
pub use error::ConfigError;
pub use limiter::RateLimiter;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{ConfigError, RateLimitConfig, RateLimiter};
}
