//! Utility functions and helpers for shot2test.
//!
//! This module provides cross-cutting concerns like structured logging,
//! credential scrubbing, and the rate-limit retry loop around model calls.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and log sanitization.
//! - `retry`: Fixed-delay retry for rate-limited upstream calls.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
pub mod retry;
