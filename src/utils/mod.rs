//! Utility modules for the School API.
//!
//! - [`access_log`]: the `just accessed!` line every endpoint emits
//! - [`errors`]: application error types and handling
//! - [`tracing`]: span and event helpers

pub mod access_log;
pub mod errors;
pub mod tracing;
