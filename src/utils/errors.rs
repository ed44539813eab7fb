//! Application error types.
//!
//! Re-exported from the `school-core` crate so handlers can keep using
//! `crate::utils::errors::AppError`.

pub use school_core::errors::{AppError, ErrorDetail, FieldErrors};
