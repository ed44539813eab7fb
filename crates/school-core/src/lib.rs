//! # School Core
//!
//! Foundational types shared by every School API crate.
//!
//! - [`errors`]: the application error type and its HTTP rendering
//! - [`validation`]: turning `validator` failures into per-field messages
//!
//! # Example
//!
//! ```ignore
//! use school_core::errors::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Student with id 7 not found"));
//! assert_eq!(error.status, axum::http::StatusCode::NOT_FOUND);
//! ```

pub mod errors;
pub mod validation;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorDetail, FieldErrors};
pub use validation::{field_errors, format_errors};
