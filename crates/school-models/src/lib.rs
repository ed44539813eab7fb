//! # School Models
//!
//! Domain models and DTOs for the School API.
//!
//! - [`courses`]: courses and the per-course enrollment count projection
//! - [`students`]: students and the create/update payload
//!
//! # Example
//!
//! ```ignore
//! use school_models::students::StudentPayload;
//! use validator::Validate;
//!
//! let payload = StudentPayload::named("Ada");
//! assert!(payload.validate().is_ok());
//! ```

pub mod courses;
pub mod students;

// Re-export commonly used types at crate root for convenience
pub use courses::{CountStudentsInCourse, Course};
pub use students::{Student, StudentPayload};
