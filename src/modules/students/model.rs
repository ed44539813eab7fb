//! Student data models and DTOs.
//!
//! Re-exported from the `school-models` crate.

pub use school_models::students::*;
