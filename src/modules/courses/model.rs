//! Course data models and the enrollment count projection.
//!
//! Re-exported from the `school-models` crate.

pub use school_models::courses::*;
