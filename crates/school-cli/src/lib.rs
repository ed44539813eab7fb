//! # School CLI
//!
//! Database seeding utilities for School API testing and development.
//!
//! The HTTP surface has no enrollment endpoint, so seeding is how a
//! development database gets students enrolled in courses.
//!
//! ```ignore
//! use school_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(8, 200);
//! seed_all(&pool, config).await?;
//! ```

pub mod seeder;
