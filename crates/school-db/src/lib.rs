//! # School DB
//!
//! The persistence gateway behind the School API.
//!
//! - [`repository`]: the [`StudentRepository`] and [`CourseRepository`] traits
//! - [`postgres`]: [`PgStore`], the SQLx/PostgreSQL implementation
//! - [`memory`]: [`MemoryStore`], an in-process implementation for tests and demos
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use school_db::{init_db_pool, run_migrations, PgStore, StudentRepository};
//!
//! let pool = init_db_pool(&database_url, 5).await?;
//! run_migrations(&pool).await?;
//! let students: Arc<dyn StudentRepository> = Arc::new(PgStore::new(pool));
//! ```

pub mod memory;
pub mod postgres;
pub mod repository;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use repository::{CourseRepository, StudentRepository};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

use sqlx::postgres::PgPoolOptions;

/// Initializes a PostgreSQL connection pool.
///
/// The returned pool is cheaply cloneable and should be created once at
/// startup.
pub async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Applies the SQL migrations shipped in the workspace `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
