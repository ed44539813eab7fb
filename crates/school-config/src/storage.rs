//! Persistence gateway selection.
//!
//! # Environment Variables
//!
//! - `STORAGE_BACKEND`: `postgres` (default) or `memory`
//! - `DATABASE_URL`: PostgreSQL connection string, required for `postgres`
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default 5)
//! - `RUN_MIGRATIONS`: apply `migrations/` at boot (default true)

use std::str::FromStr;

use crate::env_or;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "memory" | "in-memory" | "inmemory" => Ok(Self::Memory),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Postgres,
            database_url: None,
            max_connections: 5,
            run_migrations: true,
        }
    }
}

impl StorageConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let backend = match std::env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to postgres", e);
                StorageBackend::Postgres
            }),
            Err(_) => defaults.backend,
        };

        Self {
            backend,
            database_url: std::env::var("DATABASE_URL").ok(),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", defaults.max_connections),
            run_migrations: std::env::var("RUN_MIGRATIONS")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.run_migrations),
        }
    }

    /// In-memory storage with the default pool settings.
    pub fn memory() -> Self {
        Self {
            backend: StorageBackend::Memory,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parsing() {
        assert_eq!("postgres".parse(), Ok(StorageBackend::Postgres));
        assert_eq!(" Memory ".parse(), Ok(StorageBackend::Memory));
        assert!("redis".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_memory_config() {
        let config = StorageConfig::memory();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.max_connections, 5);
        assert!(config.database_url.is_none());
    }
}
