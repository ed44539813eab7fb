//! # School Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: listen addresses for the API and the metrics exporter
//! - [`storage`]: which persistence gateway backs the API
//!
//! # Example
//!
//! ```ignore
//! use school_config::{CorsConfig, ServerConfig, StorageConfig};
//!
//! let server = ServerConfig::from_env();
//! let cors = CorsConfig::from_env();
//! let storage = StorageConfig::from_env();
//! ```

pub mod cors;
pub mod server;
pub mod storage;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use server::ServerConfig;
pub use storage::{StorageBackend, StorageConfig};

/// Reads `key` and parses it, falling back to `default` when unset or invalid.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
