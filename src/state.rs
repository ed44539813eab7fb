use std::sync::Arc;

use anyhow::Context;
use school_config::{CorsConfig, StorageBackend, StorageConfig};
use school_db::{CourseRepository, MemoryStore, PgStore, StudentRepository, init_db_pool, run_migrations};
use tracing::info;

use crate::modules::courses::CourseService;
use crate::modules::students::StudentService;

#[derive(Clone)]
pub struct AppState {
    pub students: StudentService,
    pub courses: CourseService,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// Wires the services onto the given gateways.
    pub fn new(
        students: Arc<dyn StudentRepository>,
        courses: Arc<dyn CourseRepository>,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            students: StudentService::new(students),
            courses: CourseService::new(courses),
            cors_config,
        }
    }

    /// Both services backed by one shared [`MemoryStore`].
    pub fn in_memory(store: MemoryStore, cors_config: CorsConfig) -> Self {
        Self::new(Arc::new(store.clone()), Arc::new(store), cors_config)
    }
}

pub async fn init_app_state(storage: &StorageConfig, cors_config: CorsConfig) -> anyhow::Result<AppState> {
    match storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            Ok(AppState::in_memory(MemoryStore::new(), cors_config))
        }
        StorageBackend::Postgres => {
            let database_url = storage
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set for the postgres storage backend")?;

            let pool = init_db_pool(database_url, storage.max_connections)
                .await
                .context("Failed to connect to database")?;

            if storage.run_migrations {
                run_migrations(&pool)
                    .await
                    .context("Failed to run database migrations")?;
                info!("Database migrations applied");
            }

            let store = PgStore::new(pool);
            Ok(AppState::new(
                Arc::new(store.clone()),
                Arc::new(store),
                cors_config,
            ))
        }
    }
}
