use dotenvy::dotenv;
use school::logging::{init_tracing, shutdown_tracer};
use school::metrics::{init_metrics, metrics_app};
use school::router::init_router;
use school::state::init_app_state;
use school::utils::tracing::ErrorExt;
use school_config::{CorsConfig, ServerConfig, StorageConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let storage_config = StorageConfig::from_env();
    let cors_config = CorsConfig::from_env();

    let state = init_app_state(&storage_config, cors_config)
        .await
        .log_error("initializing application state")?;
    let app = init_router(state);

    if let Some(handle) = init_metrics() {
        let metrics_address = server_config.metrics_address();
        tokio::spawn(async move {
            match tokio::net::TcpListener::bind(&metrics_address).await {
                Ok(listener) => {
                    info!("Metrics available at http://{}/metrics", metrics_address);
                    if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                        error!(error = %e, "Metrics server stopped");
                    }
                }
                Err(e) => error!(error = %e, address = %metrics_address, "Failed to bind metrics listener"),
            }
        });
    }

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .log_error("binding API listener")?;

    info!("Server running on http://{}", address);
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .log_error("serving API")?;

    shutdown_tracer().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
