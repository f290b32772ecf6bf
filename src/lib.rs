pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod routes;
pub mod telemetry;

use crate::config::AppConfig;
use crate::error::StartupError;
use crate::infra::Store;

/// Open the store, bootstrap it, and serve until Ctrl-C.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    let store = Store::open(&config.database.path)?;
    log::info!("DB path: {:?}", store.path());

    app::initialize(&store).map_err(|e| {
        log::error!("DB init failed: {}", e);
        e
    })?;

    let router = routes::router(store, &config.static_dir);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    log::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {}", e);
    }
}
