//! HTTP server initialization and runtime setup.
//!
//! Handles backend wiring, router construction and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::backends::TokenBackend;
use crate::infrastructure::backend::FormatCheckBackend;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Format-check token backend (with the configured delay)
/// - Application state and router
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - The router cannot be built from the configuration
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let backend: Arc<dyn TokenBackend> =
        Arc::new(FormatCheckBackend::with_delay(config.verify_delay()));
    tracing::info!("Token backend: {}", backend.name());

    let state = AppState::new(backend, config.api_base_url.clone());

    let app = app_router(state, &config)?;

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
