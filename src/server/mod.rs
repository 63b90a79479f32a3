//! HTTP server assembly and lifecycle

pub mod handlers;
pub mod router;

pub use handlers::AppState;
pub use router::build_router;

use crate::config::ServerConfig;
use crate::storage::OrderStore;
use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serve the order API with graceful shutdown
///
/// Binds the configured address, serves requests until SIGTERM or Ctrl+C,
/// then drains in-flight requests before returning. The store lives for the
/// whole process; there is no teardown beyond dropping it.
pub async fn serve(config: &ServerConfig, store: Arc<dyn OrderStore>) -> Result<()> {
    let app = build_router(AppState { store });
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
