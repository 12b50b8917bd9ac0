//! User Hours API Library
//!
//! This crate provides the HTTP REST API over the in-memory user store.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration until a shutdown signal arrives.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Build address
    let addr: SocketAddr = config.bind_address().parse()?;

    // Create app state with a fresh store
    let state = AppState::in_memory(config);

    // Build router
    let app = create_router(state);

    info!("User hours API listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
