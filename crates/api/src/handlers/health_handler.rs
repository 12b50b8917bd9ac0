//! Health check handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub services: ServiceStatus,
}

/// Individual service status.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub store: StoreHealth,
}

/// In-memory store health.
#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub status: String,
    pub users: usize,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Health check endpoint - reports the user store.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let users = state.user_service.user_count().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        services: ServiceStatus {
            store: StoreHealth {
                status: "healthy".to_string(),
                users,
            },
        },
    })
}
