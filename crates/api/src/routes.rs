//! Route configuration.

use axum::{
    http::{header, HeaderValue, Method},
    response::Json,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use common::CorsConfig;

use crate::handlers::{health_routes, user_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    Router::new()
        // Health check
        .merge(health_routes())
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi_json))
        // User routes
        .merge(user_routes())
        // Global middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the generated OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the CORS layer for browser clients.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", o);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(config.max_age_seconds))
}
