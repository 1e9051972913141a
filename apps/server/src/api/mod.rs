//! API layer - routes, handlers, and middleware

pub mod bundle;
pub mod extractors;
pub mod handlers;
pub mod headers;
pub mod middleware;
pub mod routes;
pub mod url;

use crate::state::AppState;
use axum::{
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use meridian_models::FhirVersion;
use serde_json::json;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.server.max_request_body_size;
    let cors_origins = state.config.server.cors_origins.clone();

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
        .merge(routes::fhir::fhir_routes())
        .fallback(not_found)
        .with_state(state)
        // Applied in reverse order
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(middleware::compression())
        .layer(middleware::cors(&cors_origins))
        .layer(middleware::trace())
        .layer(DefaultBodyLimit::max(max_body_size))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "fhir-server"
    }))
}

async fn root(State(state): State<AppState>) -> impl IntoResponse {
    let versions: Vec<&str> = state
        .config
        .enabled_versions()
        .into_iter()
        .map(FhirVersion::as_str)
        .collect();
    (
        StatusCode::OK,
        Json(json!({
            "server": "meridian",
            "version": env!("CARGO_PKG_VERSION"),
            "versions": versions,
            "status": "running"
        })),
    )
}

async fn not_found(uri: Uri) -> crate::Error {
    crate::Error::UnknownRoute(uri.path().to_string())
}
