//! Rutas HTTP
//!
//! Health check en `/`, catálogo bajo `/api` y validación bajo
//! `/api/validation`.

pub mod catalog_routes;
pub mod validation_routes;

use std::time::Duration;

use axum::{http::Uri, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::middleware::cors::cors_layer;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Router completo de la aplicación con sus capas
pub fn create_app_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.function.timeout_secs);
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/", get(health_check))
        .nest(
            "/api",
            catalog_routes::create_catalog_router()
                .merge(validation_routes::create_validation_router()),
        )
        .fallback(fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(timeout))
                .layer(cors),
        )
        .with_state(state)
}

/// Health check
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "API d'abonnement automobile opérationnelle",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn fallback(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
