//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use super::dto::*;
use super::error::AppError;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/routes", post(query_routes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan routes between two places and assess safety at the source.
async fn query_routes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RouteQueryResponse>, AppError> {
    // Parse JSON manually so a bad body gets our error shape, not axum's
    let req: RouteQueryRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(&body), "unparseable route query");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let result = state
        .aggregator
        .run(req.source(), req.destination())
        .await?;

    Ok(Json(RouteQueryResponse::from_result(&result)))
}
