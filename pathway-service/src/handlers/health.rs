use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::dtos::ApiHealthResponse;
use crate::startup::AppState;

pub const API_HEALTH_MESSAGE: &str = "Learning Pathway Creator API is running!";

/// Health check polled by the client.
pub async fn api_health() -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        message: API_HEALTH_MESSAGE.to_string(),
    })
}

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.generator.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "pathway-service",
                "version": env!("CARGO_PKG_VERSION")
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unhealthy",
                "service": "pathway-service",
                "error": e.to_string()
            })),
        ),
    }
}
