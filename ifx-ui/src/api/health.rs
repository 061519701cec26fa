//! Health check endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::UiState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        module: "ifx-ui",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn health_routes() -> Router<UiState> {
    Router::new().route("/health", get(health_check))
}
