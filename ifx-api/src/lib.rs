//! ifx-api library - JSON interval checking service
//!
//! Wraps the interval reconciler in a small HTTP API: a check endpoint,
//! the list of interval presets, an HTML documentation page, health and
//! build information.

use std::sync::Arc;

use axum::Router;
use ifx_common::IntervalPreset;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Presets listed by `GET /api/interval-config`
    pub presets: Arc<Vec<IntervalPreset>>,
}

impl AppState {
    /// Create new application state
    pub fn new(presets: Vec<IntervalPreset>) -> Self {
        Self {
            presets: Arc::new(presets),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::serve_index))
        .route("/api/interval-config", get(api::get_interval_config))
        .route("/api/check-interval", post(api::check_interval))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
