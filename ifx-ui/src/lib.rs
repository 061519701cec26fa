//! ifx-ui library - interactive interval form
//!
//! A server-rendered HTML form: pick a preset, enter three judges' scores,
//! and see whether they fit the maximum interval and how they would be
//! adjusted. No state is kept between requests.

use std::sync::Arc;

use axum::Router;
use ifx_common::IntervalPreset;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod form;
pub mod render;

/// Shared state for the form handlers
#[derive(Clone)]
pub struct UiState {
    /// Presets offered in the form's select box
    pub presets: Arc<Vec<IntervalPreset>>,
}

impl UiState {
    pub fn new(presets: Vec<IntervalPreset>) -> Self {
        Self {
            presets: Arc::new(presets),
        }
    }
}

/// Build application router
pub fn build_router(state: UiState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::serve_form))
        .route("/check", post(api::submit_form))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
