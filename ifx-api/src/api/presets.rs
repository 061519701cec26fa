//! Interval preset listing

use axum::{extract::State, Json};
use ifx_common::IntervalPreset;

use crate::AppState;

/// GET /api/interval-config
///
/// Returns the configured presets, e.g.
/// `[{"max_score": 15.0, "max_interval": 0.75}, ...]`
pub async fn get_interval_config(State(state): State<AppState>) -> Json<Vec<IntervalPreset>> {
    Json(state.presets.as_ref().clone())
}
