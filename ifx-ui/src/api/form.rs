//! Form page and submission handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use ifx_common::api::check_scores;
use ifx_common::ScoreSet;
use tracing::{debug, info};

use crate::form::{FormQuery, FormSubmission};
use crate::render::{FormPage, Outcome};
use crate::UiState;

/// GET /?preset=N
///
/// An unknown index renders the form with no preset selected.
pub async fn serve_form(
    State(state): State<UiState>,
    Query(query): Query<FormQuery>,
) -> Html<String> {
    let selected = query.preset.unwrap_or(0);
    Html(FormPage::empty(&state.presets, selected).render())
}

/// POST /check
///
/// Rejected submissions re-render the form with the error and a 400 status.
/// The reconciler only runs once all three scores are strictly positive.
pub async fn submit_form(
    State(state): State<UiState>,
    Form(submission): Form<FormSubmission>,
) -> Response {
    let selected = submission.preset_index().unwrap_or(0);
    let values = submission.raw_scores();

    let form = match submission.validate(&state.presets) {
        Ok(form) => form,
        Err(err) => {
            debug!("Form rejected: {}", err);
            let page = FormPage {
                presets: &state.presets,
                selected,
                values,
                outcome: Outcome::Rejected(&err),
            };
            return (StatusCode::BAD_REQUEST, Html(page.render())).into_response();
        }
    };

    let response = check_scores(&ScoreSet::from_scores(form.scores), form.preset.tolerance);
    if let Some(rule) = response.rule {
        info!(
            rule,
            preset = %form.preset,
            original_interval = response.original_interval,
            "Form scores adjusted"
        );
    }

    let page = FormPage {
        presets: &state.presets,
        selected: form.preset_index,
        values,
        outcome: Outcome::Checked(&response),
    };
    Html(page.render()).into_response()
}
