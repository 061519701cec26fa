//! Interval check endpoint
//!
//! Validates the request, reports whether the three scores are within the
//! maximum interval, and returns adjusted scores when they are not.

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ifx_common::api::{check_scores, CheckIntervalRequest, ErrorResponse, RequestError};
use serde_json::Value;
use tracing::{debug, info, warn};

/// POST /api/check-interval
///
/// Request:
/// ```json
/// {"judge1": 15.0, "judge2": 14.0, "judge3": 13.0, "max_score": 15.0, "max_interval": 0.75}
/// ```
///
/// The body is parsed by hand rather than with the `Json` extractor so that
/// every malformed request gets a 400 with a JSON error body.
pub async fn check_interval(body: Bytes) -> Result<Json<Value>, CheckError> {
    let value: Value = serde_json::from_slice(&body)
        .map_err(|e| CheckError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    let request = CheckIntervalRequest::from_json(&value).map_err(|e| {
        warn!("Rejected check request: {}", e);
        CheckError::from(e)
    })?;

    debug!(
        scores = ?request.scores(),
        max_score = request.max_score,
        max_interval = request.max_interval,
        "Checking interval"
    );

    let response = check_scores(&request.score_set(), request.max_interval);

    match response.rule {
        Some(rule) => info!(
            rule,
            original_interval = response.original_interval,
            new_interval = ?response.new_interval,
            "Scores adjusted"
        ),
        None => debug!("Scores already within max interval"),
    }

    let body = serde_json::to_value(&response)
        .map_err(|e| CheckError::Internal(format!("Failed to encode response: {}", e)))?;
    Ok(Json(body))
}

/// Check endpoint errors
#[derive(Debug)]
pub enum CheckError {
    /// One or more required fields absent
    MissingFields,
    /// Malformed body, non-numeric value or out-of-range score
    BadRequest(String),
    /// Unexpected failure while handling a valid request
    Internal(String),
}

impl From<RequestError> for CheckError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::MissingFields(_) => CheckError::MissingFields,
            other => CheckError::BadRequest(other.to_string()),
        }
    }
}

impl IntoResponse for CheckError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            CheckError::MissingFields => (StatusCode::BAD_REQUEST, ErrorResponse::missing_fields()),
            CheckError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            CheckError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(msg))
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_mapping() {
        let missing = CheckError::from(RequestError::MissingFields(vec!["judge1"]));
        assert!(matches!(missing, CheckError::MissingFields));

        let range = CheckError::from(RequestError::OutOfRange { max_score: 15.0 });
        match range {
            CheckError::BadRequest(msg) => assert_eq!(msg, "Scores must be between 0 and 15"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CheckError::MissingFields.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CheckError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CheckError::Internal("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
