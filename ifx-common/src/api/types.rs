//! Shared API request/response types
//!
//! Request parsing and response building are plain functions here; each
//! service wraps them with its own axum handlers and status codes.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::format::format_score;
use crate::reconcile::{Reconciler, ScoreSet};

// ========================================
// Check Request
// ========================================

/// Fields every check request must carry
pub const REQUIRED_FIELDS: [&str; 5] = ["judge1", "judge2", "judge3", "max_score", "max_interval"];

/// Reasons a check request is rejected before reconciliation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Field '{field}' is not a number: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Field '{0}' must be greater than 0")]
    NotPositive(&'static str),

    #[error("Scores must be between 0 and {max_score}")]
    OutOfRange { max_score: f64 },
}

/// Validated body of `POST /api/check-interval`
///
/// # Examples
///
/// ```
/// use ifx_common::api::types::CheckIntervalRequest;
///
/// let body = serde_json::json!({
///     "judge1": 15.0, "judge2": "14", "judge3": 13.0,
///     "max_score": 15.0, "max_interval": 0.75
/// });
/// let request = CheckIntervalRequest::from_json(&body).unwrap();
/// assert_eq!(request.scores(), [15.0, 14.0, 13.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckIntervalRequest {
    pub judge1: f64,
    pub judge2: f64,
    pub judge3: f64,
    pub max_score: f64,
    pub max_interval: f64,
}

impl CheckIntervalRequest {
    /// Parse and validate a JSON body
    ///
    /// Numbers may be sent as JSON numbers or numeric strings.
    pub fn from_json(body: &Value) -> Result<Self, RequestError> {
        let object = body.as_object().ok_or(RequestError::NotAnObject)?;

        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| object.get(*field).map_or(true, Value::is_null))
            .collect();
        if !missing.is_empty() {
            return Err(RequestError::MissingFields(missing));
        }

        let number = |field: &'static str| parse_number(field, &object[field]);

        let request = Self {
            judge1: number("judge1")?,
            judge2: number("judge2")?,
            judge3: number("judge3")?,
            max_score: number("max_score")?,
            max_interval: number("max_interval")?,
        };
        request.validate()?;
        Ok(request)
    }

    /// Bounds checks: positive limits, every score in `[0, max_score]`
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.max_score <= 0.0 {
            return Err(RequestError::NotPositive("max_score"));
        }
        if self.max_interval <= 0.0 {
            return Err(RequestError::NotPositive("max_interval"));
        }
        if self
            .scores()
            .iter()
            .any(|score| *score < 0.0 || *score > self.max_score)
        {
            return Err(RequestError::OutOfRange {
                max_score: self.max_score,
            });
        }
        Ok(())
    }

    pub fn scores(&self) -> [f64; 3] {
        [self.judge1, self.judge2, self.judge3]
    }

    /// Scores labelled "Judge 1" through "Judge 3"
    pub fn score_set(&self) -> ScoreSet {
        ScoreSet::from_scores(self.scores())
    }
}

fn parse_number(field: &'static str, value: &Value) -> Result<f64, RequestError> {
    let invalid = || RequestError::InvalidNumber {
        field,
        value: value.to_string(),
    };

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(invalid)?;

    if number.is_finite() {
        Ok(number)
    } else {
        Err(invalid())
    }
}

// ========================================
// Check Response
// ========================================

/// Original and (when needed) adjusted scores
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreValues {
    pub original: ScoreSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted: Option<ScoreSet>,
}

/// Body of a successful check response
///
/// Scores and intervals are rounded to three decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckIntervalResponse {
    pub scores: ScoreValues,
    pub original_interval: f64,
    pub max_interval: f64,
    pub is_valid: bool,

    /// Rationale of the rule that fired (invalid input only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_applied: Option<String>,

    /// Rule code, e.g. "3a" (invalid input only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_interval: Option<f64>,
}

/// Check scores against a tolerance and reconcile them when needed
pub fn check_scores(scores: &ScoreSet, max_interval: f64) -> CheckIntervalResponse {
    let reconciler = Reconciler::new(max_interval);
    let is_valid = reconciler.is_within_tolerance(scores.values());

    let mut response = CheckIntervalResponse {
        scores: ScoreValues {
            original: rounded(scores),
            adjusted: None,
        },
        original_interval: format_score(scores.extreme_interval()),
        max_interval,
        is_valid,
        rule_applied: None,
        rule: None,
        new_interval: None,
    };

    if !is_valid {
        let result = reconciler.reconcile(scores);
        response.scores.adjusted = Some(rounded(&result.scores));
        response.new_interval = Some(format_score(result.scores.extreme_interval()));
        response.rule = Some(result.rule.code());
        response.rule_applied = Some(result.rationale);
    }

    response
}

fn rounded(scores: &ScoreSet) -> ScoreSet {
    ScoreSet::new(
        scores
            .entries()
            .clone()
            .map(|entry| (entry.evaluator, format_score(entry.score))),
    )
}

// ========================================
// Error Response
// ========================================

/// JSON error body shared by both services
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_fields: Option<Vec<&'static str>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            required_fields: None,
        }
    }

    /// "Missing required fields" with the full field list attached
    pub fn missing_fields() -> Self {
        Self {
            error: "Missing required fields".to_string(),
            required_fields: Some(REQUIRED_FIELDS.to_vec()),
        }
    }
}

// ========================================
// Tests
// ========================================
