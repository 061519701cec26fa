//! API module for shared HTTP API functionality
//!
//! Provides the check request/response types used by both services.
//!
//! # Design Principle
//!
//! This module contains ONLY:
//! - Pure functions (no HTTP framework dependencies)
//! - Shared types
//!
//! Each service wraps these with its own axum handlers and status codes.

pub mod types;

pub use types::{
    check_scores, CheckIntervalRequest, CheckIntervalResponse, ErrorResponse, RequestError,
    ScoreValues, REQUIRED_FIELDS,
};
