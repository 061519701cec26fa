//! # Interval Fixer Common Library
//!
//! Shared code for the interval fixer services including:
//! - Interval reconciliation engine (three judges, one tolerance)
//! - API request/response types
//! - Configuration loading
//! - Interval presets
//! - Score formatting
//! - Graceful shutdown for the HTTP services

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod presets;
pub mod reconcile;
pub mod shutdown;

pub use error::{Error, Result};
pub use presets::IntervalPreset;
pub use reconcile::{is_within_tolerance, reconcile, AdjustmentResult, Rule, ScoreSet};
