//! Interval presets offered to users
//!
//! A preset pairs a maximum permissible score with the tolerance used for
//! that scale. The tolerance is always 5% of the maximum score in the
//! built-in lists.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Maximum score and tolerance for one scoring scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalPreset {
    pub max_score: f64,

    /// Maximum allowed difference between any two scores
    #[serde(rename = "max_interval", alias = "tolerance")]
    pub tolerance: f64,
}

impl IntervalPreset {
    pub const fn new(max_score: f64, tolerance: f64) -> Self {
        Self {
            max_score,
            tolerance,
        }
    }

    /// Human-readable label, e.g. "Max score: 25 | Max interval: 1.25"
    pub fn label(&self) -> String {
        format!(
            "Max score: {} | Max interval: {}",
            self.max_score, self.tolerance
        )
    }

    /// Reject presets the reconciler cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.max_score.is_finite() || self.max_score <= 0.0 {
            return Err(Error::Config(format!(
                "max_score must be a positive number, got {}",
                self.max_score
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::Config(format!(
                "max_interval must be a positive number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for IntervalPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

const API_PRESETS: [IntervalPreset; 7] = [
    IntervalPreset::new(15.0, 0.75),
    IntervalPreset::new(20.0, 1.0),
    IntervalPreset::new(25.0, 1.25),
    IntervalPreset::new(30.0, 1.5),
    IntervalPreset::new(40.0, 2.0),
    IntervalPreset::new(50.0, 2.5),
    IntervalPreset::new(100.0, 5.0),
];

const FORM_PRESETS: [IntervalPreset; 3] = [
    IntervalPreset::new(25.0, 1.25),
    IntervalPreset::new(50.0, 2.5),
    IntervalPreset::new(100.0, 5.0),
];

/// Presets listed by `GET /api/interval-config`
pub fn api_presets() -> Vec<IntervalPreset> {
    API_PRESETS.to_vec()
}

/// Choices offered by the interactive form
pub fn form_presets() -> Vec<IntervalPreset> {
    FORM_PRESETS.to_vec()
}

/// Validate every preset in a list; an empty list is also an error
pub fn validate_presets(presets: &[IntervalPreset]) -> Result<()> {
    if presets.is_empty() {
        return Err(Error::Config("preset list is empty".to_string()));
    }
    presets.iter().try_for_each(IntervalPreset::validate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_presets_are_valid() {
        validate_presets(&api_presets()).unwrap();
        validate_presets(&form_presets()).unwrap();
    }

    #[test]
    fn test_builtin_tolerance_is_five_percent() {
        for preset in api_presets().iter().chain(form_presets().iter()) {
            assert!((preset.tolerance - preset.max_score * 0.05).abs() < 1e-9);
        }
    }

    #[test]
    fn test_form_presets_subset_of_api_presets() {
        let api = api_presets();
        for preset in form_presets() {
            assert!(api.contains(&preset), "{} missing from API list", preset);
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(
            IntervalPreset::new(25.0, 1.25).label(),
            "Max score: 25 | Max interval: 1.25"
        );
    }

    #[test]
    fn test_serialization_uses_max_interval() {
        let json = serde_json::to_string(&IntervalPreset::new(15.0, 0.75)).unwrap();
        assert_eq!(json, r#"{"max_score":15.0,"max_interval":0.75}"#);
    }

    #[test]
    fn test_deserialization_accepts_tolerance_alias() {
        let preset: IntervalPreset =
            serde_json::from_str(r#"{"max_score": 10, "tolerance": 0.5}"#).unwrap();
        assert_eq!(preset, IntervalPreset::new(10.0, 0.5));
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        assert!(IntervalPreset::new(0.0, 1.0).validate().is_err());
        assert!(IntervalPreset::new(10.0, 0.0).validate().is_err());
        assert!(IntervalPreset::new(10.0, -1.0).validate().is_err());
        assert!(IntervalPreset::new(f64::NAN, 1.0).validate().is_err());
        assert!(validate_presets(&[]).is_err());
    }
}
