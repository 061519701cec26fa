//! Form submission parsing and validation
//!
//! Everything the form needs travels with the request: the selected preset
//! index and the three raw score inputs. Nothing is kept between requests.

use ifx_common::reconcile::DEFAULT_LABELS;
use ifx_common::IntervalPreset;
use serde::Deserialize;
use thiserror::Error;

/// Query string for `GET /`
#[derive(Debug, Default, Deserialize)]
pub struct FormQuery {
    /// Index into the configured form presets
    #[serde(default)]
    pub preset: Option<usize>,
}

/// Raw form fields from `POST /check`
///
/// Kept as strings so blank or garbled inputs reach validation instead of
/// being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub preset: String,
    #[serde(default)]
    pub score1: String,
    #[serde(default)]
    pub score2: String,
    #[serde(default)]
    pub score3: String,
}

/// A submission that passed validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedForm {
    pub preset_index: usize,
    pub preset: IntervalPreset,
    pub scores: [f64; 3],
}

/// Reasons a submission is not passed to the reconciler
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Unknown configuration selected")]
    UnknownPreset,

    #[error("{judge}: '{value}' is not a number")]
    InvalidScore { judge: &'static str, value: String },

    #[error("Scores must be between 0 and {max_score}")]
    OutOfRange { max_score: f64 },

    #[error("Please enter a score for every judge!")]
    MissingScores,
}

impl FormSubmission {
    pub fn raw_scores(&self) -> [&str; 3] {
        [&self.score1, &self.score2, &self.score3].map(String::as_str)
    }

    /// Preset index as submitted, if it parses
    pub fn preset_index(&self) -> Option<usize> {
        self.preset.trim().parse().ok()
    }

    /// Validate against the configured presets
    ///
    /// A blank input counts as 0. All three scores must be strictly positive
    /// before the reconciler runs.
    pub fn validate(&self, presets: &[IntervalPreset]) -> Result<ValidatedForm, FormError> {
        let preset_index = self.preset_index().ok_or(FormError::UnknownPreset)?;
        let preset = *presets.get(preset_index).ok_or(FormError::UnknownPreset)?;

        let mut scores = [0.0; 3];
        for (i, raw) in self.raw_scores().iter().enumerate() {
            scores[i] = parse_score(DEFAULT_LABELS[i], raw)?;
        }

        if scores
            .iter()
            .any(|score| *score < 0.0 || *score > preset.max_score)
        {
            return Err(FormError::OutOfRange {
                max_score: preset.max_score,
            });
        }

        if scores.iter().any(|score| *score <= 0.0) {
            return Err(FormError::MissingScores);
        }

        Ok(ValidatedForm {
            preset_index,
            preset,
            scores,
        })
    }
}

fn parse_score(judge: &'static str, raw: &str) -> Result<f64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|score| score.is_finite())
        .ok_or_else(|| FormError::InvalidScore {
            judge,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifx_common::presets::form_presets;

    fn submission(preset: &str, scores: [&str; 3]) -> FormSubmission {
        FormSubmission {
            preset: preset.to_string(),
            score1: scores[0].to_string(),
            score2: scores[1].to_string(),
            score3: scores[2].to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let form = submission("1", ["45", "44.5", "40.25"])
            .validate(&form_presets())
            .unwrap();

        assert_eq!(form.preset_index, 1);
        assert_eq!(form.preset, IntervalPreset::new(50.0, 2.5));
        assert_eq!(form.scores, [45.0, 44.5, 40.25]);
    }

    #[test]
    fn test_zero_or_blank_score_rejected() {
        let presets = form_presets();
        assert_eq!(
            submission("0", ["20", "0", "19"]).validate(&presets),
            Err(FormError::MissingScores)
        );
        assert_eq!(
            submission("0", ["20", "", "19"]).validate(&presets),
            Err(FormError::MissingScores)
        );
    }

    #[test]
    fn test_score_above_preset_maximum_rejected() {
        assert_eq!(
            submission("0", ["25.25", "20", "19"]).validate(&form_presets()),
            Err(FormError::OutOfRange { max_score: 25.0 })
        );
    }

    #[test]
    fn test_negative_score_rejected_as_out_of_range() {
        assert_eq!(
            submission("0", ["-1", "20", "19"]).validate(&form_presets()),
            Err(FormError::OutOfRange { max_score: 25.0 })
        );
    }

    #[test]
    fn test_non_numeric_score_rejected() {
        let err = submission("0", ["20", "abc", "19"])
            .validate(&form_presets())
            .unwrap_err();
        assert_eq!(err.to_string(), "Judge 2: 'abc' is not a number");
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let presets = form_presets();
        assert_eq!(
            submission("7", ["20", "20", "19"]).validate(&presets),
            Err(FormError::UnknownPreset)
        );
        assert_eq!(
            submission("", ["20", "20", "19"]).validate(&presets),
            Err(FormError::UnknownPreset)
        );
    }
}
