//! Interval reconciliation for three evaluator scores
//!
//! Given three scores and a tolerance (the maximum allowed difference
//! between any two scores), decides whether the scores are acceptable and,
//! if not, moves the extreme scores so that they are.
//!
//! # Rule order
//!
//! | Rule | Condition | Adjustment |
//! |------|-----------|------------|
//! | 1a | highest == middle, bottom gap > tolerance | lowest = highest - tolerance |
//! | 1b | middle == lowest, top gap > tolerance | highest = lowest + tolerance |
//! | 2  | top gap == bottom gap | extremes = middle ± tolerance/2 |
//! | 3a | top gap <= tolerance < total gap | lowest raised (highest pulled to middle + tolerance/2 when top gap >= tolerance/2) |
//! | 3b | bottom gap <= tolerance < total gap | highest lowered (lowest pulled to middle - tolerance/2 when bottom gap >= tolerance/2) |
//! | 4  | middle is unique | extremes = middle ± tolerance/2 |
//! | 5  | total gap > tolerance | extremes = midpoint ± tolerance/2 |
//! | 6  | otherwise | unchanged |
//!
//! "Equal" always means within [`EQUALITY_EPSILON`].
//!
//! # Example
//!
//! ```
//! use ifx_common::reconcile::{reconcile, Rule, ScoreSet};
//!
//! let scores = ScoreSet::new([("A", 30.0), ("B", 20.0), ("C", 10.0)]);
//! let result = reconcile(&scores, 6.0);
//!
//! assert_eq!(result.rule, Rule::SymmetricGaps);
//! assert_eq!(result.scores.values(), [23.0, 20.0, 17.0]);
//! ```

use serde::Serialize;
use tracing::debug;

mod rules;
mod types;

use rules::Adjustment;
pub use rules::Rule;
pub use types::{RankedScore, RankedTriple, ScoreEntry, ScoreSet, DEFAULT_LABELS};

/// Two scores (or gaps) closer than this are treated as equal
pub const EQUALITY_EPSILON: f64 = 0.001;

/// Slack on the `<= tolerance` comparison
///
/// Adjusted scores are computed as `middle ± tolerance / 2`, whose
/// difference can exceed `tolerance` by one ulp.
pub const ROUNDING_SLACK: f64 = 1e-9;

/// Adjusted scores plus the rule that produced them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustmentResult {
    /// Same evaluators in the same order as the input
    pub scores: ScoreSet,
    pub rule: Rule,
    pub rationale: String,
}

impl AdjustmentResult {
    /// True when any score differs from the input
    pub fn is_adjusted(&self) -> bool {
        !matches!(self.rule, Rule::AlreadyValid | Rule::NoAdjustment)
    }
}

/// Request-scoped reconciliation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reconciler {
    tolerance: f64,
    epsilon: f64,
}

impl Reconciler {
    /// Reconciler for the given tolerance using [`EQUALITY_EPSILON`]
    ///
    /// The tolerance must be positive; callers validate it.
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            epsilon: EQUALITY_EPSILON,
        }
    }

    /// Override the equality epsilon
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// True when every pairwise difference is at most the tolerance
    ///
    /// The comparison is `diff <= tolerance + ROUNDING_SLACK`, so a pair that
    /// exceeds the tolerance by no more than `1e-9` still counts as within
    /// it. Scores produced by one `reconcile` pass always pass this check.
    pub fn is_within_tolerance(&self, scores: [f64; 3]) -> bool {
        let [a, b, c] = scores;
        [(a - b).abs(), (a - c).abs(), (b - c).abs()]
            .iter()
            .all(|diff| *diff <= self.tolerance + ROUNDING_SLACK)
    }

    /// Bring the scores within tolerance using the first matching rule
    pub fn reconcile(&self, scores: &ScoreSet) -> AdjustmentResult {
        if self.is_within_tolerance(scores.values()) {
            return AdjustmentResult {
                scores: scores.clone(),
                rule: Rule::AlreadyValid,
                rationale: Rule::AlreadyValid
                    .rationale(&RankedTriple::from_scores(scores), &Adjustment::default()),
            };
        }

        let ranked = RankedTriple::from_scores(scores);

        let (rule, adjustment) = Rule::PRIORITY
            .iter()
            .find_map(|rule| {
                rule.apply(&ranked, self.tolerance, self.epsilon)
                    .map(|adjustment| (*rule, adjustment))
            })
            .unwrap_or((Rule::NoAdjustment, Adjustment::default()));

        let mut adjusted = scores.clone();
        if let Some(score) = adjustment.highest {
            adjusted.set_score(ranked.highest.index, score);
        }
        if let Some(score) = adjustment.lowest {
            adjusted.set_score(ranked.lowest.index, score);
        }

        debug!(
            rule = rule.code(),
            tolerance = self.tolerance,
            "Reconciled {:?} -> {:?}",
            scores.values(),
            adjusted.values()
        );

        AdjustmentResult {
            rationale: rule.rationale(&ranked, &adjustment),
            scores: adjusted,
            rule,
        }
    }
}

/// True when every pairwise difference among `scores` is at most `tolerance`
/// (plus `ROUNDING_SLACK`)
pub fn is_within_tolerance(scores: [f64; 3], tolerance: f64) -> bool {
    Reconciler::new(tolerance).is_within_tolerance(scores)
}

/// Reconcile `scores` against `tolerance` with the default epsilon
pub fn reconcile(scores: &ScoreSet, tolerance: f64) -> AdjustmentResult {
    Reconciler::new(tolerance).reconcile(scores)
}
