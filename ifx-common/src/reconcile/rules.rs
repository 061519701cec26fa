//! Ordered adjustment rules
//!
//! Rules are tried in `Rule::PRIORITY` order and the first one whose
//! condition holds decides the adjustment. Only the highest and lowest
//! scores are ever moved; the middle score is the reference point and is
//! never touched.

use serde::Serialize;

use super::types::RankedTriple;

/// Outcome of a reconciliation: which rule fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// All pairwise gaps already within tolerance
    AlreadyValid,

    /// 1a: highest and middle equal, lowest too far below
    EqualTopPair,

    /// 1b: middle and lowest equal, highest too far above
    EqualBottomPair,

    /// 2: top and bottom gaps equal
    SymmetricGaps,

    /// 3a: highest and middle within tolerance, lowest too far below
    TopPairClose,

    /// 3b: middle and lowest within tolerance, highest too far above
    BottomPairClose,

    /// 4: unique middle score used as anchor
    MiddleAnchor,

    /// 5: centre the extremes around their midpoint
    GenericCentering,

    /// 6: nothing matched, scores left alone
    NoAdjustment,
}

/// New values for the extreme scores; `None` means untouched
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Adjustment {
    pub highest: Option<f64>,
    pub lowest: Option<f64>,
}

impl Rule {
    /// Rules tried after the validity check, highest priority first
    ///
    /// `NoAdjustment` is not listed: it is what `reconcile` reports when
    /// none of these match.
    pub const PRIORITY: [Rule; 7] = [
        Rule::EqualTopPair,
        Rule::EqualBottomPair,
        Rule::SymmetricGaps,
        Rule::TopPairClose,
        Rule::BottomPairClose,
        Rule::MiddleAnchor,
        Rule::GenericCentering,
    ];

    /// Short code as used in the rule table ("1a", "2", ...)
    pub fn code(&self) -> &'static str {
        match self {
            Rule::AlreadyValid => "valid",
            Rule::EqualTopPair => "1a",
            Rule::EqualBottomPair => "1b",
            Rule::SymmetricGaps => "2",
            Rule::TopPairClose => "3a",
            Rule::BottomPairClose => "3b",
            Rule::MiddleAnchor => "4",
            Rule::GenericCentering => "5",
            Rule::NoAdjustment => "6",
        }
    }

    /// One-line summary of the rule
    pub fn description(&self) -> &'static str {
        match self {
            Rule::AlreadyValid => "already valid",
            Rule::EqualTopPair => "two highest equal; raise lowest",
            Rule::EqualBottomPair => "two lowest equal; lower highest",
            Rule::SymmetricGaps => {
                "symmetric gaps; center on middle with half-tolerance spread"
            }
            Rule::TopPairClose => "top pair already close; raise lowest",
            Rule::BottomPairClose => "bottom pair already close; lower highest",
            Rule::MiddleAnchor => "middle value used as anchor",
            Rule::GenericCentering => "generic centering",
            Rule::NoAdjustment => "no adjustment needed",
        }
    }

    /// Evaluate this rule against ranked scores that violate the tolerance
    ///
    /// Returns `None` when the rule's condition does not hold. Every branch
    /// reads the original ranked values; adjustments never feed back into
    /// the conditions.
    pub(crate) fn apply(
        &self,
        ranked: &RankedTriple<'_>,
        tolerance: f64,
        epsilon: f64,
    ) -> Option<Adjustment> {
        let high = ranked.highest.score;
        let mid = ranked.middle.score;
        let low = ranked.lowest.score;
        let gap_top = ranked.gap_top();
        let gap_bottom = ranked.gap_bottom();
        let gap_total = ranked.gap_total();
        let half = tolerance / 2.0;
        let equal = |a: f64, b: f64| (a - b).abs() < epsilon;

        match self {
            Rule::AlreadyValid => None,

            Rule::EqualTopPair => (equal(high, mid) && gap_bottom > tolerance).then(|| Adjustment {
                highest: None,
                lowest: Some(high - tolerance),
            }),

            Rule::EqualBottomPair => (equal(mid, low) && gap_top > tolerance).then(|| Adjustment {
                highest: Some(low + tolerance),
                lowest: None,
            }),

            Rule::SymmetricGaps => equal(gap_top, gap_bottom).then(|| Adjustment {
                highest: Some(mid + half),
                lowest: Some(mid - half),
            }),

            Rule::TopPairClose => (gap_top <= tolerance && gap_total > tolerance).then(|| {
                if gap_top >= half {
                    let highest = mid + half;
                    Adjustment {
                        highest: Some(highest),
                        lowest: Some(highest - tolerance),
                    }
                } else {
                    Adjustment {
                        highest: None,
                        lowest: Some(high - tolerance),
                    }
                }
            }),

            Rule::BottomPairClose => (gap_bottom <= tolerance && gap_total > tolerance).then(|| {
                if gap_bottom >= half {
                    let lowest = mid - half;
                    Adjustment {
                        highest: Some(lowest + tolerance),
                        lowest: Some(lowest),
                    }
                } else {
                    Adjustment {
                        highest: Some(low + tolerance),
                        lowest: None,
                    }
                }
            }),

            Rule::MiddleAnchor => {
                let unique_middle = !equal(mid, high) && !equal(mid, low);
                unique_middle.then(|| Adjustment {
                    highest: Some(mid + half),
                    lowest: Some(mid - half),
                })
            }

            Rule::GenericCentering => (gap_total > tolerance).then(|| {
                let center = (high + low) / 2.0;
                Adjustment {
                    highest: Some(center + half),
                    lowest: Some(center - half),
                }
            }),

            Rule::NoAdjustment => Some(Adjustment::default()),
        }
    }

    /// Human-readable explanation naming the evaluators that moved
    pub(crate) fn rationale(&self, ranked: &RankedTriple<'_>, adjustment: &Adjustment) -> String {
        let high = ranked.highest.evaluator;
        let mid = ranked.middle.evaluator;
        let low = ranked.lowest.evaluator;

        // A rule may "set" a score to its current value; that is not a move
        let lowered = adjustment.highest.filter(|s| *s != ranked.highest.score);
        let raised = adjustment.lowest.filter(|s| *s != ranked.lowest.score);

        let moved = match (lowered, raised) {
            (Some(_), Some(_)) => format!("{} lowered and {} raised", high, low),
            (Some(_), None) => format!("{} lowered", high),
            (None, Some(_)) => format!("{} raised", low),
            (None, None) => "scores unchanged".to_string(),
        };

        match self {
            Rule::AlreadyValid => "Scores are already valid; no adjustment needed.".to_string(),
            Rule::EqualTopPair => format!(
                "Rule 1a: two highest equal ({} and {}); {}.",
                high, mid, moved
            ),
            Rule::EqualBottomPair => format!(
                "Rule 1b: two lowest equal ({} and {}); {}.",
                mid, low, moved
            ),
            Rule::SymmetricGaps => format!(
                "Rule 2: symmetric gaps; centered on {} with half-tolerance spread; {}.",
                mid, moved
            ),
            Rule::TopPairClose => format!(
                "Rule 3a: top pair already close ({} and {}); {}.",
                high, mid, moved
            ),
            Rule::BottomPairClose => format!(
                "Rule 3b: bottom pair already close ({} and {}); {}.",
                mid, low, moved
            ),
            Rule::MiddleAnchor => format!(
                "Rule 4: middle value ({}) used as anchor; {}.",
                mid, moved
            ),
            Rule::GenericCentering => format!(
                "Rule 5: generic centering between {} and {}; {}.",
                high, low, moved
            ),
            Rule::NoAdjustment => "Rule 6: no adjustment needed.".to_string(),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
