//! Score containers used by the reconciler
//!
//! `ScoreSet` is the caller-facing value (three labelled scores in input
//! order). `RankedTriple` is the descending view the rules work on; it
//! borrows the labels and remembers each score's input position so an
//! adjustment can be written back without disturbing the original order.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Labels used when the caller does not name its evaluators
pub const DEFAULT_LABELS: [&str; 3] = ["Judge 1", "Judge 2", "Judge 3"];

/// One evaluator's score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub evaluator: String,
    pub score: f64,
}

/// Exactly three labelled scores, kept in insertion order
///
/// Serializes as a JSON object whose keys appear in insertion order,
/// e.g. `{"Judge 1": 15.0, "Judge 2": 14.0, "Judge 3": 13.0}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSet {
    entries: [ScoreEntry; 3],
}

impl ScoreSet {
    /// Build a score set from three (label, score) pairs
    pub fn new<S: Into<String>>(entries: [(S, f64); 3]) -> Self {
        Self {
            entries: entries.map(|(evaluator, score)| ScoreEntry {
                evaluator: evaluator.into(),
                score,
            }),
        }
    }

    /// Build a score set labelled "Judge 1" through "Judge 3"
    pub fn from_scores(scores: [f64; 3]) -> Self {
        Self::new([
            (DEFAULT_LABELS[0], scores[0]),
            (DEFAULT_LABELS[1], scores[1]),
            (DEFAULT_LABELS[2], scores[2]),
        ])
    }

    pub fn entries(&self) -> &[ScoreEntry; 3] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter()
    }

    /// Scores in input order
    pub fn values(&self) -> [f64; 3] {
        [
            self.entries[0].score,
            self.entries[1].score,
            self.entries[2].score,
        ]
    }

    /// Evaluator labels in input order
    pub fn labels(&self) -> [&str; 3] {
        [
            self.entries[0].evaluator.as_str(),
            self.entries[1].evaluator.as_str(),
            self.entries[2].evaluator.as_str(),
        ]
    }

    /// Look up a score by evaluator label
    pub fn get(&self, evaluator: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.evaluator == evaluator)
            .map(|entry| entry.score)
    }

    /// Highest score minus lowest score
    pub fn extreme_interval(&self) -> f64 {
        let values = self.values();
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        max - min
    }

    pub(crate) fn set_score(&mut self, index: usize, score: f64) {
        self.entries[index].score = score;
    }
}

impl Serialize for ScoreSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.evaluator, &entry.score)?;
        }
        map.end()
    }
}

/// A score in ranked position, remembering where it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedScore<'a> {
    /// Position in the originating `ScoreSet`
    pub index: usize,
    pub evaluator: &'a str,
    pub score: f64,
}

/// Scores sorted descending into highest, middle and lowest
///
/// Equal scores keep their input order, so `{A: 20, B: 20, C: 10}` ranks
/// A above B.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedTriple<'a> {
    pub highest: RankedScore<'a>,
    pub middle: RankedScore<'a>,
    pub lowest: RankedScore<'a>,
}

impl<'a> RankedTriple<'a> {
    pub fn from_scores(scores: &'a ScoreSet) -> Self {
        let mut order = [0usize, 1, 2];
        let values = scores.values();
        // sort_by is stable: ties stay in input order
        order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

        let ranked = move |index: usize| RankedScore {
            index,
            evaluator: scores.entries[index].evaluator.as_str(),
            score: values[index],
        };

        Self {
            highest: ranked(order[0]),
            middle: ranked(order[1]),
            lowest: ranked(order[2]),
        }
    }

    /// Highest minus middle
    pub fn gap_top(&self) -> f64 {
        self.highest.score - self.middle.score
    }

    /// Middle minus lowest
    pub fn gap_bottom(&self) -> f64 {
        self.middle.score - self.lowest.score
    }

    /// Highest minus lowest
    pub fn gap_total(&self) -> f64 {
        self.highest.score - self.lowest.score
    }
}
