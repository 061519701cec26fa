//! Server-side HTML rendering for the interval form
//!
//! The page is a static template with `{{NAME}}` placeholders. Every value
//! that can come from a request is escaped before substitution.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};
use ifx_common::api::CheckIntervalResponse;
use ifx_common::format::display_score;
use ifx_common::reconcile::DEFAULT_LABELS;
use ifx_common::IntervalPreset;

use crate::form::FormError;

const TEMPLATE: &str = include_str!("ui/form.html");

/// What to show below the form
#[derive(Debug)]
pub enum Outcome<'a> {
    /// Fresh page, nothing submitted yet
    Empty,
    /// Submission passed validation and was checked
    Checked(&'a CheckIntervalResponse),
    /// Submission was rejected before reaching the reconciler
    Rejected(&'a FormError),
}

/// Everything needed to render one page
#[derive(Debug)]
pub struct FormPage<'a> {
    pub presets: &'a [IntervalPreset],
    pub selected: usize,
    /// Raw input values, echoed back into the score fields
    pub values: [&'a str; 3],
    pub outcome: Outcome<'a>,
}

impl<'a> FormPage<'a> {
    /// Blank form for the given preset
    pub fn empty(presets: &'a [IntervalPreset], selected: usize) -> Self {
        Self {
            presets,
            selected,
            values: ["", "", ""],
            outcome: Outcome::Empty,
        }
    }

    fn selected_preset(&self) -> Option<&IntervalPreset> {
        self.presets.get(self.selected)
    }

    pub fn render(&self) -> String {
        let label = self
            .selected_preset()
            .map(|preset| preset.label())
            .unwrap_or_default();

        TEMPLATE
            .replace("{{PRESET_OPTIONS}}", &self.preset_options())
            .replace("{{PRESET_LABEL}}", &encode_text(&label))
            .replace("{{SCORE_INPUTS}}", &self.score_inputs())
            .replace("{{RESULT}}", &render_outcome(&self.outcome))
    }

    fn preset_options(&self) -> String {
        let mut html = String::new();
        for (index, preset) in self.presets.iter().enumerate() {
            let selected = if index == self.selected { " selected" } else { "" };
            let _ = writeln!(
                html,
                "                <option value=\"{}\"{}>{}</option>",
                index,
                selected,
                encode_text(&preset.label())
            );
        }
        html
    }

    fn score_inputs(&self) -> String {
        let max = self
            .selected_preset()
            .map(|preset| preset.max_score.to_string())
            .unwrap_or_default();

        let mut html = String::new();
        for (i, (label, value)) in DEFAULT_LABELS.iter().zip(self.values).enumerate() {
            let _ = writeln!(
                html,
                "            <label>{} <input type=\"number\" name=\"score{}\" min=\"0\" max=\"{}\" step=\"0.25\" value=\"{}\"></label>",
                encode_text(label),
                i + 1,
                max,
                encode_double_quoted_attribute(value)
            );
        }
        html
    }
}

fn render_outcome(outcome: &Outcome<'_>) -> String {
    match outcome {
        Outcome::Empty => String::new(),
        Outcome::Rejected(err) => format!(
            "    <div class=\"banner error\">{}</div>\n",
            encode_text(&err.to_string())
        ),
        Outcome::Checked(response) => render_check(response),
    }
}

fn render_check(response: &CheckIntervalResponse) -> String {
    let mut html = String::new();

    match &response.scores.adjusted {
        None => {
            html.push_str(
                "    <div class=\"banner success\">All scores are within the maximum interval.</div>\n",
            );
            html.push_str("    <table>\n        <tr><th>Judge</th><th>Score</th></tr>\n");
            for entry in response.scores.original.iter() {
                let _ = writeln!(
                    html,
                    "        <tr><td>{}</td><td>{}</td></tr>",
                    encode_text(&entry.evaluator),
                    display_score(entry.score)
                );
            }
            html.push_str("    </table>\n");
            let _ = writeln!(
                html,
                "    <p>Interval: {} (max allowed: {})</p>",
                display_score(response.original_interval),
                display_score(response.max_interval)
            );
        }
        Some(adjusted) => {
            html.push_str(
                "    <div class=\"banner warning\">The interval exceeds the maximum allowed interval. Scores have been adjusted.</div>\n",
            );
            let _ = writeln!(
                html,
                "    <p>Original interval: {} (max allowed: {})</p>",
                display_score(response.original_interval),
                display_score(response.max_interval)
            );
            if let Some(rationale) = &response.rule_applied {
                let _ = writeln!(
                    html,
                    "    <div class=\"banner info\">Rule applied: {}</div>",
                    encode_text(rationale)
                );
            }
            html.push_str(
                "    <table>\n        <tr><th>Judge</th><th>Original</th><th>Adjusted</th></tr>\n",
            );
            for (original, fixed) in response.scores.original.iter().zip(adjusted.iter()) {
                let _ = writeln!(
                    html,
                    "        <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    encode_text(&original.evaluator),
                    display_score(original.score),
                    display_score(fixed.score)
                );
            }
            html.push_str("    </table>\n");
            if let Some(new_interval) = response.new_interval {
                let _ = writeln!(
                    html,
                    "    <p>New interval: {}</p>",
                    display_score(new_interval)
                );
            }
        }
    }

    html
}
