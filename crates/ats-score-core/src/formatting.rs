//! Formatting heuristics: line length, standard sections, contact info.

use crate::scoring::{HeuristicOutcome, Thresholds};
use crate::skills::SECTION_KEYWORDS;

/// Penalty for too many long lines.
const LONG_LINE_PENALTY: f64 = 10.0;
/// Penalty for missing standard sections.
const MISSING_SECTIONS_PENALTY: f64 = 20.0;
/// Penalty for a missing email address.
const NO_EMAIL_PENALTY: f64 = 20.0;

/// Check layout of a resume.
///
/// `raw` keeps its newlines and case for the line and `@` checks; section
/// names are looked up in the `normalized` form. Line length is counted in
/// UTF-16 code units, so a character outside the BMP counts twice. Issues are returned in
/// check order and the score starts at 100.
#[tracing::instrument(skip_all, fields(text_len = raw.len()))]
pub fn check_formatting(raw: &str, normalized: &str, thresholds: &Thresholds) -> HeuristicOutcome {
    let mut outcome = HeuristicOutcome::new();

    let long_lines = raw
        .split('\n')
        .filter(|line| line.encode_utf16().count() > thresholds.long_line_chars)
        .count();
    if long_lines > thresholds.max_long_lines {
        outcome.penalize(
            LONG_LINE_PENALTY,
            format!(
                "Found {long_lines} lines that might be too long (over {} chars). Consider wrapping text.",
                thresholds.long_line_chars
            ),
        );
    }

    let (present, missing): (Vec<&str>, Vec<&str>) = SECTION_KEYWORDS
        .iter()
        .copied()
        .partition(|section| normalized.contains(*section));
    if present.len() < thresholds.min_sections {
        outcome.penalize(
            MISSING_SECTIONS_PENALTY,
            format!("Missing standard sections: {}", missing.join(", ")),
        );
    }

    if !raw.contains('@') {
        outcome.penalize(NO_EMAIL_PENALTY, "Could not detect an email address.");
    }

    tracing::debug!(
        long_lines,
        sections = present.len(),
        score = outcome.score,
        "formatting checked"
    );
    outcome
}
