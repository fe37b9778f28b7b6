//! Structure and grammar heuristics: sentence length, passive voice, repetition.
//!
//! These are shallow pattern checks, not a grammar model.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::scoring::{HeuristicOutcome, Thresholds};
use crate::text;

/// "was"/"were" followed by an ASCII word ending in "ed".
///
/// Word characters, boundaries and case folding are ASCII-only, so an
/// accented letter next to the match counts as a boundary. Whitespace stays
/// Unicode-aware and also admits U+FEFF.
static PASSIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u:\b(?:was|were))[\s\x{FEFF}]+(?i-u:[a-z0-9_]+ed\b)").expect("valid regex")
});

/// Words this short are never counted as repetitive.
const MAX_IGNORED_WORD_LEN: usize = 4;
/// How many repetitive words an issue names.
const REPETITIVE_WORDS_SHOWN: usize = 5;

const LONG_SENTENCE_PENALTY: f64 = 15.0;
const PASSIVE_PENALTY: f64 = 10.0;
const REPETITION_PENALTY: f64 = 5.0;

/// Check sentence structure and style of a resume.
///
/// Sentence length and passive voice look at `raw`; repetition counts
/// tokens of `normalized`. Issues are returned in check order and the score
/// starts at 100.
#[tracing::instrument(skip_all, fields(text_len = raw.len()))]
pub fn check_structure(raw: &str, normalized: &str, thresholds: &Thresholds) -> HeuristicOutcome {
    let mut outcome = HeuristicOutcome::new();

    let long_sentences = text::split_sentences(raw)
        .filter(|s| text::words(s).count() > thresholds.long_sentence_words)
        .count();
    if long_sentences > thresholds.max_long_sentences {
        outcome.penalize(
            LONG_SENTENCE_PENALTY,
            "Detected several very long sentences. Keep sentences concise.",
        );
    }

    let passive = count_passive(raw);
    if passive > thresholds.max_passive_matches {
        outcome.penalize(
            PASSIVE_PENALTY,
            "Potential passive voice detected. Use active action verbs (e.g., 'Led' instead of 'Was led').",
        );
    }

    let repetitive = repetitive_words(normalized, thresholds.repetition_limit);
    if !repetitive.is_empty() {
        let shown: Vec<&str> = repetitive
            .iter()
            .take(REPETITIVE_WORDS_SHOWN)
            .copied()
            .collect();
        outcome.penalize(
            REPETITION_PENALTY,
            format!("Repetitive words detected: {}", shown.join(", ")),
        );
    }

    tracing::debug!(
        long_sentences,
        passive,
        repetitive = repetitive.len(),
        score = outcome.score,
        "structure checked"
    );
    outcome
}

/// Count "was/were + -ed" constructions in raw text.
pub fn count_passive(raw: &str) -> usize {
    PASSIVE_PATTERN.find_iter(raw).count()
}

/// Words longer than four characters that occur more than `limit` times.
///
/// Integer-like words (`10000`, not `01234`) come first in ascending
/// order; the rest follow in order of first appearance.
pub fn repetitive_words(normalized: &str, limit: usize) -> Vec<&str> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for word in text::words(normalized) {
        if word.chars().count() > MAX_IGNORED_WORD_LEN {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut repeated: Vec<&str> = counts
        .into_iter()
        .filter(|(_, count)| *count > limit)
        .map(|(word, _)| word)
        .collect();
    // stable, so non-numeric words keep first-seen order
    repeated.sort_by_key(|word| index_key(word).map_or((1, 0), |n| (0, n)));
    repeated
}

/// Canonical non-negative integer below `u32::MAX`, without leading zeros.
fn index_key(word: &str) -> Option<u32> {
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if word.len() > 1 && word.starts_with('0') {
        return None;
    }
    word.parse::<u32>().ok().filter(|n| *n != u32::MAX)
}
