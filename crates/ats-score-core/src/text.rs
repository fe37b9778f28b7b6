//! Text processing utilities.
//!
//! Provides normalization, whitespace tokenization, and sentence splitting
//! for use by the matchers and heuristics.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of sentence terminators.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Canonicalize free text for substring and keyword matching.
///
/// Lowercases everything, then turns each character that is not an ASCII
/// word character (`[A-Za-z0-9_]`) or whitespace into a single space.
/// Repeated spaces are left in place; [`words`] splits on whitespace runs.
///
/// ```
/// use ats_score_core::text::normalize;
///
/// assert_eq!(normalize("Node.js, C++!"), "node js  c   ");
/// ```
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Split text into whitespace-separated tokens.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Split raw text on runs of `.`, `!`, and `?`, trimming each piece.
///
/// Unlike a grammar-aware splitter this does not special-case
/// abbreviations or decimals; "3.5 years" yields two pieces.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE_BREAK.split(text).map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Hello, World!"), "hello  world ");
    }

    #[test]
    fn normalize_keeps_digits_underscore_and_newlines() {
        assert_eq!(normalize("Top_10\nList"), "top_10\nlist");
    }

    #[test]
    fn normalize_does_not_collapse_spaces() {
        assert_eq!(normalize("a -- b"), "a    b");
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_replaces_non_ascii_letters() {
        assert_eq!(normalize("café"), "caf ");
    }

    #[test]
    fn normalize_is_idempotent_on_sample() {
        let once = normalize("Led a 5-person team @ ACME (2019–2021).");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn words_skips_whitespace_runs() {
        let tokens: Vec<_> = words("  led   the\tteam \n").collect();
        assert_eq!(tokens, vec!["led", "the", "team"]);
    }

    #[test]
    fn split_sentences_on_terminator_runs() {
        let sentences: Vec<_> = split_sentences("One. Two!? Three...").collect();
        assert_eq!(sentences, vec!["One", "Two", "Three", ""]);
    }

    #[test]
    fn split_sentences_empty_input() {
        let sentences: Vec<_> = split_sentences("").collect();
        assert_eq!(sentences, vec![""]);
    }
}
