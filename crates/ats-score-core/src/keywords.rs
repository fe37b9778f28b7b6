//! Keyword relevance scoring.
//!
//! With a job description this measures whether the resume speaks the
//! employer's language. Without one it measures action-verb usage instead.

use std::collections::HashSet;

use crate::skills::{ReferenceData, STOP_WORDS};
use crate::text;

/// Job-description words shorter than this (or equal) are ignored.
const MIN_KEYWORD_LEN: usize = 3;

/// Score keyword relevance from 0 to 100.
///
/// Both inputs must already be normalized. An empty `job` switches to the
/// action-verb branch: each distinct verb found is worth 10 points, capped
/// at 100.
#[tracing::instrument(skip_all, fields(resume_len = resume.len(), job_len = job.len()))]
pub fn keyword_match(resume: &str, job: &str, reference: &ReferenceData) -> f64 {
    if job.is_empty() {
        let verbs = reference.action_verb_count(resume);
        tracing::debug!(verbs, "scored action verbs");
        return (verbs as f64 * 10.0).min(100.0);
    }

    let keywords = job_keywords(job);
    if keywords.is_empty() {
        return 0.0;
    }

    let resume_words: HashSet<&str> = text::words(resume).collect();
    let matches = keywords.iter().filter(|w| resume_words.contains(*w)).count();
    tracing::debug!(matches, total = keywords.len(), "scored job keywords");

    (matches as f64 / keywords.len() as f64) * 100.0
}

/// Significant words of a normalized job description, duplicates kept.
pub fn job_keywords(job: &str) -> Vec<&str> {
    text::words(job)
        .filter(|w| w.chars().count() > MIN_KEYWORD_LEN && !STOP_WORDS.contains(w))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize;

    fn score(resume: &str, job: &str) -> f64 {
        keyword_match(
            &normalize(resume),
            &normalize(job),
            ReferenceData::builtin(),
        )
    }

    #[test]
    fn action_verbs_without_job() {
        let s = score("Led and developed and created and designed and implemented", "");
        assert_eq!(s, 50.0);
    }

    #[test]
    fn action_verbs_cap_at_100() {
        let s = score(
            "managed led developed created designed implemented optimized increased \
             decreased improved launched initiated",
            "",
        );
        assert_eq!(s, 100.0);
    }

    #[test]
    fn job_keywords_drop_short_and_stop_words() {
        let job = normalize("Work with the team on Rust services from day one");
        assert_eq!(job_keywords(&job), vec!["work", "team", "rust", "services"]);
    }

    #[test]
    fn job_overlap_ratio() {
        // keywords: build, rust, services, rust -> resume covers rust twice
        let s = score("I write rust", "Build Rust services, Rust!");
        assert_eq!(s, 50.0);
    }

    #[test]
    fn job_without_keywords_scores_zero() {
        assert_eq!(score("anything at all", "the and of to"), 0.0);
    }

    #[test]
    fn whole_word_match_only_for_job_keywords() {
        assert_eq!(score("rustacean", "rust"), 0.0);
        assert_eq!(score("a rust dev", "rust"), 100.0);
        assert_eq!(score("a rusty dev", "rusty code"), 50.0);
    }
}
