//! Score aggregation: runs every heuristic and builds the [`ScoreReport`].
//!
//! Weights: keyword relevance 40%, skills 30%, formatting 20%, structure 10%.
//!
//! Every stage is a pure function of its inputs, so [`analyze`] is
//! deterministic and safe to call from any number of threads at once.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::formatting;
use crate::keywords;
use crate::matcher;
use crate::skills::ReferenceData;
use crate::structure;
use crate::text;

const KEYWORD_WEIGHT: f64 = 0.4;
const SKILLS_WEIGHT: f64 = 0.3;
const FORMATTING_WEIGHT: f64 = 0.2;
const STRUCTURE_WEIGHT: f64 = 0.1;

/// Most found skills a report lists.
pub const MAX_FOUND_SKILLS: usize = 20;
/// Most missing skills a report lists.
pub const MAX_MISSING_SKILLS: usize = 10;

/// Tunable limits used by the formatting and structure heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Thresholds {
    /// A line with more characters than this counts as long.
    pub long_line_chars: usize,
    /// More long lines than this costs formatting points.
    pub max_long_lines: usize,
    /// Fewer standard sections than this costs formatting points.
    pub min_sections: usize,
    /// A sentence with more words than this counts as long.
    pub long_sentence_words: usize,
    /// More long sentences than this costs structure points.
    pub max_long_sentences: usize,
    /// More passive constructions than this costs structure points.
    pub max_passive_matches: usize,
    /// A word repeated more often than this is repetitive.
    pub repetition_limit: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            long_line_chars: 120,
            max_long_lines: 5,
            min_sections: 3,
            long_sentence_words: 30,
            max_long_sentences: 3,
            max_passive_matches: 3,
            repetition_limit: 10,
        }
    }
}

/// Score and issues produced by one penalty-based heuristic.
///
/// The score starts at 100 and may drop below zero here; clamping happens
/// when the report is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicOutcome {
    /// Score after penalties.
    pub score: f64,
    /// Human-readable issues, in check order.
    pub issues: Vec<String>,
}

impl HeuristicOutcome {
    /// A perfect score with no issues.
    pub const fn new() -> Self {
        Self {
            score: 100.0,
            issues: Vec::new(),
        }
    }

    /// Record an issue and subtract its penalty.
    pub fn penalize(&mut self, penalty: f64, issue: impl Into<String>) {
        self.score -= penalty;
        self.issues.push(issue.into());
    }
}

impl Default for HeuristicOutcome {
    fn default() -> Self {
        Self::new()
    }
}

/// Qualitative band for a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    /// 80 and above.
    Excellent,
    /// 60 up to 80.
    Good,
    /// Below 60.
    NeedsImprovement,
}

impl Rating {
    /// Band a score.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else {
            Self::NeedsImprovement
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of scoring one resume.
///
/// Every numeric field is within `[0, 100]` and every list is present,
/// possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// Weighted overall score, rounded.
    pub overall: u32,
    /// Job keyword overlap, or action-verb usage without a job description.
    pub keyword_match: f64,
    /// Layout score.
    pub formatting: f64,
    /// Skill coverage score.
    pub skills_score: f64,
    /// Sentence structure and style score.
    pub structure: f64,
    /// Up to 10 job-description skills the resume lacks, in scan order.
    pub missing_skills: Vec<String>,
    /// Up to 20 skills found in the resume, in scan order.
    pub found_skills: Vec<String>,
    /// Formatting problems, in check order.
    pub formatting_issues: Vec<String>,
    /// Structure problems, in check order.
    pub structure_issues: Vec<String>,
}

impl ScoreReport {
    /// Qualitative band of the overall score.
    pub fn rating(&self) -> Rating {
        Rating::from_score(f64::from(self.overall))
    }
}

/// Score a resume using the builtin reference lists and default thresholds.
///
/// An empty `job_description` disables every job-relative branch. Never
/// fails, whatever the input.
pub fn analyze(resume_text: &str, job_description: &str) -> ScoreReport {
    analyze_with(
        resume_text,
        job_description,
        ReferenceData::builtin(),
        &Thresholds::default(),
    )
}

/// Score a resume with explicit reference data and thresholds.
#[tracing::instrument(
    skip_all,
    fields(resume_len = resume_text.len(), job_len = job_description.len())
)]
pub fn analyze_with(
    resume_text: &str,
    job_description: &str,
    reference: &ReferenceData,
    thresholds: &Thresholds,
) -> ScoreReport {
    let resume = text::normalize(resume_text);
    let job = text::normalize(job_description);
    let has_job = !job.is_empty();

    let mut skills = matcher::match_skills(&resume, &job, reference);
    let skills_score = matcher::skills_score(&skills, has_job);
    let keyword_match = keywords::keyword_match(&resume, &job, reference);
    let formatting = formatting::check_formatting(resume_text, &resume, thresholds);
    let structure = structure::check_structure(resume_text, &resume, thresholds);

    let weighted = keyword_match * KEYWORD_WEIGHT
        + skills_score * SKILLS_WEIGHT
        + formatting.score * FORMATTING_WEIGHT
        + structure.score * STRUCTURE_WEIGHT;

    skills.found.truncate(MAX_FOUND_SKILLS);
    skills.missing.truncate(MAX_MISSING_SKILLS);

    let report = ScoreReport {
        overall: clamp_score(weighted.round()) as u32,
        keyword_match: clamp_score(keyword_match),
        formatting: clamp_score(formatting.score),
        skills_score: clamp_score(skills_score),
        structure: clamp_score(structure.score),
        missing_skills: skills.missing,
        found_skills: skills.found,
        formatting_issues: formatting.issues,
        structure_issues: structure.issues,
    };

    tracing::info!(overall = report.overall, has_job, "resume scored");
    report
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
