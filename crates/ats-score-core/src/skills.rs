//! Reference data for resume scoring.
//!
//! Curated technical skills, soft skills, action verbs, resume section
//! keywords, and job-description stop words.
//!
//! List order is significant: skills are scanned technical-first, each list
//! in declaration order, and that scan order decides both the order and the
//! truncation of `found_skills` / `missing_skills` in a report.

use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, BuildError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Technical skills, in scan order.
pub const TECHNICAL_SKILLS: &[&str] = &[
    "javascript", "typescript", "react", "vue", "angular", "node.js", "python", "java", "c++",
    "c#", "ruby", "php", "go", "rust", "swift", "kotlin", "sql", "postgresql", "mysql",
    "mongodb", "redis", "docker", "kubernetes", "aws", "azure", "gcp", "git", "ci/cd",
    "jenkins", "html", "css", "sass", "less", "tailwind", "bootstrap", "graphql", "rest api",
    "machine learning", "tensorflow", "pytorch", "data analysis", "pandas", "numpy", "figma",
    "sketch", "adobe xd", "photoshop", "illustrator", "jira", "agile", "scrum", "seo",
    "google analytics", "excel", "power bi", "tableau", "salesforce", "linux", "bash",
    "shell scripting", "cybersecurity", "network", "tcp/ip",
];

/// Soft skills, scanned after [`TECHNICAL_SKILLS`].
pub const SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "critical thinking",
    "adaptability",
    "creativity",
    "time management",
    "organization",
    "attention to detail",
    "collaboration",
    "empathy",
    "negotiation",
    "conflict resolution",
    "public speaking",
    "mentoring",
    "decision making",
    "strategic thinking",
    "emotional intelligence",
];

/// Strong action verbs rewarded when no job description is given.
pub const ACTION_VERBS: &[&str] = &[
    "managed", "led", "developed", "created", "designed", "implemented", "optimized",
    "increased", "decreased", "improved", "launched", "initiated", "collaborated", "analyzed",
    "engineered", "built", "spearheaded", "orchestrated", "architected", "streamlined",
    "accelerated", "transformed", "revamped", "innovated",
];

/// Standard resume section names, in the order they are reported missing.
pub const SECTION_KEYWORDS: &[&str] = &["experience", "education", "skills", "summary", "projects"];

/// Words ignored when extracting job-description keywords.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "a", "an", "in", "to", "for", "of", "with", "on", "at", "by", "from",
];

/// Which reference list a skill came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    /// Tools, languages, platforms, and methodologies.
    Technical,
    /// Interpersonal and working-style skills.
    Soft,
}

impl SkillCategory {
    /// Returns the category as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Soft => "soft",
        }
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lowercase skill term and its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Skill {
    /// The term as matched against normalized text (may contain spaces).
    pub term: String,
    /// The list this term belongs to.
    pub category: SkillCategory,
}

/// Immutable reference lists plus the automatons that scan for them.
///
/// Built once and shared read-only; the scoring functions take it by
/// reference so tests and embedders can inject their own lists.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    skills: Vec<Skill>,
    action_verbs: Vec<String>,
    skill_scanner: AhoCorasick,
    verb_scanner: AhoCorasick,
}

static BUILTIN: LazyLock<ReferenceData> = LazyLock::new(|| {
    ReferenceData::new(
        TECHNICAL_SKILLS.iter().copied(),
        SOFT_SKILLS.iter().copied(),
        ACTION_VERBS.iter().copied(),
    )
    .expect("builtin reference lists build")
});

impl ReferenceData {
    /// Build reference data from custom lists.
    ///
    /// Scan order is `technical` followed by `soft`, each in iteration order.
    pub fn new<T, S, V>(technical: T, soft: S, action_verbs: V) -> Result<Self, BuildError>
    where
        T: IntoIterator,
        T::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let skills: Vec<Skill> = technical
            .into_iter()
            .map(|term| Skill {
                term: term.into(),
                category: SkillCategory::Technical,
            })
            .chain(soft.into_iter().map(|term| Skill {
                term: term.into(),
                category: SkillCategory::Soft,
            }))
            .collect();
        let action_verbs: Vec<String> = action_verbs.into_iter().map(Into::into).collect();

        let skill_scanner = AhoCorasick::new(skills.iter().map(|s| s.term.as_str()))?;
        let verb_scanner = AhoCorasick::new(&action_verbs)?;

        Ok(Self {
            skills,
            action_verbs,
            skill_scanner,
            verb_scanner,
        })
    }

    /// The process-wide builtin lists.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// All skills in scan order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Skills of one category, in scan order.
    pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(move |s| s.category == category)
    }

    /// Action verbs in declaration order.
    pub fn action_verbs(&self) -> &[String] {
        &self.action_verbs
    }

    /// For each skill in scan order, whether it occurs as a substring of `haystack`.
    pub fn skill_presence(&self, haystack: &str) -> Vec<bool> {
        presence(&self.skill_scanner, self.skills.len(), haystack)
    }

    /// Number of distinct action verbs occurring as substrings of `haystack`.
    pub fn action_verb_count(&self, haystack: &str) -> usize {
        presence(&self.verb_scanner, self.action_verbs.len(), haystack)
            .into_iter()
            .filter(|&hit| hit)
            .count()
    }
}

/// Mark every pattern that occurs anywhere in `haystack`, overlaps included,
/// so "java" is still seen inside "javascript".
fn presence(scanner: &AhoCorasick, patterns: usize, haystack: &str) -> Vec<bool> {
    let mut present = vec![false; patterns];
    for m in scanner.find_overlapping_iter(haystack) {
        present[m.pattern().as_usize()] = true;
    }
    present
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_scan_order_is_technical_then_soft() {
        let data = ReferenceData::builtin();
        assert_eq!(data.skills().len(), TECHNICAL_SKILLS.len() + SOFT_SKILLS.len());
        assert_eq!(data.skills()[0].term, "javascript");
        assert_eq!(data.skills()[0].category, SkillCategory::Technical);
        let first_soft = &data.skills()[TECHNICAL_SKILLS.len()];
        assert_eq!(first_soft.term, "communication");
        assert_eq!(first_soft.category, SkillCategory::Soft);
    }

    #[test]
    fn presence_sees_overlapping_terms() {
        let data = ReferenceData::builtin();
        let present = data.skill_presence("senior javascript dev");
        let hits: Vec<&str> = data
            .skills()
            .iter()
            .zip(present)
            .filter(|(_, hit)| *hit)
            .map(|(s, _)| s.term.as_str())
            .collect();
        assert_eq!(hits, vec!["javascript", "java"]);
    }

    #[test]
    fn presence_matches_multi_word_terms_literally() {
        let data = ReferenceData::builtin();
        let present = data.skill_presence("unmachine learningx");
        let idx = data
            .skills()
            .iter()
            .position(|s| s.term == "machine learning")
            .unwrap();
        assert!(present[idx]);
    }

    #[test]
    fn presence_on_empty_text() {
        let data = ReferenceData::builtin();
        assert!(data.skill_presence("").iter().all(|hit| !hit));
        assert_eq!(data.action_verb_count(""), 0);
    }

    #[test]
    fn verb_count_is_distinct() {
        let data = ReferenceData::builtin();
        assert_eq!(data.action_verb_count("led led led"), 1);
        assert_eq!(data.action_verb_count("managed and built"), 2);
    }

    #[test]
    fn custom_lists() {
        let data = ReferenceData::new(["zig"], ["patience"], ["shipped"]).unwrap();
        assert_eq!(data.skills_in(SkillCategory::Soft).count(), 1);
        assert_eq!(data.skill_presence("zig and patience"), vec![true, true]);
        assert_eq!(data.action_verb_count("shipped it"), 1);
    }

    #[test]
    fn category_as_str() {
        assert_eq!(SkillCategory::Technical.as_str(), "technical");
        assert_eq!(SkillCategory::Soft.to_string(), "soft");
    }
}
