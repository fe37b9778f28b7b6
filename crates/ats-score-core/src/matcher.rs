//! Skill matching against the reference lists.

use serde::{Deserialize, Serialize};

use crate::skills::ReferenceData;

/// Result of scanning a resume (and optionally a job description) for skills.
///
/// `found` and `missing` are in scan order and untruncated; the report
/// keeps only the first 20 and 10 respectively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    /// Skills present in the resume.
    pub found: Vec<String>,
    /// Skills the job description asks for that the resume lacks.
    pub missing: Vec<String>,
    /// Number of skills mentioned in the job description.
    pub job_skill_total: usize,
    /// Job-description skills also present in the resume.
    pub job_skill_matches: usize,
}

/// Scan normalized texts for reference skills.
///
/// Containment is a literal substring test, so "machine learning" also
/// matches inside "unmachine learningx" and "java" inside "javascript".
/// The job-description pass only runs when `job` is non-empty.
#[tracing::instrument(skip_all, fields(resume_len = resume.len(), job_len = job.len()))]
pub fn match_skills(resume: &str, job: &str, reference: &ReferenceData) -> SkillMatch {
    let in_resume = reference.skill_presence(resume);
    let mut result = SkillMatch::default();

    for (skill, &hit) in reference.skills().iter().zip(&in_resume) {
        if hit {
            result.found.push(skill.term.clone());
        }
    }

    if !job.is_empty() {
        let in_job = reference.skill_presence(job);
        for ((skill, &wanted), &have) in reference.skills().iter().zip(&in_job).zip(&in_resume) {
            if !wanted {
                continue;
            }
            result.job_skill_total += 1;
            if have {
                result.job_skill_matches += 1;
            } else {
                result.missing.push(skill.term.clone());
            }
        }
    }

    tracing::debug!(
        found = result.found.len(),
        job_total = result.job_skill_total,
        job_matches = result.job_skill_matches,
        "skills matched"
    );
    result
}

/// Score skill coverage from 0 to 100.
///
/// With a job description that names at least one known skill, this is the
/// share of those skills the resume covers. Otherwise each detected skill
/// is worth 5 points, capped at 100.
pub fn skills_score(matched: &SkillMatch, has_job: bool) -> f64 {
    if has_job && matched.job_skill_total > 0 {
        (matched.job_skill_matches as f64 / matched.job_skill_total as f64) * 100.0
    } else {
        (matched.found.len() as f64 * 5.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize;

    fn run(resume: &str, job: &str) -> SkillMatch {
        match_skills(
            &normalize(resume),
            &normalize(job),
            ReferenceData::builtin(),
        )
    }

    #[test]
    fn finds_skills_in_scan_order() {
        let m = run("Docker, Python and leadership", "");
        assert_eq!(m.found, vec!["python", "docker", "leadership"]);
        assert!(m.missing.is_empty());
        assert_eq!(m.job_skill_total, 0);
    }

    #[test]
    fn job_gap_lists_missing_skills() {
        let m = run(
            "I know javascript and react.",
            "Requires python, javascript, and docker experience.",
        );
        assert_eq!(m.missing, vec!["python", "docker"]);
        // "java" rides along inside "javascript" on both sides
        assert_eq!(m.job_skill_total, 4);
        assert_eq!(m.job_skill_matches, 2);
    }

    #[test]
    fn empty_job_skips_job_pass() {
        let m = run("python", "");
        assert_eq!(m.job_skill_total, 0);
        assert!(m.missing.is_empty());
    }

    #[test]
    fn punctuated_terms_never_match_normalized_text() {
        let m = run("Node.js and C++ and CI/CD", "");
        assert!(!m.found.iter().any(|s| s == "node.js" || s == "c++" || s == "ci/cd"));
    }

    #[test]
    fn score_uses_job_ratio() {
        let m = SkillMatch {
            found: vec!["python".into()],
            missing: vec!["docker".into(), "aws".into()],
            job_skill_total: 3,
            job_skill_matches: 1,
        };
        let score = skills_score(&m, true);
        assert!((score - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn score_falls_back_to_count_when_job_has_no_skills() {
        let m = SkillMatch {
            found: vec!["python".into(), "docker".into()],
            ..SkillMatch::default()
        };
        assert_eq!(skills_score(&m, true), 10.0);
        assert_eq!(skills_score(&m, false), 10.0);
    }

    #[test]
    fn score_count_branch_caps_at_100() {
        let m = SkillMatch {
            found: (0..30).map(|i| format!("s{i}")).collect(),
            ..SkillMatch::default()
        };
        assert_eq!(skills_score(&m, false), 100.0);
    }
}
