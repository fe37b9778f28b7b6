//! Property tests for the scoring engine.

use ats_score_core::analyze;
use ats_score_core::scoring::{MAX_FOUND_SKILLS, MAX_MISSING_SKILLS};
use ats_score_core::skills::ReferenceData;
use ats_score_core::text::normalize;
use proptest::prelude::*;

/// Free text biased toward resume-like content so skills and verbs show up.
fn resume_text() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        prop::collection::vec(
            prop_oneof![
                Just("Python".to_string()),
                Just("javascript".to_string()),
                Just("Led".to_string()),
                Just("machine learning".to_string()),
                Just("Experience".to_string()),
                Just("me@example.com".to_string()),
                Just("was tested".to_string()),
                Just("\n".to_string()),
                Just(". ".to_string()),
                "[a-zA-Z]{1,12}",
            ],
            0..80,
        )
        .prop_map(|words| words.join(" ")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn analyze_is_deterministic(resume in resume_text(), job in resume_text()) {
        prop_assert_eq!(analyze(&resume, &job), analyze(&resume, &job));
    }

    #[test]
    fn scores_stay_in_bounds(resume in resume_text(), job in resume_text()) {
        let report = analyze(&resume, &job);
        prop_assert!(report.overall <= 100);
        for score in [report.keyword_match, report.formatting, report.skills_score, report.structure] {
            prop_assert!((0.0..=100.0).contains(&score), "score out of range: {}", score);
        }
    }

    #[test]
    fn lists_are_truncated(resume in resume_text(), job in resume_text()) {
        let report = analyze(&resume, &job);
        prop_assert!(report.found_skills.len() <= MAX_FOUND_SKILLS);
        prop_assert!(report.missing_skills.len() <= MAX_MISSING_SKILLS);
    }

    #[test]
    fn no_job_means_no_missing_skills(resume in resume_text()) {
        prop_assert!(analyze(&resume, "").missing_skills.is_empty());
    }

    #[test]
    fn normalize_is_idempotent(text in any::<String>()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn found_skills_follow_scan_order(resume in resume_text()) {
        let normalized = normalize(&resume);
        let expected: Vec<String> = ReferenceData::builtin()
            .skills()
            .iter()
            .filter(|skill| normalized.contains(skill.term.as_str()))
            .take(MAX_FOUND_SKILLS)
            .map(|skill| skill.term.clone())
            .collect();
        prop_assert_eq!(analyze(&resume, "").found_skills, expected);
    }
}

#[test]
fn empty_inputs_produce_full_report() {
    let report = analyze("", "");
    assert_eq!(report.keyword_match, 0.0);
    assert_eq!(report.skills_score, 0.0);
    assert!(report.found_skills.is_empty());
    assert!(report.missing_skills.is_empty());
    assert!(!report.formatting_issues.is_empty());
}

#[test]
fn blank_job_has_no_keywords_and_no_skill_demands() {
    // a whitespace-only job is still a job: keywords score zero instead of verbs
    let blank = analyze("Led and developed the team", "   \n\t ");
    let none = analyze("Led and developed the team", "");
    assert_eq!(blank.keyword_match, 0.0);
    assert_eq!(none.keyword_match, 20.0);
    assert_eq!(blank.missing_skills, none.missing_skills);
    assert_eq!(blank.skills_score, none.skills_score);
}
